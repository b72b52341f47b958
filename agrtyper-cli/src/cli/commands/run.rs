use crate::cli::output::*;
use agrtyper_core::{AgrError, Config, TypingResult};
use agrtyper_tools::{AgrTyper, DatabaseLayout, ReadsInput, SystemRunner};
use anyhow::Context;
use clap::{ArgGroup, Args};
use std::fs;
use std::path::{Path, PathBuf};

/// File written into the output directory
pub const RESULT_FILE: &str = "result.json";

#[derive(Args)]
#[command(group(ArgGroup::new("input").required(true).args(["fasta", "fastq_1"])))]
pub struct RunArgs {
    /// Input genome assembly (FASTA)
    #[arg(long, value_name = "PATH")]
    pub fasta: Option<PathBuf>,

    /// Input reads R1 (FASTQ)
    #[arg(long = "fastq-1", value_name = "PATH")]
    pub fastq_1: Option<PathBuf>,

    /// Input reads R2 (FASTQ)
    #[arg(long = "fastq-2", value_name = "PATH", requires = "fastq_1")]
    pub fastq_2: Option<PathBuf>,

    /// Path to database directory
    #[arg(long, value_name = "PATH")]
    pub db_dir: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Threads handed to the aligner (defaults to the config value)
    #[arg(short = 't', long)]
    pub threads: Option<usize>,
}

enum Sample {
    Assembly(PathBuf),
    Reads(ReadsInput),
}

impl Sample {
    fn from_args(args: &RunArgs) -> anyhow::Result<Self> {
        let sample = match (&args.fasta, &args.fastq_1, &args.fastq_2) {
            (Some(fasta), None, None) => Sample::Assembly(fasta.clone()),
            (None, Some(r1), None) => Sample::Reads(ReadsInput::single(r1)),
            (None, Some(r1), Some(r2)) => Sample::Reads(ReadsInput::paired(r1, r2)),
            _ => {
                return Err(AgrError::InvalidInput(
                    "Must provide either --fasta or --fastq-1".to_string(),
                )
                .into())
            }
        };
        sample.ensure_inputs_exist()?;
        Ok(sample)
    }

    fn mode(&self) -> &'static str {
        match self {
            Sample::Assembly(_) => "assembly",
            Sample::Reads(_) => "reads",
        }
    }

    fn primary(&self) -> &Path {
        match self {
            Sample::Assembly(path) => path,
            Sample::Reads(reads) => &reads.forward,
        }
    }

    fn ensure_inputs_exist(&self) -> Result<(), AgrError> {
        let paths: Vec<&Path> = match self {
            Sample::Assembly(path) => vec![path.as_path()],
            Sample::Reads(reads) => std::iter::once(reads.forward.as_path())
                .chain(reads.reverse.as_deref())
                .collect(),
        };
        for path in paths {
            if !path.is_file() {
                return Err(AgrError::InvalidInput(format!(
                    "Input file not found: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

pub fn run(args: RunArgs, config: &Config) -> anyhow::Result<()> {
    let sample = Sample::from_args(&args)?;

    fs::create_dir_all(&args.output).with_context(|| {
        format!("Failed to create output directory {}", args.output.display())
    })?;

    let db_dir = config.resolve_db_dir(args.db_dir.as_deref());
    let db = DatabaseLayout::from_config(&db_dir, &config.database);
    let threads = args.threads.unwrap_or(config.tools.threads);

    let span = tracing::info_span!(
        "typing",
        mode = sample.mode(),
        sample = %sample.primary().display()
    );
    let typer = AgrTyper::with_runner(
        db,
        super::toolchain_from_config(config),
        SystemRunner::with_span(span.clone()),
    )
    .with_threads(threads);

    tracing::debug!("Using database directory {}", db_dir.display());
    let result = {
        let _entered = span.enter();
        match &sample {
            Sample::Assembly(fasta) => {
                action(&format!("Typing assembly: {}", fasta.display()));
                typer.type_assembly(fasta, &args.output)?
            }
            Sample::Reads(reads) => {
                action(&format!("Typing reads: {}", reads.forward.display()));
                typer.type_reads(reads, &args.output)?
            }
        }
    };

    let json = save_result(&result, &args.output)?;
    if result.is_unknown() {
        info("No agr reference matched the sample");
    }
    println!("{}", json);
    Ok(())
}

/// Write `result.json` and return the JSON text
fn save_result(result: &TypingResult, output_dir: &Path) -> anyhow::Result<String> {
    let json = result.to_json_pretty()?;
    let path = output_dir.join(RESULT_FILE);
    fs::write(&path, format!("{}\n", json))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    success(&format!("Results saved to {}", path.display()));
    Ok(json)
}
