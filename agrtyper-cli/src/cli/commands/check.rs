use crate::cli::output::*;
use agrtyper_core::{AgrError, Config};
use agrtyper_tools::{Aligner, BlastnAligner, DatabaseLayout, KmaAligner};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Path to database directory
    #[arg(long, value_name = "PATH")]
    pub db_dir: Option<PathBuf>,
}

pub fn run(args: CheckArgs, config: &Config) -> anyhow::Result<()> {
    let toolchain = super::toolchain_from_config(config);
    let db_dir = config.resolve_db_dir(args.db_dir.as_deref());
    let db = DatabaseLayout::from_config(&db_dir, &config.database);

    section_header("Aligners");
    let tools = [BlastnAligner::new().tool(), KmaAligner::new().tool()];
    let mut missing_tool = None;
    for (i, tool) in tools.iter().enumerate() {
        let found = toolchain.locate(tool);
        let value = match &found {
            Ok(path) => format!("{} ({})", status_mark(true), path.display()),
            Err(_) => status_mark(false),
        };
        tree_item(i == tools.len() - 1, tool, Some(&value));
        if found.is_err() && missing_tool.is_none() {
            missing_tool = Some(tool.to_string());
        }
    }

    section_header(&format!("Databases ({})", db.dir().display()));
    let databases = [
        ("reference FASTA", db.reference_fasta().is_file()),
        ("BLAST database", db.has_blast_db()),
        ("KMA index", db.has_kma_db()),
    ];
    for (i, (label, present)) in databases.iter().enumerate() {
        tree_item(i == databases.len() - 1, label, Some(&status_mark(*present)));
    }
    let databases_ready = db.has_blast_db() && db.has_kma_db();

    if let Some(tool) = missing_tool {
        return Err(AgrError::MissingDependency { tool }.into());
    }
    if !databases_ready {
        warning("Reference databases are incomplete");
        anyhow::bail!("Reference databases not found in {}", db.dir().display());
    }

    success("All aligners and databases are available");
    Ok(())
}
