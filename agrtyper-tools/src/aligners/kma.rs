//! Read typing with `kma`

use super::{Aligner, ReportHandle};
use crate::report::{parse_kma_report, select_result};
use crate::runner::ExternalCommand;
use agrtyper_core::{AgrResult, TypingResult};
use std::path::{Path, PathBuf};

/// Output prefix handed to `kma -o`
pub const KMA_OUTPUT_PREFIX: &str = "kma_results";

/// Single-end or paired-end read files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadsInput {
    pub forward: PathBuf,
    pub reverse: Option<PathBuf>,
}

impl ReadsInput {
    pub fn single(forward: impl Into<PathBuf>) -> Self {
        Self {
            forward: forward.into(),
            reverse: None,
        }
    }

    pub fn paired(forward: impl Into<PathBuf>, reverse: impl Into<PathBuf>) -> Self {
        Self {
            forward: forward.into(),
            reverse: Some(reverse.into()),
        }
    }

    pub fn is_paired(&self) -> bool {
        self.reverse.is_some()
    }
}

/// Template mapping of raw reads against the agr KMA index
#[derive(Debug, Clone)]
pub struct KmaAligner {
    threads: usize,
}

impl Default for KmaAligner {
    fn default() -> Self {
        Self::new()
    }
}

impl KmaAligner {
    pub fn new() -> Self {
        Self { threads: 1 }
    }

    /// `-t` is only passed when above one
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    fn output_prefix(output_dir: &Path) -> PathBuf {
        output_dir.join(KMA_OUTPUT_PREFIX)
    }
}

impl Aligner for KmaAligner {
    type Input = ReadsInput;

    fn tool(&self) -> &'static str {
        "kma"
    }

    fn report_path(&self, output_dir: &Path) -> PathBuf {
        Self::output_prefix(output_dir).with_extension("res")
    }

    fn command(&self, program: &Path, reads: &ReadsInput, db: &Path, output_dir: &Path) -> ExternalCommand {
        let mut cmd = ExternalCommand::new(program);
        cmd = match &reads.reverse {
            Some(reverse) => cmd.arg("-ipe").arg(&reads.forward).arg(reverse),
            None => cmd.arg("-i").arg(&reads.forward),
        };
        cmd = cmd
            .arg("-t_db")
            .arg(db)
            .arg("-o")
            .arg(Self::output_prefix(output_dir))
            // one template per read
            .arg("-1t1");

        if self.threads > 1 {
            cmd = cmd.arg("-t").arg(self.threads.to_string());
        }
        cmd
    }

    fn interpret(&self, report: &ReportHandle) -> AgrResult<TypingResult> {
        if !report.exists() {
            tracing::info!("KMA report {} was not produced", report.path().display());
            return Ok(TypingResult::unknown());
        }
        let hits = parse_kma_report(report.path())?;
        if hits.is_empty() {
            tracing::info!("KMA report {} has no templates", report.path().display());
        }
        Ok(select_result(&hits))
    }
}
