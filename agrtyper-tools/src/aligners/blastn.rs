//! Assembly typing with `blastn`

use super::{Aligner, ReportHandle};
use crate::report::{parse_blast_report, select_result, BLAST_COLUMNS};
use crate::runner::ExternalCommand;
use agrtyper_core::{AgrResult, TypingResult};
use std::path::{Path, PathBuf};

/// Report file name inside the output directory
pub const BLAST_REPORT_NAME: &str = "blast_results.txt";

/// Nucleotide alignment of an assembly against the agr reference database
#[derive(Debug, Clone)]
pub struct BlastnAligner {
    max_target_seqs: usize,
    threads: usize,
}

impl Default for BlastnAligner {
    fn default() -> Self {
        Self::new()
    }
}

impl BlastnAligner {
    pub fn new() -> Self {
        Self {
            max_target_seqs: 1,
            threads: 1,
        }
    }

    /// `-num_threads` is only passed when above one
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Value for `-outfmt`
    pub fn outfmt() -> String {
        format!("6 {}", BLAST_COLUMNS.join(" "))
    }
}

impl Aligner for BlastnAligner {
    type Input = PathBuf;

    fn tool(&self) -> &'static str {
        "blastn"
    }

    fn report_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(BLAST_REPORT_NAME)
    }

    fn command(&self, program: &Path, assembly: &PathBuf, db: &Path, output_dir: &Path) -> ExternalCommand {
        let mut cmd = ExternalCommand::new(program)
            .arg("-query")
            .arg(assembly)
            .arg("-db")
            .arg(db)
            .arg("-outfmt")
            .arg(Self::outfmt())
            .arg("-max_target_seqs")
            .arg(self.max_target_seqs.to_string())
            .arg("-out")
            .arg(self.report_path(output_dir));

        if self.threads > 1 {
            cmd = cmd.arg("-num_threads").arg(self.threads.to_string());
        }
        cmd
    }

    fn interpret(&self, report: &ReportHandle) -> AgrResult<TypingResult> {
        if report.is_empty() {
            tracing::info!("BLAST report {} is missing or empty", report.path().display());
            return Ok(TypingResult::unknown());
        }
        let hits = parse_blast_report(report.path())?;
        Ok(select_result(&hits))
    }
}
