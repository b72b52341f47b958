//! Aligner adapters
//!
//! Each adapter knows how to build its command line, where its report
//! lands, and how to turn that report into a [`TypingResult`]. The typer
//! drives every adapter through the same [`Aligner::run`] /
//! [`Aligner::interpret`] pair.

pub mod blastn;
pub mod kma;

pub use blastn::BlastnAligner;
pub use kma::{KmaAligner, ReadsInput};

use crate::runner::{CommandRunner, ExternalCommand};
use crate::toolchain::Toolchain;
use agrtyper_core::{AgrResult, TypingResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Report file left behind by an aligner run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHandle {
    path: PathBuf,
}

impl ReportHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// True when the report is absent or has zero length
    pub fn is_empty(&self) -> bool {
        fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true)
    }
}

/// An external aligner producing a tabular report
pub trait Aligner {
    /// Sample description this aligner accepts
    type Input;

    /// Executable that must resolve before anything runs
    fn tool(&self) -> &'static str;

    /// Where the report for `output_dir` is written
    fn report_path(&self, output_dir: &Path) -> PathBuf;

    /// Command line for one run
    fn command(&self, program: &Path, input: &Self::Input, db: &Path, output_dir: &Path) -> ExternalCommand;

    /// Turn a finished report into a typing result
    fn interpret(&self, report: &ReportHandle) -> AgrResult<TypingResult>;

    /// Check the dependency, run the aligner and hand back its report
    fn run(
        &self,
        toolchain: &Toolchain,
        runner: &dyn CommandRunner,
        input: &Self::Input,
        db: &Path,
        output_dir: &Path,
    ) -> AgrResult<ReportHandle> {
        let program = toolchain.locate(self.tool())?;
        let command = self.command(&program, input, db, output_dir);
        runner.run(&command)?;
        Ok(ReportHandle::new(self.report_path(output_dir)))
    }
}
