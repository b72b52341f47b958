//! The agr typer: one aligner run and one result per call

use crate::aligners::{Aligner, BlastnAligner, KmaAligner, ReadsInput};
use crate::runner::{CommandRunner, SystemRunner};
use crate::toolchain::Toolchain;
use agrtyper_core::config::DatabaseConfig;
use agrtyper_core::{AgrResult, TypingResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Reference FASTA the databases are built from
pub const REFERENCE_FASTA: &str = "agr_references.fasta";

/// Location of the reference databases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseLayout {
    dir: PathBuf,
    blast_db_name: String,
    kma_db_name: String,
}

impl DatabaseLayout {
    /// Layout with the default database names
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::from_config(dir, &DatabaseConfig::default())
    }

    pub fn from_config(dir: impl Into<PathBuf>, config: &DatabaseConfig) -> Self {
        Self {
            dir: dir.into(),
            blast_db_name: config.blast_db_name.clone(),
            kma_db_name: config.kma_db_name.clone(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// BLAST database prefix (`-db`)
    pub fn blast_db(&self) -> PathBuf {
        self.dir.join(&self.blast_db_name)
    }

    /// KMA index prefix (`-t_db`)
    pub fn kma_db(&self) -> PathBuf {
        self.dir.join(&self.kma_db_name)
    }

    pub fn reference_fasta(&self) -> PathBuf {
        self.dir.join(REFERENCE_FASTA)
    }

    /// Whether any BLAST database volume exists
    pub fn has_blast_db(&self) -> bool {
        self.has_files_with_prefix(&self.blast_db_name)
    }

    /// Whether any KMA index file exists
    pub fn has_kma_db(&self) -> bool {
        self.has_files_with_prefix(&self.kma_db_name)
    }

    fn has_files_with_prefix(&self, name: &str) -> bool {
        let prefix = format!("{}.", name);
        fs::read_dir(&self.dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .any(|e| e.file_name().to_string_lossy().starts_with(&prefix))
            })
            .unwrap_or(false)
    }
}

/// Types samples into agr groups
pub struct AgrTyper<R: CommandRunner = SystemRunner> {
    db: DatabaseLayout,
    toolchain: Toolchain,
    runner: R,
    blastn: BlastnAligner,
    kma: KmaAligner,
}

impl AgrTyper<SystemRunner> {
    /// Typer using PATH and the current tracing span
    pub fn new(db: DatabaseLayout) -> Self {
        Self::with_runner(db, Toolchain::from_env(), SystemRunner::new())
    }
}

impl<R: CommandRunner> AgrTyper<R> {
    pub fn with_runner(db: DatabaseLayout, toolchain: Toolchain, runner: R) -> Self {
        Self {
            db,
            toolchain,
            runner,
            blastn: BlastnAligner::new(),
            kma: KmaAligner::new(),
        }
    }

    /// Thread count handed to both aligners
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.blastn = self.blastn.with_threads(threads);
        self.kma = self.kma.with_threads(threads);
        self
    }

    pub fn database(&self) -> &DatabaseLayout {
        &self.db
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Type a genome assembly with `blastn`.
    ///
    /// `output_dir` must already exist.
    pub fn type_assembly(&self, assembly: &Path, output_dir: &Path) -> AgrResult<TypingResult> {
        tracing::info!("Typing assembly {}", assembly.display());
        self.type_with(&self.blastn, &assembly.to_path_buf(), &self.db.blast_db(), output_dir)
    }

    /// Type single- or paired-end reads with `kma`.
    ///
    /// `output_dir` must already exist.
    pub fn type_reads(&self, reads: &ReadsInput, output_dir: &Path) -> AgrResult<TypingResult> {
        tracing::info!(
            "Typing {} reads {}",
            if reads.is_paired() { "paired-end" } else { "single-end" },
            reads.forward.display()
        );
        self.type_with(&self.kma, reads, &self.db.kma_db(), output_dir)
    }

    fn type_with<A: Aligner>(
        &self,
        aligner: &A,
        input: &A::Input,
        db: &Path,
        output_dir: &Path,
    ) -> AgrResult<TypingResult> {
        let report = aligner.run(&self.toolchain, &self.runner, input, db, output_dir)?;
        let result = aligner.interpret(&report)?;
        tracing::info!(
            "{} assigned agr group {} (confidence {:.2})",
            aligner.tool(),
            result.agr_group(),
            result.confidence()
        );
        Ok(result)
    }
}
