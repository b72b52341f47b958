//! External aligner integration for agr typing
//!
//! This crate runs the nucleotide aligner (`blastn`) or the read mapper
//! (`kma`) against the agr reference databases, parses their tabular
//! reports and selects the best-matching agr group.

// Modules
pub mod aligners;
pub mod report;
pub mod runner;
pub mod testing;
pub mod toolchain;
pub mod typer;

// Re-exports for convenience
pub use aligners::{Aligner, BlastnAligner, KmaAligner, ReadsInput, ReportHandle};
pub use report::{select_best, select_result, BlastHit, KmaHit, RankedHit};
pub use runner::{CommandRunner, ExternalCommand, SystemRunner};
pub use toolchain::Toolchain;
pub use typer::{AgrTyper, DatabaseLayout};
