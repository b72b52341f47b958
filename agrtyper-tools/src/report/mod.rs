//! Aligner report parsing and best-hit selection

pub mod blast;
pub mod kma;

pub use blast::{parse_blast_report, BlastHit, BLAST_COLUMNS};
pub use kma::{parse_kma_report, KmaHit, KMA_REQUIRED_COLUMNS};

use agrtyper_core::{AgrError, TypingResult};
use std::path::Path;

/// A report row that can compete for best hit
pub trait RankedHit {
    /// Ranking statistic; higher is better
    fn rank(&self) -> f64;

    /// Project this row into a typing result
    fn to_result(&self) -> TypingResult;
}

/// Row with the highest rank.
///
/// On equal rank the earliest row wins. Rows ranked NaN never win.
pub fn select_best<H: RankedHit>(hits: &[H]) -> Option<&H> {
    let mut best: Option<&H> = None;
    for hit in hits.iter().filter(|h| !h.rank().is_nan()) {
        match best {
            Some(current) if hit.rank() <= current.rank() => {}
            _ => best = Some(hit),
        }
    }
    best
}

/// Typing result of the best row, or `Unknown` when there is none
pub fn select_result<H: RankedHit>(hits: &[H]) -> TypingResult {
    select_best(hits)
        .map(RankedHit::to_result)
        .unwrap_or_else(TypingResult::unknown)
}

/// Map a csv error onto the report it came from
fn csv_error(path: &Path, line: usize, err: csv::Error) -> AgrError {
    let line = err.position().map(|p| p.line() as usize).unwrap_or(line);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => AgrError::Io(io),
        _ => AgrError::report_parse(path, line, message),
    }
}
