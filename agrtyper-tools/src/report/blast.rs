//! BLAST tabular (`-outfmt 6`) reports

use super::{csv_error, RankedHit};
use agrtyper_core::{AgrError, AgrResult, TypingResult};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns requested from `blastn`, in report order
pub const BLAST_COLUMNS: [&str; 12] = [
    "qseqid", "sseqid", "pident", "length", "mismatch", "gapopen", "qstart", "qend", "sstart",
    "send", "evalue", "bitscore",
];

/// One row of a nucleotide alignment report.
///
/// Coordinates are 1-based inclusive. Start may exceed end on reverse-strand
/// hits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlastHit {
    pub query_id: String,
    pub subject_id: String,
    pub percent_identity: f64,
    pub alignment_length: u64,
    pub mismatches: u64,
    pub gap_opens: u64,
    pub query_start: u64,
    pub query_end: u64,
    pub subject_start: u64,
    pub subject_end: u64,
    pub e_value: f64,
    pub bit_score: f64,
}

impl RankedHit for BlastHit {
    fn rank(&self) -> f64 {
        self.bit_score
    }

    fn to_result(&self) -> TypingResult {
        TypingResult::from_assembly(
            self.subject_id.clone(),
            self.percent_identity,
            self.query_id.clone(),
            self.query_start,
            self.query_end,
        )
    }
}

/// Parse a BLAST tabular report file
pub fn parse_blast_report(path: &Path) -> AgrResult<Vec<BlastHit>> {
    let file = File::open(path)?;
    parse_blast_tabular(file, path)
}

/// Parse BLAST tabular rows from `reader`; `source` names it in errors
pub fn parse_blast_tabular<R: Read>(reader: R, source: &Path) -> AgrResult<Vec<BlastHit>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut hits = Vec::new();
    for (index, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| csv_error(source, index + 1, e))?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 1);

        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        if record.len() != BLAST_COLUMNS.len() {
            return Err(AgrError::report_parse(
                source,
                line,
                format!("expected {} columns, found {}", BLAST_COLUMNS.len(), record.len()),
            ));
        }

        let hit: BlastHit = record
            .deserialize(None)
            .map_err(|e| csv_error(source, line, e))?;
        hits.push(hit);
    }

    tracing::debug!("Parsed {} BLAST hits from {}", hits.len(), source.display());
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::select_result;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> AgrResult<Vec<BlastHit>> {
        parse_blast_tabular(text.as_bytes(), Path::new("blast_results.txt"))
    }

    #[test]
    fn test_parse_single_row() {
        let hits = parse("contig1\tgp1\t99.5\t1000\t0\t0\t1\t1000\t1\t1000\t0.0\t2000\n").unwrap();

        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        assert_eq!(hit.query_id, "contig1");
        assert_eq!(hit.subject_id, "gp1");
        assert_eq!(hit.percent_identity, 99.5);
        assert_eq!(hit.alignment_length, 1000);
        assert_eq!(hit.query_start, 1);
        assert_eq!(hit.query_end, 1000);
        assert_eq!(hit.e_value, 0.0);
        assert_eq!(hit.bit_score, 2000.0);
    }

    #[test]
    fn test_reverse_strand_coordinates_are_kept() {
        let hits = parse("NODE_7\tgp2\t98.1\t3300\t60\t2\t90412\t87113\t1\t3300\t0.0\t5842\n").unwrap();
        assert_eq!(hits[0].query_start, 90412);
        assert_eq!(hits[0].query_end, 87113);

        let result = select_result(&hits);
        assert_eq!(result.start(), Some(90412));
        assert_eq!(result.end(), Some(87113));
    }

    #[test]
    fn test_best_hit_by_bit_score() {
        let report = "\
contig3\tgp1\t85.20\t2900\t420\t11\t100\t3000\t1\t2901\t0.0\t3012
contig3\tgp3\t99.10\t3300\t30\t0\t100\t3400\t1\t3300\t0.0\t5950
contig9\tgp2\t88.00\t800\t96\t3\t5\t805\t2500\t3300\t1e-180\t640
";
        let hits = parse(report).unwrap();
        assert_eq!(hits.len(), 3);

        let result = select_result(&hits);
        assert_eq!(result.agr_group(), "gp3");
        assert_eq!(result.confidence(), 99.10);
        assert_eq!(result.contig(), Some("contig3"));
        assert_eq!(result.start(), Some(100));
        assert_eq!(result.end(), Some(3400));
        assert_eq!(result.depth(), None);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let report = "# BLASTN 2.14.0+\n\ncontig1\tgp4\t97.0\t500\t15\t0\t1\t500\t1\t500\t1e-250\t880\n";
        let hits = parse(report).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].subject_id, "gp4");
    }

    #[test]
    fn test_wrong_column_count_rejected() {
        let report = "\
contig1\tgp1\t99.5\t1000\t0\t0\t1\t1000\t1\t1000\t0.0\t2000
contig2\tgp2\t99.5\t1000\t0\t0\t1\t1000\t1\t1000\t0.0
";
        match parse(report).unwrap_err() {
            AgrError::ReportParse { line, message, .. } => {
                assert_eq!(line, 2);
                assert_eq!(message, "expected 12 columns, found 11");
            }
            other => panic!("Expected ReportParse, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_cell_rejected() {
        let err = parse("contig1\tgp1\thigh\t1000\t0\t0\t1\t1000\t1\t1000\t0.0\t2000\n").unwrap_err();
        assert!(matches!(err, AgrError::ReportParse { line: 1, .. }));
    }

    #[test]
    fn test_empty_input_has_no_hits() {
        assert!(parse("").unwrap().is_empty());
    }
}
