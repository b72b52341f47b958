//! KMA `.res` template summary reports

use super::{csv_error, RankedHit};
use agrtyper_core::{AgrError, AgrResult, TypingResult};
use csv::StringRecord;
use std::fmt::Display;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

const KMA_COLUMN_COUNT: usize = 9;

/// Header names that must be present in a `.res` report
pub const KMA_REQUIRED_COLUMNS: [&str; KMA_COLUMN_COUNT] = [
    "#Template",
    "Score",
    "Expected",
    "Template_length",
    "Template_Identity",
    "Template_Coverage",
    "Depth",
    "q_value",
    "p_value",
];

/// One row of a template-mapping report
#[derive(Debug, Clone, PartialEq)]
pub struct KmaHit {
    /// Template name as written by KMA, padding included
    pub template_id: String,
    pub score: f64,
    pub expected: f64,
    pub template_length: u64,
    pub template_identity: f64,
    pub template_coverage: f64,
    pub depth: f64,
    pub q_value: f64,
    pub p_value: f64,
}

impl KmaHit {
    /// Template name without surrounding whitespace
    pub fn group(&self) -> &str {
        self.template_id.trim()
    }
}

impl RankedHit for KmaHit {
    fn rank(&self) -> f64 {
        self.score
    }

    fn to_result(&self) -> TypingResult {
        TypingResult::from_reads(self.group(), self.template_identity, self.depth)
    }
}

/// Column positions resolved from the header line
struct KmaColumns([usize; KMA_COLUMN_COUNT]);

impl KmaColumns {
    fn from_headers(headers: &StringRecord, source: &Path) -> AgrResult<Self> {
        let mut positions = [0usize; KMA_COLUMN_COUNT];
        for (slot, name) in positions.iter_mut().zip(KMA_REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| AgrError::report_parse(source, 1, format!("missing column {}", name)))?;
        }
        Ok(Self(positions))
    }

    fn text<'r>(&self, record: &'r StringRecord, column: usize) -> &'r str {
        record.get(self.0[column]).unwrap_or("")
    }

    fn number<T>(&self, record: &StringRecord, column: usize, source: &Path, line: usize) -> AgrResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.text(record, column).trim();
        raw.parse::<T>().map_err(|e| {
            AgrError::report_parse(
                source,
                line,
                format!("invalid value '{}' in column {}: {}", raw, KMA_REQUIRED_COLUMNS[column], e),
            )
        })
    }
}

/// Parse a KMA `.res` report file
pub fn parse_kma_report(path: &Path) -> AgrResult<Vec<KmaHit>> {
    let file = File::open(path)?;
    parse_kma_res(file, path)
}

/// Parse `.res` rows from `reader`; `source` names it in errors
pub fn parse_kma_res<R: Read>(reader: R, source: &Path) -> AgrResult<Vec<KmaHit>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|e| csv_error(source, 1, e))?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Ok(Vec::new());
    }
    let columns = KmaColumns::from_headers(&headers, source)?;

    let mut hits = Vec::new();
    for (index, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| csv_error(source, index + 2, e))?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 2);

        if record.len() == 1 && record[0].trim().is_empty() {
            continue;
        }
        if record.len() != headers.len() {
            return Err(AgrError::report_parse(
                source,
                line,
                format!("expected {} columns, found {}", headers.len(), record.len()),
            ));
        }

        hits.push(KmaHit {
            template_id: columns.text(&record, 0).to_string(),
            score: columns.number(&record, 1, source, line)?,
            expected: columns.number(&record, 2, source, line)?,
            template_length: columns.number(&record, 3, source, line)?,
            template_identity: columns.number(&record, 4, source, line)?,
            template_coverage: columns.number(&record, 5, source, line)?,
            depth: columns.number(&record, 6, source, line)?,
            q_value: columns.number(&record, 7, source, line)?,
            p_value: columns.number(&record, 8, source, line)?,
        });
    }

    tracing::debug!("Parsed {} KMA templates from {}", hits.len(), source.display());
    Ok(hits)
}
