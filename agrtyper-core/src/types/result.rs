//! The typing result envelope written to `result.json`

use serde::{Deserialize, Serialize};

/// Group label reported when no reference matched
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Outcome of one typing invocation.
///
/// Mode-specific fields are omitted from the JSON when absent: `contig`,
/// `start` and `end` come from assembly mode, `depth` from reads mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingResult {
    agr_group: String,
    confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contig: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    depth: Option<f64>,
}

impl TypingResult {
    /// Result for a sample with no usable hit
    pub fn unknown() -> Self {
        Self {
            agr_group: UNKNOWN_GROUP.to_string(),
            confidence: 0.0,
            contig: None,
            start: None,
            end: None,
            depth: None,
        }
    }

    /// Result of typing an assembly
    pub fn from_assembly(
        agr_group: impl Into<String>,
        confidence: f64,
        contig: impl Into<String>,
        start: u64,
        end: u64,
    ) -> Self {
        Self {
            agr_group: agr_group.into(),
            confidence,
            contig: Some(contig.into()),
            start: Some(start),
            end: Some(end),
            depth: None,
        }
    }

    /// Result of typing a read set
    pub fn from_reads(agr_group: impl Into<String>, confidence: f64, depth: f64) -> Self {
        Self {
            agr_group: agr_group.into(),
            confidence,
            contig: None,
            start: None,
            end: None,
            depth: Some(depth),
        }
    }

    pub fn agr_group(&self) -> &str {
        &self.agr_group
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn contig(&self) -> Option<&str> {
        self.contig.as_deref()
    }

    pub fn start(&self) -> Option<u64> {
        self.start
    }

    pub fn end(&self) -> Option<u64> {
        self.end
    }

    pub fn depth(&self) -> Option<f64> {
        self.depth
    }

    pub fn is_unknown(&self) -> bool {
        self.agr_group == UNKNOWN_GROUP
    }

    /// Pretty JSON with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String, crate::AgrError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
