//! Core error types for agrtyper

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for typing operations
#[derive(Error, Debug)]
pub enum AgrError {
    #[error("Required tool '{tool}' not found in PATH")]
    MissingDependency { tool: String },

    #[error("Command failed ({}): {command}: {}", exit_status(.exit_code), .stderr.trim())]
    CommandExecution {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to parse report {} at line {line}: {message}", .path.display())]
    ReportParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for typing operations
pub type AgrResult<T> = Result<T, AgrError>;

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl AgrError {
    /// Build a parse error for a report file
    pub fn report_parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        AgrError::ReportParse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for AgrError {
    fn from(err: serde_json::Error) -> Self {
        AgrError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let missing = AgrError::MissingDependency {
            tool: "blastn".to_string(),
        };
        assert_eq!(missing.to_string(), "Required tool 'blastn' not found in PATH");

        let failed = AgrError::CommandExecution {
            command: "kma -i r1.fq".to_string(),
            exit_code: Some(1),
            stderr: "database not found\n".to_string(),
        };
        assert_eq!(
            failed.to_string(),
            "Command failed (exit code 1): kma -i r1.fq: database not found"
        );

        let killed = AgrError::CommandExecution {
            command: "blastn".to_string(),
            exit_code: None,
            stderr: String::new(),
        };
        assert!(killed.to_string().contains("terminated by signal"));

        let parse = AgrError::report_parse("out/blast_results.txt", 3, "expected 12 columns, found 11");
        assert_eq!(
            parse.to_string(),
            "Failed to parse report out/blast_results.txt at line 3: expected 12 columns, found 11"
        );

        let config = AgrError::Configuration("missing field".to_string());
        assert_eq!(config.to_string(), "Configuration error: missing field");

        let input = AgrError::InvalidInput("no reads".to_string());
        assert_eq!(input.to_string(), "Invalid input: no reads");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: AgrError = io_err.into();

        match err {
            AgrError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let parse_result: Result<serde_json::Value, serde_json::Error> =
            serde_json::from_str("{invalid json}");
        let err: AgrError = parse_result.unwrap_err().into();

        match err {
            AgrError::Serialization(msg) => assert!(msg.contains("key must be a string")),
            _ => panic!("Expected Serialization error variant"),
        }
    }
}
