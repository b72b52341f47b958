//! Locating external aligners on the search path

use agrtyper_core::{AgrError, AgrResult};
use std::ffi::OsString;
use std::path::PathBuf;

/// Resolves executables before they are run.
///
/// Uses `PATH` unless an explicit search path was configured.
#[derive(Debug, Clone, Default)]
pub struct Toolchain {
    search_path: Option<OsString>,
}

impl Toolchain {
    /// Resolve tools through the process `PATH`
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Resolve tools through `search_path` (same syntax as `PATH`)
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    /// Absolute path of `tool`, or [`AgrError::MissingDependency`]
    pub fn locate(&self, tool: &str) -> AgrResult<PathBuf> {
        let found = match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                which::which_in(tool, Some(paths), cwd)
            }
            None => which::which(tool),
        };

        match found {
            Ok(path) => {
                tracing::debug!("Resolved {} to {}", tool, path.display());
                Ok(path)
            }
            Err(_) => Err(AgrError::MissingDependency {
                tool: tool.to_string(),
            }),
        }
    }

    pub fn is_available(&self, tool: &str) -> bool {
        self.locate(tool).is_ok()
    }
}
