//! Mock runner and fake executables for exercising the adapters without
//! real aligners installed

use crate::runner::{CommandRunner, ExternalCommand};
use agrtyper_core::{AgrError, AgrResult};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Records every command and optionally writes a canned report
#[derive(Default)]
pub struct MockRunner {
    calls: RefCell<Vec<ExternalCommand>>,
    report: Option<(PathBuf, String)>,
    failure: Option<String>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `contents` to `path` whenever a command runs
    pub fn writing_report(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.report = Some((path.into(), contents.into()));
        self
    }

    /// Fail every command with exit code 1 and the given stderr
    pub fn failing(mut self, stderr: impl Into<String>) -> Self {
        self.failure = Some(stderr.into());
        self
    }

    /// Commands seen so far, in order
    pub fn calls(&self) -> Vec<ExternalCommand> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &ExternalCommand) -> AgrResult<String> {
        self.calls.borrow_mut().push(command.clone());

        if let Some(stderr) = &self.failure {
            return Err(AgrError::CommandExecution {
                command: command.to_string(),
                exit_code: Some(1),
                stderr: stderr.clone(),
            });
        }

        if let Some((path, contents)) = &self.report {
            fs::write(path, contents)?;
        }
        Ok(String::new())
    }
}

/// Create an executable shell script named `name` in `dir`
pub fn install_fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}", body)).expect("failed to write fake tool");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path).expect("fake tool metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("failed to mark fake tool executable");
    }

    path
}
