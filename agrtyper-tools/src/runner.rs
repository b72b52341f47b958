//! Synchronous execution of external programs

use agrtyper_core::{AgrError, AgrResult};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A program with its ordered arguments and optional working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: PathBuf,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Arguments as (lossy) UTF-8 strings
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    fn to_process(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Runs external commands to completion
pub trait CommandRunner {
    /// Execute `command`, returning its standard output.
    ///
    /// A non-zero exit is an [`AgrError::CommandExecution`] carrying the
    /// captured standard error.
    fn run(&self, command: &ExternalCommand) -> AgrResult<String>;
}

/// Runs commands as child processes, tracing inside the span it was given
pub struct SystemRunner {
    span: tracing::Span,
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemRunner {
    /// Runner that logs into the caller's current span
    pub fn new() -> Self {
        Self {
            span: tracing::Span::current(),
        }
    }

    /// Runner scoped to a specific invocation span
    pub fn with_span(span: tracing::Span) -> Self {
        Self { span }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ExternalCommand) -> AgrResult<String> {
        let _entered = self.span.enter();
        tracing::debug!("Running command: {}", command);

        let output = command.to_process().output().map_err(|e| {
            AgrError::Io(io::Error::new(
                e.kind(),
                format!("failed to start `{}`: {}", command, e),
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::error!("Command failed: {}", command);
            tracing::error!("Stderr: {}", stderr.trim_end());
            return Err(AgrError::CommandExecution {
                command: command.to_string(),
                exit_code: output.status.code(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
