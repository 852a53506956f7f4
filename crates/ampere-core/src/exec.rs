//! External command execution
//!
//! Every subprocess the CLI launches goes through [`ExternalCommand`], which
//! wraps `tokio::process` with two execution modes:
//! - captured: stdout/stderr are recorded for logging and error reporting
//! - interactive: the child inherits the terminal so it can prompt the user

use crate::error::{Error, Result};
use camino::Utf8PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

/// Check if a command is available in PATH
pub fn is_tool_available(tool: &str) -> bool {
    which::which(tool).is_ok()
}

/// A single external command invocation
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
    cwd: Option<Utf8PathBuf>,
}

impl ExternalCommand {
    /// Create a command for the given program
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append a single argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory for the child process
    pub fn current_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// The command line as it would appear in a shell, for logging
    pub fn display(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(self.program.as_str());
        parts.extend(self.args.iter().map(String::as_str));
        parts.join(" ")
    }

    /// Run the command with stdout/stderr captured
    pub async fn captured(&self) -> Result<CapturedOutput> {
        debug!("Running: {}", self.display());
        let output = self
            .command()
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;
        Ok(CapturedOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Run the command captured, treating a non-zero exit as an error
    pub async fn checked(&self) -> Result<CapturedOutput> {
        let output = self.captured().await?;
        if !output.success() {
            return Err(Error::command_failed(
                self.display(),
                output.failure_reason(),
            ));
        }
        Ok(output)
    }

    /// Run the command with the terminal handed to the child
    ///
    /// The child inherits stdin/stdout/stderr, so interactive tools can show
    /// their own prompts and progress. Returns the exit status; callers decide
    /// whether a non-zero exit is fatal.
    pub async fn interactive(&self) -> Result<ExitStatus> {
        debug!("Running interactively: {}", self.display());
        let status = self
            .command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| self.spawn_error(e))?;
        Ok(status)
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn spawn_error(&self, err: std::io::Error) -> Error {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::tool_not_found(&self.program)
        } else {
            Error::Io(err)
        }
    }
}

/// Captured stdout/stderr from a finished command
#[derive(Debug)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    /// Whether the command exited with status zero
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Human-readable failure description: trimmed stderr, or the exit status
    /// when the command produced no diagnostics
    pub fn failure_reason(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.status.to_string()
        } else {
            stderr.to_string()
        }
    }
}
