//! Error types for ampere-core

use thiserror::Error;

/// Result type alias using ampere-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Ampere
#[derive(Error, Debug)]
pub enum Error {
    /// Required tool missing from PATH
    #[error("Tool not found on PATH: {tool}")]
    ToolNotFound { tool: String },

    /// External command exited unsuccessfully
    #[error("Command failed: {command}: {reason}")]
    CommandFailed { command: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a tool not found error
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            reason: reason.into(),
        }
    }
}
