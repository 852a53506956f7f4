//! Error types for ampere-scaffold

use thiserror::Error;

/// Result type alias using ampere-scaffold's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Target directory already exists
    #[error("Target directory already exists: {path}")]
    AlreadyExists { path: String },

    /// Invalid project name
    #[error("Invalid project name: {name}. Must be non-empty and contain no path separators")]
    InvalidProjectName { name: String },

    /// Bundled or user-supplied template is missing
    #[error("Template not found: {template}")]
    TemplateMissing { template: String },

    /// External tool invocation failed
    #[error("{tool} failed: {reason}")]
    ExternalToolFailed { tool: String, reason: String },

    /// Generator claimed success but expected output is absent
    #[error("Generator reported success but did not create: {path}")]
    VerificationFailed { path: String },

    /// Interactive generator missing from PATH
    #[error("Interactive tool not found on PATH: {tool}")]
    InteractiveToolUnavailable { tool: String },

    /// Manifest parsed but its top level is not an object
    #[error("Manifest is not a JSON object: {path}")]
    ManifestInvalid { path: String },

    /// Invalid path
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error("Core error: {0}")]
    Core(#[from] ampere_core::Error),
}

impl Error {
    /// Create an already exists error
    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>) -> Self {
        Self::InvalidProjectName { name: name.into() }
    }

    /// Create a template missing error
    pub fn template_missing(template: impl Into<String>) -> Self {
        Self::TemplateMissing {
            template: template.into(),
        }
    }

    /// Create an external tool failed error
    pub fn external_tool_failed(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ExternalToolFailed {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Create a verification failed error
    pub fn verification_failed(path: impl Into<String>) -> Self {
        Self::VerificationFailed { path: path.into() }
    }

    /// Create an interactive tool unavailable error
    pub fn interactive_tool_unavailable(tool: impl Into<String>) -> Self {
        Self::InteractiveToolUnavailable { tool: tool.into() }
    }

    /// Create a manifest invalid error
    pub fn manifest_invalid(path: impl Into<String>) -> Self {
        Self::ManifestInvalid { path: path.into() }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }
}
