//! Version control initialization

use crate::error::{Error, Result};
use ampere_core::ExternalCommand;
use camino::Utf8Path;
use tracing::{debug, info};

/// Contents written to the ignore file when the project has none
const DEFAULT_GITIGNORE: &str = include_str!("../templates/default.gitignore");

/// Initialize a repository in the project root and write a default ignore
/// file if none exists
///
/// Runs `<tool> init` with captured output. A missing binary surfaces as
/// [`Error::ExternalToolFailed`]; the workflow treats every error from this
/// stage as non-fatal.
pub(crate) async fn init_repository(root: &Utf8Path, tool: &str) -> Result<()> {
    let command = ExternalCommand::new(tool).arg("init").current_dir(root);
    let output = command.captured().await.map_err(|e| match e {
        ampere_core::Error::ToolNotFound { tool } => {
            Error::external_tool_failed(tool, "not found on PATH")
        }
        other => Error::from(other),
    })?;

    if !output.success() {
        return Err(Error::external_tool_failed(
            command.display(),
            output.failure_reason(),
        ));
    }
    info!("Initialized repository at: {}", root);

    write_default_ignore_file(root)?;
    Ok(())
}

/// Write the default ignore file unless one is already present
///
/// Returns whether a file was written.
pub(crate) fn write_default_ignore_file(root: &Utf8Path) -> Result<bool> {
    let path = root.join(".gitignore");
    if path.exists() {
        debug!("Ignore file already present: {}", path);
        return Ok(false);
    }
    std::fs::write(&path, DEFAULT_GITIGNORE)?;
    debug!("Wrote default ignore file: {}", path);
    Ok(true)
}
