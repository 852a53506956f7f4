//! Workflow progress observation
//!
//! The scaffolding workflow reports progress through the [`StageObserver`]
//! trait so the library itself never writes to the terminal. The CLI installs
//! a spinner-backed observer; [`NoOpObserver`] suits tests and log-only runs.

use crate::workflow::StageOutcome;

/// The sequential stages of a create run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Resolve and create the project root directory
    Layout,
    /// Provision the Electron/Vite frontend
    Frontend,
    /// Copy the Python backend template
    Backend,
    /// Write the root manifest and README
    Manifest,
    /// Initialize a git repository
    VersionControl,
    /// Install JavaScript and Python dependencies
    Install,
}

impl Stage {
    /// Progress message shown while the stage runs
    pub fn describe(&self) -> &'static str {
        match self {
            Stage::Layout => "Creating project directory...",
            Stage::Frontend => "Provisioning frontend...",
            Stage::Backend => "Copying backend template...",
            Stage::Manifest => "Writing project manifests...",
            Stage::VersionControl => "Initializing git repository...",
            Stage::Install => "Installing dependencies...",
        }
    }
}

/// Observer trait for create workflow events
///
/// Implement this trait to surface progress to the user. Callbacks fire on
/// the workflow's task; implementations should return quickly.
pub trait StageObserver: Send + Sync {
    /// Called when a stage is about to start
    fn stage_started(&self, stage: Stage);

    /// Called when a stage finishes, with its outcome
    fn stage_finished(&self, stage: Stage, outcome: &StageOutcome);

    /// Called just before an interactive child process takes over the
    /// terminal, so any progress display can get out of its way
    fn terminal_handoff(&self) {}

    /// Called once an interactive child process has released the terminal
    fn terminal_resumed(&self) {}
}

/// Observer that ignores all events
pub struct NoOpObserver;

impl StageObserver for NoOpObserver {
    fn stage_started(&self, _stage: Stage) {}
    fn stage_finished(&self, _stage: Stage, _outcome: &StageOutcome) {}
}
