//! Spinner-backed progress reporting for the scaffold workflow

use std::sync::Mutex;

use indicatif::ProgressBar;

use ampere_scaffold::{Stage, StageObserver, StageOutcome};

use crate::output;

struct SpinnerState {
    bar: Option<ProgressBar>,
    message: &'static str,
}

/// Drives the terminal spinner from workflow stage notifications.
///
/// The generator stage hands the terminal over to an interactive child
/// process; the spinner is cleared for the handoff and recreated with the
/// current stage message once the child exits.
pub struct SpinnerObserver {
    state: Mutex<SpinnerState>,
}

impl SpinnerObserver {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SpinnerState {
                bar: None,
                message: "",
            }),
        }
    }

    /// Clear the spinner once the workflow is done
    pub fn finish(&self) {
        if let Ok(mut state) = self.state.lock() {
            if let Some(bar) = state.bar.take() {
                bar.finish_and_clear();
            }
        }
    }
}

impl StageObserver for SpinnerObserver {
    fn stage_started(&self, stage: Stage) {
        if let Ok(mut state) = self.state.lock() {
            state.message = stage.describe();
            if let Some(bar) = &state.bar {
                bar.set_message(state.message);
            } else {
                state.bar = Some(output::spinner(state.message));
            }
        }
    }

    fn stage_finished(&self, _stage: Stage, _outcome: &StageOutcome) {}

    fn terminal_handoff(&self) {
        if let Ok(mut state) = self.state.lock() {
            if let Some(bar) = state.bar.take() {
                bar.finish_and_clear();
            }
        }
        output::info("Handing the terminal to the frontend generator...");
    }

    fn terminal_resumed(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.bar = Some(output::spinner(state.message));
        }
    }
}
