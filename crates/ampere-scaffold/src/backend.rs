//! Backend provisioning stage

use crate::error::Result;
use crate::layout::{ProjectLayout, BACKEND_DIR};
use crate::templates::TemplateStore;
use tracing::info;

/// Copy the backend template into the project
///
/// Files are copied verbatim; the backend template is not parameterized.
/// There is no fallback here: a missing backend template aborts the run.
pub(crate) fn provision(templates: &TemplateStore, layout: &ProjectLayout) -> Result<usize> {
    let copied = templates.copy_tree(BACKEND_DIR, &layout.backend_dir)?;
    info!("Backend template copied ({} files)", copied);
    Ok(copied)
}
