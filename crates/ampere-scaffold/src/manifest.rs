//! Package manifest and README generation
//!
//! Manifests are treated as plain JSON documents: the `name` field is
//! rewritten and every other field passes through untouched. No schema
//! validation happens here.

use crate::error::{Error, Result};
use crate::layout::ProjectLayout;
use crate::templates::{self, TemplateStore};
use camino::Utf8Path;
use serde_json::Value;
use tracing::{debug, info};

/// Package manifest file name
pub(crate) const PACKAGE_MANIFEST: &str = "package.json";

const README: &str = "README.md";

/// Write the root package manifest and README for a new project
///
/// The manifest template's `name` field is replaced with the project name.
/// A missing manifest template is fatal; a missing README template is
/// replaced with a minimal synthesized one.
pub(crate) fn write_root(
    templates: &TemplateStore,
    layout: &ProjectLayout,
    project_name: &str,
) -> Result<()> {
    let raw = templates
        .read(PACKAGE_MANIFEST)
        .ok_or_else(|| Error::template_missing(PACKAGE_MANIFEST))?;
    let target = layout.root.join(PACKAGE_MANIFEST);

    let mut doc: Value = serde_json::from_slice(&raw)?;
    set_package_name(&mut doc, &target, project_name)?;
    write_manifest(&target, &doc)?;
    debug!("Wrote root manifest: {}", target);

    write_readme(templates, layout, project_name)?;
    info!("Project manifests written");
    Ok(())
}

/// Rewrite the `name` field of an existing package manifest in place
pub(crate) fn rename_package(path: &Utf8Path, name: &str) -> Result<()> {
    let raw = std::fs::read(path)?;
    let mut doc: Value = serde_json::from_slice(&raw)?;
    set_package_name(&mut doc, path, name)?;
    write_manifest(path, &doc)?;
    debug!("Set package name at {} to {}", path, name);
    Ok(())
}

/// Append a section to the project README, creating the file if needed
pub(crate) fn append_readme_section(root: &Utf8Path, section: &str) -> Result<()> {
    let path = root.join(README);
    let mut content = match std::fs::read_to_string(&path) {
        Ok(existing) => existing,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(section);
    std::fs::write(&path, content)?;
    debug!("Appended README section at {}", path);
    Ok(())
}

fn set_package_name(doc: &mut Value, path: &Utf8Path, name: &str) -> Result<()> {
    let Some(obj) = doc.as_object_mut() else {
        return Err(Error::manifest_invalid(path.as_str()));
    };
    obj.insert("name".to_string(), Value::String(name.to_string()));
    Ok(())
}

fn write_manifest(path: &Utf8Path, doc: &Value) -> Result<()> {
    let mut rendered = serde_json::to_string_pretty(doc)?;
    rendered.push('\n');
    std::fs::write(path, rendered)?;
    Ok(())
}

fn write_readme(
    templates: &TemplateStore,
    layout: &ProjectLayout,
    project_name: &str,
) -> Result<()> {
    let target = layout.root.join(README);
    let content = match templates.read(README) {
        Some(raw) => templates::render(&String::from_utf8_lossy(&raw), project_name),
        None => format!("# {project_name}\n\nCreated with the Ampere CLI.\n"),
    };
    std::fs::write(&target, content)?;
    debug!("Wrote README: {}", target);
    Ok(())
}
