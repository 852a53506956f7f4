//! Project template storage
//!
//! Template files come from one of two places: a tree embedded into the
//! binary at build time, or an on-disk directory supplied at runtime (for
//! testing, or for users who maintain their own templates). Both expose the
//! same layout: top-level manifests plus `frontend/` and `backend/` subtrees.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use tracing::debug;
use walkdir::WalkDir;

/// Project template files compiled into the binary
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates/project"]
struct BundledTemplates;

/// Source of template files for scaffolding
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    /// On-disk override; `None` means the embedded templates
    root: Option<Utf8PathBuf>,
}

impl TemplateStore {
    /// Store backed by the templates embedded in the binary
    pub fn bundled() -> Self {
        Self { root: None }
    }

    /// Store backed by an on-disk directory with the same layout as the
    /// bundled templates
    pub fn from_dir(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Whether a file or subtree exists at `path`
    pub fn contains(&self, path: &str) -> bool {
        match &self.root {
            None => {
                let subtree = format!("{path}/");
                BundledTemplates::iter().any(|p| p == path || p.starts_with(&subtree))
            }
            Some(root) => root.join(path).exists(),
        }
    }

    /// Read a single template file, `None` when absent
    pub fn read(&self, path: &str) -> Option<Vec<u8>> {
        match &self.root {
            None => BundledTemplates::get(path).map(|f| f.data.into_owned()),
            Some(root) => std::fs::read(root.join(path)).ok(),
        }
    }

    /// Copy the subtree under `prefix` into `dest`, creating directories as
    /// needed. Returns the number of files copied.
    ///
    /// Files are copied verbatim; placeholder rendering is the caller's
    /// concern. An absent or empty subtree is an error, since scaffolding
    /// from it would silently produce a hollow project.
    pub fn copy_tree(&self, prefix: &str, dest: &Utf8Path) -> Result<usize> {
        let copied = match &self.root {
            None => self.copy_embedded_tree(prefix, dest)?,
            Some(root) => copy_dir_tree(&root.join(prefix), dest)?,
        };
        if copied == 0 {
            return Err(Error::template_missing(prefix));
        }
        debug!("Copied {} template files from {} to {}", copied, prefix, dest);
        Ok(copied)
    }

    fn copy_embedded_tree(&self, prefix: &str, dest: &Utf8Path) -> Result<usize> {
        let subtree = format!("{prefix}/");
        let mut copied = 0;
        for rel in BundledTemplates::iter() {
            let Some(tail) = rel.strip_prefix(&subtree) else {
                continue;
            };
            let Some(file) = BundledTemplates::get(&rel) else {
                continue;
            };
            let target = dest.join(tail);
            if let Some(dir) = target.parent() {
                std::fs::create_dir_all(dir)?;
            }
            std::fs::write(&target, file.data.as_ref())?;
            copied += 1;
        }
        Ok(copied)
    }
}

fn copy_dir_tree(source: &Utf8Path, dest: &Utf8Path) -> Result<usize> {
    if !source.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(source.as_std_path())
            .map_err(|_| Error::invalid_path(entry.path().display().to_string()))?;
        let rel = Utf8Path::from_path(rel)
            .ok_or_else(|| Error::invalid_path(rel.display().to_string()))?;
        let target = dest.join(rel);
        if let Some(dir) = target.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::copy(entry.path(), &target)?;
        copied += 1;
    }
    Ok(copied)
}

/// Render `{project_name}` placeholders in template text
///
/// Simple string replacement, no template engine. The bundled templates only
/// parameterize over the project name.
pub fn render(template: &str, project_name: &str) -> String {
    template.replace("{project_name}", project_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_path(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn bundled_store_exposes_expected_layout() {
        let store = TemplateStore::bundled();
        assert!(store.contains("package.json"));
        assert!(store.contains("README.md"));
        assert!(store.contains("frontend"));
        assert!(store.contains("backend"));
        assert!(!store.contains("does-not-exist"));
    }

    #[test]
    fn bundled_read_returns_file_contents() {
        let store = TemplateStore::bundled();
        let manifest = store.read("package.json").unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&manifest).unwrap();
        assert!(parsed.get("scripts").is_some());
    }

    #[test]
    fn copy_tree_from_bundled_backend() {
        let dir = TempDir::new().unwrap();
        let dest = utf8_path(&dir).join("backend");

        let store = TemplateStore::bundled();
        let copied = store.copy_tree("backend", &dest).unwrap();
        assert!(copied > 0);
        assert!(dest.join("main.py").is_file());
        assert!(dest.join("requirements.txt").is_file());
    }

    #[test]
    fn copy_tree_missing_prefix_is_an_error() {
        let dir = TempDir::new().unwrap();
        let dest = utf8_path(&dir).join("out");

        let store = TemplateStore::bundled();
        let err = store.copy_tree("does-not-exist", &dest).unwrap_err();
        assert!(matches!(err, Error::TemplateMissing { .. }));
    }

    #[test]
    fn dir_store_reads_and_copies() {
        let dir = TempDir::new().unwrap();
        let root = utf8_path(&dir);
        std::fs::create_dir_all(root.join("templates/backend/api")).unwrap();
        std::fs::write(root.join("templates/package.json"), "{}").unwrap();
        std::fs::write(root.join("templates/backend/main.py"), "print('hi')").unwrap();
        std::fs::write(root.join("templates/backend/api/routes.py"), "# routes").unwrap();

        let store = TemplateStore::from_dir(root.join("templates"));
        assert!(store.contains("package.json"));
        assert!(store.contains("backend"));
        assert_eq!(store.read("package.json").unwrap(), b"{}");

        let dest = root.join("out");
        let copied = store.copy_tree("backend", &dest).unwrap();
        assert_eq!(copied, 2);
        assert!(dest.join("main.py").is_file());
        assert!(dest.join("api/routes.py").is_file());
    }

    #[test]
    fn dir_store_missing_subtree_is_an_error() {
        let dir = TempDir::new().unwrap();
        let root = utf8_path(&dir);
        std::fs::create_dir_all(root.join("templates")).unwrap();

        let store = TemplateStore::from_dir(root.join("templates"));
        let err = store.copy_tree("frontend", &root.join("out")).unwrap_err();
        assert!(matches!(err, Error::TemplateMissing { .. }));
    }

    #[test]
    fn render_substitutes_project_name() {
        let rendered = render("# {project_name}\n\n{project_name}-backend", "demo");
        assert_eq!(rendered, "# demo\n\ndemo-backend");
    }
}
