//! Project directory layout resolution

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

/// Subdirectory holding the Electron/Vite frontend
pub const FRONTEND_DIR: &str = "frontend";

/// Subdirectory holding the Python/FastAPI backend
pub const BACKEND_DIR: &str = "backend";

/// Resolved on-disk locations for a new project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Project root directory
    pub root: Utf8PathBuf,
    /// Frontend subdirectory under the root
    pub frontend_dir: Utf8PathBuf,
    /// Backend subdirectory under the root
    pub backend_dir: Utf8PathBuf,
}

impl ProjectLayout {
    /// Resolve the layout for a project named `name` under `parent`
    ///
    /// Fails when the name is not usable as a directory name, or when the
    /// target path already exists. Existence of any kind blocks creation:
    /// a plain file or dangling symlink at the target is just as much a
    /// collision as a directory.
    pub fn resolve(name: &str, parent: &Utf8Path) -> Result<Self> {
        validate_name(name)?;

        let root = parent.join(name);
        if root.symlink_metadata().is_ok() {
            return Err(Error::already_exists(root));
        }

        debug!("Resolved project layout at: {}", root);
        Ok(Self {
            frontend_dir: root.join(FRONTEND_DIR),
            backend_dir: root.join(BACKEND_DIR),
            root,
        })
    }

    /// Create the project root directory
    ///
    /// Subdirectories are created later by the stages that populate them.
    pub fn create_root(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        debug!("Created project root: {}", self.root);
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(Error::invalid_project_name(name));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(Error::invalid_project_name(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_path(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn resolve_builds_expected_subdirectories() {
        let dir = TempDir::new().unwrap();
        let parent = utf8_path(&dir);

        let layout = ProjectLayout::resolve("demo", &parent).unwrap();
        assert_eq!(layout.root, parent.join("demo"));
        assert_eq!(layout.frontend_dir, parent.join("demo/frontend"));
        assert_eq!(layout.backend_dir, parent.join("demo/backend"));
    }

    #[test]
    fn resolve_rejects_existing_directory() {
        let dir = TempDir::new().unwrap();
        let parent = utf8_path(&dir);
        std::fs::create_dir(parent.join("demo")).unwrap();

        let err = ProjectLayout::resolve("demo", &parent).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { .. }));
    }

    #[test]
    fn resolve_rejects_existing_file_at_target() {
        let dir = TempDir::new().unwrap();
        let parent = utf8_path(&dir);
        std::fs::write(parent.join("demo"), "not a directory").unwrap();

        let err = ProjectLayout::resolve("demo", &parent).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { .. }));
    }

    #[test]
    fn resolve_rejects_unusable_names() {
        let dir = TempDir::new().unwrap();
        let parent = utf8_path(&dir);

        for name in ["", ".", "..", "a/b", "a\\b"] {
            let err = ProjectLayout::resolve(name, &parent).unwrap_err();
            assert!(
                matches!(err, Error::InvalidProjectName { .. }),
                "name {name:?} should be rejected"
            );
        }
    }

    #[test]
    fn create_root_creates_directory() {
        let dir = TempDir::new().unwrap();
        let parent = utf8_path(&dir);

        let layout = ProjectLayout::resolve("demo", &parent).unwrap();
        layout.create_root().unwrap();
        assert!(layout.root.is_dir());
        assert!(!layout.frontend_dir.exists());
    }
}
