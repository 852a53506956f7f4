//! Dependency installation stage
//!
//! Runs after the project tree is complete: JavaScript dependencies for the
//! root and frontend, then a Python environment for the backend. Every step
//! is best-effort. Failures are collected as messages for the final report
//! and never abort the run.

use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::manifest;
use crate::templates;
use crate::workflow::ScaffoldOptions;
use ampere_core::{is_tool_available, ExternalCommand};
use camino::Utf8Path;
use tracing::{debug, info, warn};

/// Default backend dependency manifest, written when the template has none
const DEFAULT_PYPROJECT: &str = include_str!("../templates/default-pyproject.toml");

/// Default backend requirements, written when the template has none
const DEFAULT_REQUIREMENTS: &str = include_str!("../templates/default-requirements.txt");

/// Manual backend setup steps appended to the README when the environment
/// tool is not installed
const MANUAL_SETUP_INSTRUCTIONS: &str = r#"
## Python Environment Setup

This project uses Python for the backend. You need to set up the Python environment:

1. Install [uv](https://github.com/astral-sh/uv) for Python environment management
2. Set up the environment:

```bash
cd backend
uv venv  # Create virtual environment
uv pip install -r requirements.txt  # Install requirements
uv sync  # Sync dependencies
```
"#;

/// Install dependencies for every part of the project that exists
///
/// Steps run in order: root packages, frontend packages, backend
/// environment. Each step's failure is recorded and the next step still
/// runs. Returns the accumulated failure messages; empty means everything
/// succeeded.
pub(crate) async fn run(
    layout: &ProjectLayout,
    project_name: &str,
    options: &ScaffoldOptions,
) -> Vec<String> {
    let mut failures = Vec::new();

    if !is_tool_available(&options.package_manager) {
        warn!(
            "{} not found on PATH; skipping JavaScript dependency installation",
            options.package_manager
        );
        failures.push(format!(
            "{} not found on PATH; JavaScript dependencies were not installed",
            options.package_manager
        ));
    } else {
        install_packages(&layout.root, "root", options, &mut failures).await;
        if layout.frontend_dir.is_dir() {
            install_packages(&layout.frontend_dir, "frontend", options, &mut failures).await;
        } else {
            debug!("Frontend directory absent; skipping frontend dependencies");
        }
    }

    if layout.backend_dir.is_dir() {
        if let Err(e) = prepare_backend(layout, project_name, options).await {
            warn!("Backend environment setup failed: {}", e);
            failures.push(format!("Backend environment setup failed: {e}"));
        }
    } else {
        debug!("Backend directory absent; skipping Python environment setup");
    }

    failures
}

async fn install_packages(
    dir: &Utf8Path,
    label: &str,
    options: &ScaffoldOptions,
    failures: &mut Vec<String>,
) {
    debug!("Installing {} dependencies in {}", label, dir);
    let result = ExternalCommand::new(&options.package_manager)
        .arg("install")
        .current_dir(dir)
        .checked()
        .await;
    match result {
        Ok(_) => info!("Installed {} dependencies", label),
        Err(e) => {
            warn!("Failed to install {} dependencies: {}", label, e);
            failures.push(format!("Failed to install {label} dependencies: {e}"));
        }
    }
}

/// Set up the backend Python environment
///
/// With the environment tool on PATH: create a virtual environment, write
/// default dependency manifests if the template shipped none, install the
/// requirements and sync. Without the tool, append manual setup steps to
/// the README; that path is deliberately not a failure.
async fn prepare_backend(
    layout: &ProjectLayout,
    project_name: &str,
    options: &ScaffoldOptions,
) -> Result<()> {
    let tool = &options.environment_tool;
    if !is_tool_available(tool) {
        info!(
            "{} not found; adding manual setup instructions to the README",
            tool
        );
        manifest::append_readme_section(&layout.root, MANUAL_SETUP_INSTRUCTIONS)?;
        return Ok(());
    }

    let backend = &layout.backend_dir;
    ExternalCommand::new(tool)
        .arg("venv")
        .current_dir(backend)
        .checked()
        .await?;
    debug!("Created Python virtual environment");

    let pyproject = backend.join("pyproject.toml");
    if !pyproject.exists() {
        std::fs::write(&pyproject, templates::render(DEFAULT_PYPROJECT, project_name))?;
        debug!("Wrote default pyproject.toml");
    }

    let requirements = backend.join("requirements.txt");
    if !requirements.exists() {
        std::fs::write(&requirements, DEFAULT_REQUIREMENTS)?;
        debug!("Wrote default requirements.txt");
    }

    ExternalCommand::new(tool)
        .args(["pip", "install", "-r", "requirements.txt"])
        .current_dir(backend)
        .checked()
        .await?;
    ExternalCommand::new(tool)
        .arg("sync")
        .current_dir(backend)
        .checked()
        .await?;
    info!("Python backend environment ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn utf8_path(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    fn layout_with_tree(parent: &Utf8Path, frontend: bool) -> ProjectLayout {
        let layout = ProjectLayout::resolve("demo", parent).unwrap();
        layout.create_root().unwrap();
        if frontend {
            std::fs::create_dir_all(&layout.frontend_dir).unwrap();
        }
        std::fs::create_dir_all(&layout.backend_dir).unwrap();
        layout
    }

    fn options_with_tools(package_manager: &str, environment_tool: &str) -> ScaffoldOptions {
        ScaffoldOptions {
            package_manager: package_manager.to_string(),
            environment_tool: environment_tool.to_string(),
            ..ScaffoldOptions::default()
        }
    }

    #[test]
    fn default_pyproject_parameterizes_project_name() {
        let rendered = templates::render(DEFAULT_PYPROJECT, "demo");
        assert!(rendered.contains(r#"name = "demo-backend""#));
        assert!(!rendered.contains("{project_name}"));
    }

    #[tokio::test]
    async fn missing_tools_record_failure_and_readme_instructions() {
        let dir = TempDir::new().unwrap();
        let parent = utf8_path(&dir);
        let layout = layout_with_tree(&parent, true);
        let options = options_with_tools(
            "ampere-test-missing-pm",
            "ampere-test-missing-env",
        );

        let failures = run(&layout, "demo", &options).await;

        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("not found on PATH"));

        let readme = std::fs::read_to_string(layout.root.join("README.md")).unwrap();
        assert!(readme.contains("## Python Environment Setup"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn succeeding_tools_write_backend_manifests() {
        let dir = TempDir::new().unwrap();
        let parent = utf8_path(&dir);
        let layout = layout_with_tree(&parent, true);
        // `true` exits zero for any arguments, standing in for npm and uv
        let options = options_with_tools("true", "true");

        let failures = run(&layout, "demo", &options).await;

        assert!(failures.is_empty(), "unexpected failures: {failures:?}");
        let pyproject =
            std::fs::read_to_string(layout.backend_dir.join("pyproject.toml")).unwrap();
        assert!(pyproject.contains(r#"name = "demo-backend""#));
        assert!(layout.backend_dir.join("requirements.txt").is_file());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn each_step_fails_independently() {
        let dir = TempDir::new().unwrap();
        let parent = utf8_path(&dir);
        let layout = layout_with_tree(&parent, true);
        // `false` exists on PATH but always exits non-zero
        let options = options_with_tools("false", "false");

        let failures = run(&layout, "demo", &options).await;

        assert_eq!(failures.len(), 3, "failures: {failures:?}");
        assert!(failures[0].contains("root"));
        assert!(failures[1].contains("frontend"));
        assert!(failures[2].contains("Backend environment"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn absent_frontend_is_skipped_without_failure() {
        let dir = TempDir::new().unwrap();
        let parent = utf8_path(&dir);
        let layout = layout_with_tree(&parent, false);
        let options = options_with_tools("true", "true");

        let failures = run(&layout, "demo", &options).await;
        assert!(failures.is_empty());
    }
}
