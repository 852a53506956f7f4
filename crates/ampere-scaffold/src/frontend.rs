//! Frontend provisioning stage
//!
//! Primary path: run the interactive electron-vite generator in the project
//! root, with the terminal handed over so the user can answer its prompts,
//! then verify it actually produced a manifest. Fallback path: remove any
//! partial generator output, copy the bundled frontend template, and rewrite
//! the copied manifest's name to `<project>-frontend`.
//!
//! Nothing here is fatal. The workflow records a failed outcome as a warning
//! and finishes the project shell without a frontend.

use crate::error::{Error, Result};
use crate::layout::{ProjectLayout, FRONTEND_DIR};
use crate::manifest;
use crate::observer::StageObserver;
use crate::templates::TemplateStore;
use crate::workflow::{FrontendStrategy, GeneratorCommand, ScaffoldOptions, StageOutcome};
use ampere_core::{is_tool_available, ExternalCommand};
use tracing::{debug, info, warn};

/// Provision the frontend subtree
///
/// Always returns an outcome; failure details travel in
/// [`StageOutcome::Failed`] rather than an error.
pub(crate) async fn provision(
    templates: &TemplateStore,
    layout: &ProjectLayout,
    project_name: &str,
    options: &ScaffoldOptions,
    observer: &dyn StageObserver,
) -> StageOutcome {
    match options.frontend_strategy {
        FrontendStrategy::Template => match copy_template(templates, layout, project_name) {
            Ok(()) => StageOutcome::Succeeded,
            Err(e) => {
                warn!("Frontend template copy failed: {}", e);
                StageOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        },
        FrontendStrategy::Generator => {
            match run_generator(&options.generator, layout, observer).await {
                Ok(()) => StageOutcome::Succeeded,
                Err(primary) => {
                    warn!("Frontend generator failed: {}", primary);
                    if !templates.contains(FRONTEND_DIR) {
                        return StageOutcome::Failed {
                            reason: format!("{primary} (no bundled frontend template to fall back on)"),
                        };
                    }
                    info!("Falling back to the bundled frontend template");
                    match copy_template(templates, layout, project_name) {
                        Ok(()) => StageOutcome::SucceededWithFallback,
                        Err(fallback) => {
                            warn!("Frontend fallback failed: {}", fallback);
                            StageOutcome::Failed {
                                reason: format!("generator: {primary}; fallback: {fallback}"),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Run the interactive generator and verify its output
///
/// The generator runs with the project root as working directory and is
/// expected to populate the frontend subdirectory. Exit status zero without
/// a manifest on disk counts as a failure.
async fn run_generator(
    generator: &GeneratorCommand,
    layout: &ProjectLayout,
    observer: &dyn StageObserver,
) -> Result<()> {
    if !is_tool_available(&generator.program) {
        return Err(Error::interactive_tool_unavailable(&generator.program));
    }

    let command = ExternalCommand::new(&generator.program)
        .args(generator.args.iter().cloned())
        .current_dir(&layout.root);
    info!("Running frontend generator: {}", command.display());

    observer.terminal_handoff();
    let status = command.interactive().await;
    observer.terminal_resumed();

    let status = status.map_err(|e| match e {
        ampere_core::Error::ToolNotFound { tool } => Error::interactive_tool_unavailable(tool),
        other => Error::from(other),
    })?;

    if !status.success() {
        return Err(Error::external_tool_failed(
            command.display(),
            status.to_string(),
        ));
    }

    let manifest_path = layout.frontend_dir.join(manifest::PACKAGE_MANIFEST);
    if !manifest_path.is_file() {
        return Err(Error::verification_failed(manifest_path.as_str()));
    }
    debug!("Generator output verified: {}", manifest_path);
    Ok(())
}

/// Copy the bundled frontend template and name its manifest after the project
///
/// Any partial output from an earlier generator attempt is removed first so
/// the copied tree is the only thing left behind.
fn copy_template(
    templates: &TemplateStore,
    layout: &ProjectLayout,
    project_name: &str,
) -> Result<()> {
    if layout.frontend_dir.exists() {
        debug!("Removing partial frontend output: {}", layout.frontend_dir);
        std::fs::remove_dir_all(&layout.frontend_dir)?;
    }

    let copied = templates.copy_tree(FRONTEND_DIR, &layout.frontend_dir)?;
    manifest::rename_package(
        &layout.frontend_dir.join(manifest::PACKAGE_MANIFEST),
        &format!("{project_name}-frontend"),
    )?;
    info!("Frontend template copied ({} files)", copied);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpObserver;
    use camino::{Utf8Path, Utf8PathBuf};
    use serde_json::Value;
    use tempfile::TempDir;

    fn utf8_path(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    fn layout_in(parent: &Utf8Path, name: &str) -> ProjectLayout {
        let layout = ProjectLayout::resolve(name, parent).unwrap();
        layout.create_root().unwrap();
        layout
    }

    fn template_options(strategy: FrontendStrategy) -> ScaffoldOptions {
        ScaffoldOptions {
            frontend_strategy: strategy,
            ..ScaffoldOptions::default()
        }
    }

    fn frontend_manifest_name(layout: &ProjectLayout) -> String {
        let raw =
            std::fs::read_to_string(layout.frontend_dir.join("package.json")).unwrap();
        let doc: Value = serde_json::from_str(&raw).unwrap();
        doc["name"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn template_strategy_copies_and_renames() {
        let dir = TempDir::new().unwrap();
        let parent = utf8_path(&dir);
        let layout = layout_in(&parent, "demo");

        let store = TemplateStore::bundled();
        let options = template_options(FrontendStrategy::Template);
        let outcome = provision(&store, &layout, "demo", &options, &NoOpObserver).await;

        assert_eq!(outcome, StageOutcome::Succeeded);
        assert_eq!(frontend_manifest_name(&layout), "demo-frontend");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failed_generator_falls_back_and_removes_partial_output() {
        let dir = TempDir::new().unwrap();
        let parent = utf8_path(&dir);
        let layout = layout_in(&parent, "demo");

        // Stub generator that leaves partial output behind and exits non-zero
        let mut options = template_options(FrontendStrategy::Generator);
        options.generator = GeneratorCommand::new(
            "sh",
            ["-c", "mkdir -p frontend && echo partial > frontend/partial.txt && exit 1"],
        );

        let store = TemplateStore::bundled();
        let outcome = provision(&store, &layout, "demo", &options, &NoOpObserver).await;

        assert_eq!(outcome, StageOutcome::SucceededWithFallback);
        assert!(!layout.frontend_dir.join("partial.txt").exists());
        assert_eq!(frontend_manifest_name(&layout), "demo-frontend");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn generator_success_without_manifest_triggers_fallback() {
        let dir = TempDir::new().unwrap();
        let parent = utf8_path(&dir);
        let layout = layout_in(&parent, "demo");

        // Exits zero but produces nothing: verification must fail
        let mut options = template_options(FrontendStrategy::Generator);
        options.generator = GeneratorCommand::new("sh", ["-c", "true"]);

        let store = TemplateStore::bundled();
        let outcome = provision(&store, &layout, "demo", &options, &NoOpObserver).await;

        assert_eq!(outcome, StageOutcome::SucceededWithFallback);
        assert!(layout.frontend_dir.join("package.json").is_file());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn generator_output_passing_verification_is_left_alone() {
        let dir = TempDir::new().unwrap();
        let parent = utf8_path(&dir);
        let layout = layout_in(&parent, "demo");

        let mut options = template_options(FrontendStrategy::Generator);
        options.generator = GeneratorCommand::new(
            "sh",
            [
                "-c",
                r#"mkdir -p frontend && printf '{"name": "generated-app"}' > frontend/package.json"#,
            ],
        );

        let store = TemplateStore::bundled();
        let outcome = provision(&store, &layout, "demo", &options, &NoOpObserver).await;

        assert_eq!(outcome, StageOutcome::Succeeded);
        assert_eq!(frontend_manifest_name(&layout), "generated-app");
    }

    #[tokio::test]
    async fn missing_generator_falls_back_directly() {
        let dir = TempDir::new().unwrap();
        let parent = utf8_path(&dir);
        let layout = layout_in(&parent, "demo");

        let mut options = template_options(FrontendStrategy::Generator);
        options.generator =
            GeneratorCommand::new("ampere-test-tool-that-does-not-exist", ["frontend"]);

        let store = TemplateStore::bundled();
        let outcome = provision(&store, &layout, "demo", &options, &NoOpObserver).await;

        assert_eq!(outcome, StageOutcome::SucceededWithFallback);
        assert_eq!(frontend_manifest_name(&layout), "demo-frontend");
    }

    #[tokio::test]
    async fn generator_failure_without_fallback_template_fails() {
        let dir = TempDir::new().unwrap();
        let parent = utf8_path(&dir);
        let layout = layout_in(&parent, "demo");

        // Template store with no frontend subtree
        let empty = parent.join("empty-templates");
        std::fs::create_dir_all(&empty).unwrap();
        let store = TemplateStore::from_dir(empty);

        let mut options = template_options(FrontendStrategy::Generator);
        options.generator =
            GeneratorCommand::new("ampere-test-tool-that-does-not-exist", ["frontend"]);

        let outcome = provision(&store, &layout, "demo", &options, &NoOpObserver).await;

        match outcome {
            StageOutcome::Failed { reason } => {
                assert!(reason.contains("not found on PATH") || reason.contains("Interactive"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(!layout.frontend_dir.exists());
    }
}
