//! Create workflow orchestration
//!
//! Drives the six stages of project creation strictly in sequence: layout,
//! frontend, backend, manifests, version control, dependency installation.
//! Stage policy is fixed: layout collisions and missing backend/manifest
//! templates abort the run; frontend, version control and install failures
//! degrade to warnings on the final report.

use crate::backend;
use crate::error::Result;
use crate::frontend;
use crate::git;
use crate::install;
use crate::layout::{ProjectLayout, FRONTEND_DIR};
use crate::manifest;
use crate::observer::{NoOpObserver, Stage, StageObserver};
use crate::templates::TemplateStore;
use camino::Utf8Path;
use tracing::{debug, info, warn};

/// A single project-creation request
#[derive(Debug, Clone)]
pub struct CreateRequest {
    /// Project name, used as directory name and package name
    pub name: String,
    /// Skip the dependency installation stage
    pub skip_deps: bool,
}

impl CreateRequest {
    /// Request with default flags
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skip_deps: false,
        }
    }
}

/// How the frontend subtree is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontendStrategy {
    /// Run the interactive generator, falling back to the bundled template
    #[default]
    Generator,
    /// Copy the bundled template without running the generator
    Template,
}

/// The interactive frontend generator invocation
#[derive(Debug, Clone)]
pub struct GeneratorCommand {
    /// Program to invoke
    pub program: String,
    /// Arguments passed to the program
    pub args: Vec<String>,
}

impl GeneratorCommand {
    /// Create a generator command
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for GeneratorCommand {
    /// `npm create electron-vite@latest frontend`, run in the project root
    fn default() -> Self {
        Self::new("npm", ["create", "electron-vite@latest", FRONTEND_DIR])
    }
}

/// Tunable collaborators for a create run
///
/// Defaults match the real toolchain (npm, git, uv). Tests substitute stub
/// binaries here instead of mocking the filesystem.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Frontend provisioning strategy
    pub frontend_strategy: FrontendStrategy,
    /// Interactive frontend generator invocation
    pub generator: GeneratorCommand,
    /// Version control binary
    pub version_control: String,
    /// JavaScript package manager binary
    pub package_manager: String,
    /// Python environment management binary
    pub environment_tool: String,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            frontend_strategy: FrontendStrategy::default(),
            generator: GeneratorCommand::default(),
            version_control: "git".to_string(),
            package_manager: "npm".to_string(),
            environment_tool: "uv".to_string(),
        }
    }
}

/// Result of one workflow stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// Stage completed on its primary path
    Succeeded,
    /// Stage completed via its fallback path
    SucceededWithFallback,
    /// Stage failed; the workflow continued without its output
    Failed { reason: String },
    /// Stage was not attempted
    Skipped,
}

impl StageOutcome {
    /// Whether the stage produced its output
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded | Self::SucceededWithFallback)
    }
}

/// What a finished create run produced
#[derive(Debug)]
pub struct ScaffoldReport {
    /// Resolved project locations
    pub layout: ProjectLayout,
    /// Frontend provisioning outcome
    pub frontend: StageOutcome,
    /// Version control outcome
    pub version_control: StageOutcome,
    /// Dependency installation outcome
    pub install: StageOutcome,
    /// Warnings accumulated from non-fatal stage failures
    pub warnings: Vec<String>,
}

impl ScaffoldReport {
    /// Whether the project ended up with a frontend subtree
    pub fn has_frontend(&self) -> bool {
        self.frontend.is_success()
    }

    /// Whether every dependency installation step succeeded
    pub fn dependencies_installed(&self) -> bool {
        self.install == StageOutcome::Succeeded
    }
}

/// Orchestrates one create run over a template store
pub struct Scaffolder<'a> {
    templates: &'a TemplateStore,
    options: ScaffoldOptions,
    observer: &'a dyn StageObserver,
}

impl<'a> Scaffolder<'a> {
    /// Create a scaffolder with the given options
    pub fn new(templates: &'a TemplateStore, options: ScaffoldOptions) -> Self {
        Self {
            templates,
            options,
            observer: &NoOpObserver,
        }
    }

    /// Attach a progress observer
    pub fn with_observer(mut self, observer: &'a dyn StageObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Run the full workflow, creating the project under `parent`
    ///
    /// An `Err` means the run aborted: target collision, invalid name, a
    /// missing backend or manifest template, or an IO failure while writing
    /// the tree. Anything recoverable lands in the returned report instead.
    pub async fn run(
        &self,
        request: &CreateRequest,
        parent: &Utf8Path,
    ) -> Result<ScaffoldReport> {
        info!("Creating project {} under {}", request.name, parent);

        self.observer.stage_started(Stage::Layout);
        let layout = ProjectLayout::resolve(&request.name, parent)?;
        layout.create_root()?;
        self.observer
            .stage_finished(Stage::Layout, &StageOutcome::Succeeded);

        let mut warnings = Vec::new();

        self.observer.stage_started(Stage::Frontend);
        let frontend = frontend::provision(
            self.templates,
            &layout,
            &request.name,
            &self.options,
            self.observer,
        )
        .await;
        if let StageOutcome::Failed { reason } = &frontend {
            warnings.push(format!(
                "The project was created without a frontend: {reason}"
            ));
        }
        self.observer.stage_finished(Stage::Frontend, &frontend);

        self.observer.stage_started(Stage::Backend);
        backend::provision(self.templates, &layout)?;
        self.observer
            .stage_finished(Stage::Backend, &StageOutcome::Succeeded);

        self.observer.stage_started(Stage::Manifest);
        manifest::write_root(self.templates, &layout, &request.name)?;
        self.observer
            .stage_finished(Stage::Manifest, &StageOutcome::Succeeded);

        self.observer.stage_started(Stage::VersionControl);
        let version_control =
            match git::init_repository(&layout.root, &self.options.version_control).await {
                Ok(()) => StageOutcome::Succeeded,
                Err(e) => {
                    warn!("Version control initialization failed: {}", e);
                    warnings.push(format!("Version control initialization failed: {e}"));
                    StageOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };
        self.observer
            .stage_finished(Stage::VersionControl, &version_control);

        self.observer.stage_started(Stage::Install);
        let install = if request.skip_deps {
            debug!("Skipping dependency installation as requested");
            StageOutcome::Skipped
        } else {
            let failures = install::run(&layout, &request.name, &self.options).await;
            if failures.is_empty() {
                StageOutcome::Succeeded
            } else {
                let reason = format!("{} install step(s) failed", failures.len());
                warnings.extend(failures);
                StageOutcome::Failed { reason }
            }
        };
        self.observer.stage_finished(Stage::Install, &install);

        info!("Project {} created at {}", request.name, layout.root);
        Ok(ScaffoldReport {
            layout,
            frontend,
            version_control,
            install,
            warnings,
        })
    }
}
