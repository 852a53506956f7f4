//! # ampere-scaffold
//!
//! Scaffolding library for the Ampere CLI providing:
//! - Project layout resolution and collision checking
//! - Bundled (embedded) and on-disk project templates
//! - The staged create workflow: frontend, backend, manifests, version
//!   control, dependency installation
//!
//! # Examples
//!
//! ## Create a project from the bundled templates
//!
//! ```no_run
//! use ampere_scaffold::{CreateRequest, ScaffoldOptions, Scaffolder, TemplateStore};
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let templates = TemplateStore::bundled();
//! let scaffolder = Scaffolder::new(&templates, ScaffoldOptions::default());
//!
//! let request = CreateRequest::new("my-app");
//! let report = scaffolder.run(&request, Utf8Path::new("/tmp")).await?;
//! println!("created at {}", report.layout.root);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod layout;
pub mod observer;
pub mod templates;
pub mod workflow;

mod backend;
mod frontend;
mod git;
mod install;
mod manifest;

pub use error::{Error, Result};
pub use layout::ProjectLayout;
pub use observer::{NoOpObserver, Stage, StageObserver};
pub use templates::TemplateStore;
pub use workflow::{
    CreateRequest, FrontendStrategy, GeneratorCommand, ScaffoldOptions, ScaffoldReport,
    Scaffolder, StageOutcome,
};
