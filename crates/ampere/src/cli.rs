//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};

use ampere_scaffold::FrontendStrategy;

/// Ampere - Scaffold hybrid desktop applications
#[derive(Parser, Debug)]
#[command(name = "ampere")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show timestamped step logs instead of the progress spinner
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new Ampere project
    Create(CreateArgs),
}

// Create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the project (used as directory and package name)
    pub name: String,

    /// Skip dependency installation
    #[arg(long)]
    pub skip_deps: bool,

    /// Frontend provisioning strategy
    #[arg(long, value_enum, default_value_t)]
    pub frontend: FrontendArg,

    /// Scaffold from an on-disk template directory instead of the
    /// templates bundled in the binary
    #[arg(long)]
    pub template_dir: Option<Utf8PathBuf>,
}

/// Frontend strategy as exposed on the command line
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum FrontendArg {
    /// Run the interactive generator, falling back to the bundled template
    #[default]
    Generator,
    /// Copy the bundled frontend template directly
    Template,
}

impl From<FrontendArg> for FrontendStrategy {
    fn from(arg: FrontendArg) -> Self {
        match arg {
            FrontendArg::Generator => FrontendStrategy::Generator,
            FrontendArg::Template => FrontendStrategy::Template,
        }
    }
}
