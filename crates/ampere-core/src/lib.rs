//! # ampere-core
//!
//! Core library for the Ampere CLI providing:
//! - Error types shared across workspace crates
//! - External command execution (captured and interactive)
//! - PATH probing for required tools

pub mod error;
pub mod exec;

pub use error::{Error, Result};
pub use exec::{is_tool_available, CapturedOutput, ExternalCommand};
