//! tlsdelta CLI library.
//!
//! This library provides the core functionality for the `tlsdelta` command-line interface,
//! including argument parsing, configuration management, interactive prompts and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod prompt;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
