//! CLI module for the record service
//!
//! Provides command-line interface for:
//! - start: Resolve configuration and serve HTTP until Ctrl-C
//! - init: Write a default configuration file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, resolve_config, run, run_command, start};
pub use errors::{CliError, CliResult};
