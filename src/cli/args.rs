//! CLI argument definitions using clap
//!
//! Commands:
//! - record-service start [--config <path>] [--port <port>] [--data-file <path>]
//! - record-service init [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Record service - user records over HTTP, stored in one JSON file
#[derive(Parser, Debug)]
#[command(name = "record-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Start {
        /// Path to configuration file (defaults are used when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding the configuration
        #[arg(long)]
        port: Option<u16>,

        /// Backing JSON file, overriding the configuration
        #[arg(long)]
        data_file: Option<PathBuf>,
    },

    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./record-service.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
