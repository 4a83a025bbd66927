//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use crate::config::ServiceConfig;
use crate::http_server::HttpServer;
use crate::logging::{self, LoggingConfig};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Start {
            config,
            port,
            data_file,
        } => {
            let config = resolve_config(config.as_deref(), port, data_file)?;
            start(config)
        }
        Command::Init { config } => {
            logging::init(&LoggingConfig::default()).map_err(CliError::Logging)?;
            init(&config)
        }
    }
}

/// Load the config file if given, then apply command-line overrides
pub fn resolve_config(
    path: Option<&Path>,
    port: Option<u16>,
    data_file: Option<PathBuf>,
) -> CliResult<ServiceConfig> {
    let mut config = match path {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(data_file) = data_file {
        config.store.data_file = data_file;
    }

    config.validate()?;
    Ok(config)
}

/// Serve until Ctrl-C
pub fn start(config: ServiceConfig) -> CliResult<()> {
    logging::init(&config.logging).map_err(CliError::Logging)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(HttpServer::with_config(config).start())?;

    Ok(())
}

/// Write the default configuration to `path`, refusing to overwrite.
///
/// Logs through the global subscriber; `run_command` installs one first.
pub fn init(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(CliError::AlreadyInitialized(path.display().to_string()));
    }

    let json = ServiceConfig::default().to_json_pretty()?;
    fs::write(path, json)?;

    info!(path = %path.display(), "wrote default configuration");
    Ok(())
}
