//! Command-line interface for tictac_server.

use clap::Parser;
use tictac_server::{ConfigError, ServerConfig};

/// Tictac - authoritative tic-tac-toe game server
#[derive(Parser, Debug)]
#[command(name = "tictac_server")]
#[command(about = "Serve tic-tac-toe game sessions over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Host to bind to (overrides config and environment)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides config and environment)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Reject cross-origin requests
    #[arg(long)]
    pub no_cors: bool,
}

impl Cli {
    /// Resolves the effective configuration: defaults, file, environment, flags.
    pub fn resolve_config(&self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        }
        .with_env()?;

        if let Some(host) = &self.host {
            config = config.with_host(host.clone());
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if self.no_cors {
            config = config.with_cors_permissive(false);
        }
        Ok(config)
    }
}
