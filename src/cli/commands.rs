//! CLI command implementations

use std::sync::Arc;

use tracing::Level;

use crate::album::{AlbumRepository, InMemoryAlbumStore};
use crate::http_server::HttpServer;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            log_level,
        } => {
            let config =
                Config::load_or_default(config.as_deref())?.with_overrides(host, port, log_level)?;
            serve(config)
        }
    }
}

/// Seed the store, bind the configured address and serve until Ctrl-C
pub fn serve(config: Config) -> CliResult<()> {
    init_logging(config.level()?);

    let store = Arc::new(InMemoryAlbumStore::from_config(&config.store));
    tracing::info!(
        albums = store.len().unwrap_or_default(),
        policy = ?store.policy(),
        "album store ready"
    );

    let server = HttpServer::with_store(config.server, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot(format!("HTTP server failed: {}", e)))
    })
}

/// Install the global fmt subscriber. A second call is a no-op.
fn init_logging(level: Level) {
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}
