//! CLI argument definitions using clap
//!
//! Commands:
//! - albumstore serve [--config <path>] [--host <host>] [--port <port>] [--log-level <level>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// albumstore - An in-memory album catalogue served over HTTP
#[derive(Parser, Debug)]
#[command(name = "albumstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides the configuration file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the configuration file)
        #[arg(long)]
        port: Option<u16>,

        /// Maximum log level: trace, debug, info, warn or error
        #[arg(long)]
        log_level: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
