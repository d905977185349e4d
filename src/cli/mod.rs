//! CLI module for albumstore
//!
//! Provides command-line interface for:
//! - serve: Load configuration, seed the store and run the HTTP server

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliResult};
