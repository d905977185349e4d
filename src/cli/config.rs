//! Service configuration file
//!
//! Every field is optional; a missing file section takes its defaults.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::album::StoreConfig;
use crate::http_server::HttpServerConfig;

use super::errors::{CliError, CliResult};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    /// Maximum log level (default: "info")
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides, then re-validate
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        log_level: Option<String>,
    ) -> CliResult<Self> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if log_level.is_some() {
            self.log_level = log_level;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(CliError::invalid_config("server.host must not be empty"));
        }
        if self.server.port == 0 {
            return Err(CliError::invalid_config("server.port must not be 0"));
        }
        if let Some(origin) = self.server.invalid_cors_origin() {
            return Err(CliError::invalid_config(format!(
                "server.cors_origins: not an origin: {}",
                origin
            )));
        }
        self.level()?;
        Ok(())
    }

    /// Parsed log level
    pub fn level(&self) -> CliResult<Level> {
        match &self.log_level {
            None => Ok(Level::INFO),
            Some(level) => Level::from_str(level)
                .map_err(|_| CliError::invalid_config(format!("Unknown log level: {}", level))),
        }
    }
}
