//! CLI errors
//!
//! Every CLI error ends the process: `main` prints it and exits non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Failures while preparing or running the album service
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read
    #[error("Cannot read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration is not valid JSON or fails validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Runtime or listener could not be started
    #[error("Server failed: {0}")]
    Boot(String),
}

impl CliError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn boot(msg: impl Into<String>) -> Self {
        Self::Boot(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidConfig(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_path() {
        let err = CliError::ConfigRead {
            path: PathBuf::from("albums.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "Cannot read config albums.json: no such file"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_json_errors_are_invalid_config() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(CliError::from(json_err), CliError::InvalidConfig(_)));
    }

    #[test]
    fn test_boot_message() {
        assert_eq!(
            CliError::boot("address in use").to_string(),
            "Server failed: address in use"
        );
    }
}
