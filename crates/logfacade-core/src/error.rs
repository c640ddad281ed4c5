//! Error types

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by configuration and lifecycle operations
///
/// Emission never returns these; failures while writing a line are
/// routed to the console fallback instead.
#[derive(Error, Debug)]
pub enum LogError {
    /// Rotation parameters or other settings are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A parent directory of a log file could not be created
    #[error("Failed to create log directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A log file could not be opened for appending
    #[error("Failed to open log file {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A second facade was constructed while one already exists
    #[error("LogFacade is a singleton; use LogFacade::get_instance()")]
    SingletonViolation,

    /// The operation requires a configured facade
    #[error("LogFacade is not configured")]
    NotConfigured,

    /// A level name or number could not be parsed
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LogError {
    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create a directory creation error
    pub fn create_directory(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::CreateDirectory {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a file open error
    pub fn open_file(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::OpenFile {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LogError::invalid_config("max_file_size must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: max_file_size must be positive"
        );

        let err = LogError::open_file(
            "/var/log/app.log",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Failed to open log file /var/log/app.log: denied");
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let err = LogError::create_directory(
            "logs/nested",
            std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        );
        assert!(err.source().is_some());
    }
}
