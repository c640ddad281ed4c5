//! Logger settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LogError, LogResult};
use crate::level::Level;

/// Minimum level accepted by each configured sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkFloors {
    /// Console sink floor (default: DEBUG)
    pub console: Level,
    /// Info file floor (default: INFO)
    pub info_file: Level,
    /// Critical file floor (default: ERROR)
    pub critical_file: Level,
}

impl Default for SinkFloors {
    fn default() -> Self {
        Self {
            console: Level::Debug,
            info_file: Level::Info,
            critical_file: Level::Error,
        }
    }
}

/// Settings applied by `LogFacade::configure`
///
/// # Example
///
/// ```
/// use logfacade_core::{Level, LoggerConfig};
///
/// let config = LoggerConfig::new("my-app")
///     .with_info_file("logs/info.log")
///     .with_critical_file("logs/critical.log")
///     .with_console(true)
///     .with_level(Level::Debug);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Logger name shown in every line; empty means the root logger
    pub app_name: String,
    /// File receiving ERROR and above; no file when unset
    pub critical_file: Option<PathBuf>,
    /// File receiving INFO and above; no file when unset
    pub info_file: Option<PathBuf>,
    /// Rotation threshold in KiB, shared by both files
    pub max_file_size: u64,
    /// Number of rotated files kept per log file
    pub backup_count: usize,
    /// Also print to stdout
    pub console: bool,
    /// Minimum level for the whole logger
    pub level: Level,
    /// Per-sink floors
    pub floors: SinkFloors,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            app_name: String::new(),
            critical_file: None,
            info_file: None,
            max_file_size: 10,
            backup_count: 10,
            console: false,
            level: Level::Info,
            floors: SinkFloors::default(),
        }
    }
}

impl LoggerConfig {
    /// Create a config with defaults for the given application name
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::default()
        }
    }

    pub fn with_critical_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.critical_file = Some(path.into());
        self
    }

    pub fn with_info_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.info_file = Some(path.into());
        self
    }

    /// Rotation threshold in KiB
    pub fn with_max_file_size(mut self, kib: u64) -> Self {
        self.max_file_size = kib;
        self
    }

    pub fn with_backup_count(mut self, count: usize) -> Self {
        self.backup_count = count;
        self
    }

    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_floors(mut self, floors: SinkFloors) -> Self {
        self.floors = floors;
        self
    }

    /// Place `info.log` and `critical.log` under `dir`
    pub fn with_log_dir(self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.with_info_file(dir.join("info.log"))
            .with_critical_file(dir.join("critical.log"))
    }

    /// Rotation threshold in bytes
    pub fn max_bytes(&self) -> u64 {
        self.max_file_size.saturating_mul(1024)
    }

    /// Check rotation parameters
    pub fn validate(&self) -> LogResult<()> {
        if self.max_file_size == 0 {
            return Err(LogError::invalid_config("max_file_size must be positive"));
        }
        if self.backup_count == 0 {
            return Err(LogError::invalid_config("backup_count must be positive"));
        }
        Ok(())
    }

    /// Per-user log directory for an application
    ///
    /// `~/.local/share/<app>/logs` on Linux, the platform equivalent elsewhere.
    /// Falls back to `./logs` when no data directory is known.
    pub fn default_log_dir(app_name: &str) -> PathBuf {
        let app = if app_name.is_empty() { "logfacade" } else { app_name };
        dirs::data_local_dir()
            .map(|dir| dir.join(app).join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }

    /// Short description of the user-facing options, in display order
    pub fn option_help() -> [(&'static str, &'static str); 4] {
        [
            (
                "console",
                "Print the logs to stdout. Includes everything from DEBUG and above. Default: false",
            ),
            (
                "info_file",
                "Save the logs to an info file. Includes everything from INFO and above. No file when unset. Default: unset",
            ),
            (
                "critical_file",
                "Save the logs to a critical file. Includes everything from ERROR and above. No file when unset. Default: unset",
            ),
            (
                "level",
                "Minimum level for the logger; lower levels are dropped everywhere. \
                 10 = DEBUG, 20 = INFO, 30 = WARNING, 40 = ERROR, 50 = CRITICAL. Default: 20",
            ),
        ]
    }
}
