//! Severity levels

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Log levels, ordered by severity
///
/// The discriminants match the conventional numeric levels (10 = DEBUG,
/// 50 = CRITICAL) so configs written with numbers keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "LevelValue", into = "String")]
pub enum Level {
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

/// Accepted serialized forms: a name (`"warning"`, `"warn"`) or a number (`30`)
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelValue {
    Number(u8),
    Name(String),
}

impl TryFrom<LevelValue> for Level {
    type Error = LogError;

    fn try_from(value: LevelValue) -> Result<Self, LogError> {
        match value {
            LevelValue::Number(n) => Ok(Level::from_number(n)),
            LevelValue::Name(name) => name.parse(),
        }
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_lowercase()
    }
}

impl Level {
    /// All levels from least to most severe
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    /// Name used in formatted lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    /// Numeric value of the level
    pub fn as_number(&self) -> u8 {
        *self as u8
    }

    /// Map a numeric level onto the closest level at or below it
    ///
    /// Anything under 10 is treated as DEBUG, anything over 50 as CRITICAL.
    pub fn from_number(value: u8) -> Self {
        match value {
            0..=19 => Level::Debug,
            20..=29 => Level::Info,
            30..=39 => Level::Warning,
            40..=49 => Level::Error,
            _ => Level::Critical,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Info
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Ok(Level::from_number(number));
        }
        match trimmed.to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warning" | "warn" => Ok(Level::Warning),
            "error" | "err" => Ok(Level::Error),
            "critical" | "crit" => Ok(Level::Critical),
            _ => Err(LogError::UnknownLevel(s.to_string())),
        }
    }
}
