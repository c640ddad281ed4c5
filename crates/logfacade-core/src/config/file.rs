//! Loading logger settings from YAML or JSON files

use std::fs;
use std::path::Path;

use crate::error::LogResult;
use super::settings::LoggerConfig;

/// Config file format, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// `.json` is JSON, anything else is read as YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
        }
    }
}

impl LoggerConfig {
    /// Parse a YAML document; missing keys take their defaults
    pub fn from_yaml_str(content: &str) -> LogResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a JSON document; missing keys take their defaults
    pub fn from_json_str(content: &str) -> LogResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load settings from a file, detecting the format from its extension
    ///
    /// The result is validated before it is returned.
    pub fn from_file(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = match ConfigFormat::from_path(path) {
            ConfigFormat::Yaml => Self::from_yaml_str(&content)?,
            ConfigFormat::Json => Self::from_json_str(&content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> LogResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write settings to a file in the format matching its extension
    pub fn save(&self, path: impl AsRef<Path>) -> LogResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = match ConfigFormat::from_path(path) {
            ConfigFormat::Yaml => self.to_yaml()?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        };
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogError;
    use crate::level::Level;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("log.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("log.JSON")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("log.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("log")), ConfigFormat::Yaml);
    }

    #[test]
    fn test_yaml_partial_document() {
        let yaml = r#"
app_name: TestApp
info_file: logs/info.log
console: true
level: debug
floors:
  critical_file: critical
"#;
        let config = LoggerConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.app_name, "TestApp");
        assert_eq!(config.info_file, Some(PathBuf::from("logs/info.log")));
        assert!(config.critical_file.is_none());
        assert!(config.console);
        assert_eq!(config.level, Level::Debug);
        assert_eq!(config.max_file_size, 10);
        assert_eq!(config.floors.critical_file, Level::Critical);
        assert_eq!(config.floors.info_file, Level::Info);
    }

    #[test]
    fn test_yaml_numeric_level() {
        let config = LoggerConfig::from_yaml_str("level: 40").unwrap();
        assert_eq!(config.level, Level::Error);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(LoggerConfig::from_yaml_str("").unwrap(), LoggerConfig::default());
    }

    #[test]
    fn test_json_document() {
        let json = r#"{"app_name": "svc", "backup_count": 3, "level": "warning"}"#;
        let config = LoggerConfig::from_json_str(json).unwrap();
        assert_eq!(config.app_name, "svc");
        assert_eq!(config.backup_count, 3);
        assert_eq!(config.level, Level::Warning);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("logging.yaml");
        let config = LoggerConfig::new("svc").with_console(true).with_backup_count(4);

        config.save(&path).unwrap();
        let loaded = LoggerConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_file_validates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logging.json");
        fs::write(&path, r#"{"max_file_size": 0}"#).unwrap();

        let err = LoggerConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, LogError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let err = LoggerConfig::from_file("/nonexistent/logging.yaml").unwrap_err();
        assert!(matches!(err, LogError::Io(_)));
    }
}
