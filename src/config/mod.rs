use crate::core::calculator::aggregate::MAX_NUMBER_OF_BARS;
use crate::core::labels::LabelMode;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::is_valid_time_format;
use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Overrides the configuration directory (used by tests and portable installs).
pub const HOME_ENV: &str = "RWINTIME_HOME";

const KNOWN_FIELDS: &[&str] = &[
    "stream_file",
    "max_bars",
    "label_mode",
    "missing_label",
    "time_format",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_stream_file")]
    pub stream_file: String,
    #[serde(default = "default_max_bars")]
    pub max_bars: usize,
    #[serde(default)]
    pub label_mode: LabelMode,
    #[serde(default = "default_missing_label")]
    pub missing_label: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_stream_file() -> String {
    Config::stream_file_default().to_string_lossy().to_string()
}
fn default_max_bars() -> usize {
    MAX_NUMBER_OF_BARS
}
fn default_missing_label() -> String {
    "(nil)".to_string()
}
fn default_time_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stream_file: default_stream_file(),
            max_bars: default_max_bars(),
            label_mode: LabelMode::default(),
            missing_label: default_missing_label(),
            time_format: default_time_format(),
        }
    }
}

impl Config {
    /// Return the configuration directory: `$RWINTIME_HOME`, else `~/.rwintime`
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.trim().is_empty()
        {
            return expand_tilde(&dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rwintime")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rwintime.conf")
    }

    /// Return the default path of the snapshot stream
    pub fn stream_file_default() -> PathBuf {
        Self::config_dir().join("rwintime.json")
    }

    pub fn stream_path(&self) -> PathBuf {
        expand_tilde(&self.stream_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))?;
        if cfg.max_bars == 0 {
            return Err(AppError::Config("max_bars must be at least 1".to_string()));
        }
        if !is_valid_time_format(&cfg.time_format) {
            return Err(AppError::Config(format!(
                "invalid time_format '{}'",
                cfg.time_format
            )));
        }
        Ok(cfg)
    }

    /// Known fields absent from a YAML document (they fall back to defaults).
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        let missing = KNOWN_FIELDS
            .iter()
            .copied()
            .filter(|k| value.get(*k).is_none())
            .collect();
        Ok(missing)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the config file, creating the config directory if needed.
    /// Returns the path written.
    pub fn save(&self) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;
        let path = Self::config_file();
        fs::write(&path, self.to_yaml()?)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_takes_defaults() {
        let cfg = Config::from_yaml("max_bars: 5\nlabel_mode: window\n").unwrap();
        assert_eq!(cfg.max_bars, 5);
        assert_eq!(cfg.label_mode, LabelMode::Window);
        assert_eq!(cfg.missing_label, "(nil)");
    }

    #[test]
    fn zero_bars_is_rejected() {
        assert!(matches!(
            Config::from_yaml("max_bars: 0\n"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn unknown_time_specifier_is_rejected() {
        assert!(matches!(
            Config::from_yaml("time_format: \"%Q\"\n"),
            Err(AppError::Config(msg)) if msg.contains("%Q")
        ));
        assert!(Config::from_yaml("time_format: \"%d/%m %H:%M\"\n").is_ok());
    }

    #[test]
    fn bad_label_mode_is_a_config_error() {
        assert!(Config::from_yaml("label_mode: desktop\n").is_err());
    }

    #[test]
    fn reports_missing_fields() {
        let missing = Config::missing_fields("max_bars: 5\n").unwrap();
        assert!(missing.contains(&"stream_file"));
        assert!(!missing.contains(&"max_bars"));
    }

    #[test]
    fn yaml_round_trip() {
        let cfg = Config::default();
        let back = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();
        assert_eq!(cfg, back);
    }
}
