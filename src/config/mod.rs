use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::*;

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/vitals/config.toml. Supplies startup
/// defaults only; runtime state is never written back.
#[derive(Debug, Clone)]
pub struct Config {
    /// Refresh interval in milliseconds.
    pub refresh_interval_ms: u64,
    /// Startup font size (clamped to the slider range).
    pub font_size: u16,
    /// Overlay origin column.
    pub overlay_x: u16,
    /// Overlay origin row.
    pub overlay_y: u16,
    /// Theme name (built-in or custom).
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval_ms: DEFAULT_REFRESH_MS,
            font_size: DEFAULT_FONT_SIZE,
            overlay_x: DEFAULT_OVERLAY_X,
            overlay_y: DEFAULT_OVERLAY_Y,
            theme: "default".to_string(),
        }
    }
}

/// Errors from loading a config file from an explicit path.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// TOML-deserializable config file format.
/// All fields are optional — missing fields use defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    refresh_interval_ms: Option<u64>,
    font_size: Option<u16>,
    overlay_x: Option<u16>,
    overlay_y: Option<u16>,
    theme: Option<String>,
}

impl Config {
    /// Load config from ~/.config/vitals/config.toml, falling back to
    /// defaults for any missing fields. A missing file yields pure
    /// defaults; a malformed file warns on stderr and yields defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if !config_path.exists() {
            return Config::default();
        }
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: {} ({}). Using defaults.",
                    e,
                    config_path.display()
                );
                Config::default()
            }
        }
    }

    /// Load and merge a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let file_config: FileConfig = toml::from_str(&content)?;

        let mut config = Config::default();
        if let Some(v) = file_config.refresh_interval_ms {
            config.refresh_interval_ms = v.max(MIN_REFRESH_MS);
        }
        if let Some(v) = file_config.font_size {
            config.font_size = v.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        }
        if let Some(v) = file_config.overlay_x {
            config.overlay_x = v;
        }
        if let Some(v) = file_config.overlay_y {
            config.overlay_y = v;
        }
        if let Some(v) = file_config.theme {
            if !v.is_empty() {
                config.theme = v;
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.refresh_interval_ms, DEFAULT_REFRESH_MS);
        assert_eq!(config.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(config.theme, "default");
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let file = write_config("font_size = 18\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.font_size, 18);
        assert_eq!(config.refresh_interval_ms, DEFAULT_REFRESH_MS);
    }

    #[test]
    fn refresh_interval_floored_at_minimum() {
        let file = write_config("refresh_interval_ms = 5\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.refresh_interval_ms, MIN_REFRESH_MS);
    }

    #[test]
    fn font_size_clamped_to_slider_range() {
        let file = write_config("font_size = 99\n");
        assert_eq!(Config::load_from(file.path()).unwrap().font_size, FONT_SIZE_MAX);

        let file = write_config("font_size = 1\n");
        assert_eq!(Config::load_from(file.path()).unwrap().font_size, FONT_SIZE_MIN);
    }

    #[test]
    fn empty_theme_ignored() {
        let file = write_config("theme = \"\"\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.theme, "default");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let file = write_config("font_size = [not toml\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
