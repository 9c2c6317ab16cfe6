use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "turtle.toml";

/// Top-level turtle configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TurtleConfig {
    /// Calendar model and tradition anchor.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_tradition")]
    pub tradition: String,
    #[serde(default)]
    pub custom_start: Option<String>,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            model: default_model(),
            tradition: default_tradition(),
            custom_start: None,
        }
    }
}

fn default_model() -> String {
    "teaching_13x28".to_string()
}
fn default_tradition() -> String {
    "anishinaabe".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub model: Option<String>,
    pub tradition: Option<String>,
    pub custom_start: Option<String>,
    pub format: Option<String>,
}

impl TurtleConfig {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read when present and all defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    debug!(path = DEFAULT_CONFIG_PATH, "no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: TurtleConfig = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Replaces file values with any command-line overrides.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(model) = overrides.model {
            self.calendar.model = model;
        }
        if let Some(tradition) = overrides.tradition {
            self.calendar.tradition = tradition;
        }
        if overrides.custom_start.is_some() {
            self.calendar.custom_start = overrides.custom_start;
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: TurtleConfig = toml::from_str("").unwrap();
        assert_eq!(config.calendar.model, "teaching_13x28");
        assert_eq!(config.calendar.tradition, "anishinaabe");
        assert_eq!(config.calendar.custom_start, None);
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn reads_all_fields() {
        let config: TurtleConfig = toml::from_str(
            r#"
            [calendar]
            model = "observed_lunar"
            tradition = "custom"
            custom_start = "2024-03-20"

            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.calendar.model, "observed_lunar");
        assert_eq!(config.calendar.custom_start.as_deref(), Some("2024-03-20"));
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<TurtleConfig, _> = toml::from_str("[calendar]\nzone = \"utc\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = TurtleConfig::default().with_overrides(Overrides {
            model: Some("observed".to_string()),
            custom_start: Some("2020-01-05".to_string()),
            ..Overrides::default()
        });
        assert_eq!(config.calendar.model, "observed");
        assert_eq!(config.calendar.tradition, "anishinaabe");
        assert_eq!(config.calendar.custom_start.as_deref(), Some("2020-01-05"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = TurtleConfig::load(Some(Path::new("does/not/exist.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
