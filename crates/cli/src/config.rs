//! Runtime configuration, read from the environment once at startup.

use boutique_observability::{LogFormat, LogSettings};
use thiserror::Error;

pub const STORE_NAME_VAR: &str = "BOUTIQUE_STORE_NAME";
pub const CLEAR_SCREEN_VAR: &str = "BOUTIQUE_CLEAR_SCREEN";
pub const PAUSE_VAR: &str = "BOUTIQUE_PAUSE";
pub const LOG_FORMAT_VAR: &str = "BOUTIQUE_LOG_FORMAT";
pub const LOG_LEVEL_VAR: &str = "BOUTIQUE_LOG_LEVEL";

const DEFAULT_STORE_NAME: &str = "BOUTIQUE LANITA";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a boolean (true/false, yes/no, on/off, 1/0), got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var}: expected `text` or `json`, got {value:?}")]
    InvalidLogFormat { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Title shown in the banner above the catalog.
    pub store_name: String,
    /// Clear the terminal before redrawing the catalog.
    pub clear_screen: bool,
    /// Wait for Enter after each action so its result stays on screen.
    pub pause: bool,
    pub log: LogSettings,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            clear_screen: true,
            pause: true,
            log: LogSettings::default(),
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from an arbitrary variable source. Unset or blank
    /// variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(name) = get(STORE_NAME_VAR) {
            config.store_name = name.trim().to_string();
        }
        if let Some(value) = get(CLEAR_SCREEN_VAR) {
            config.clear_screen = parse_bool(CLEAR_SCREEN_VAR, &value)?;
        }
        if let Some(value) = get(PAUSE_VAR) {
            config.pause = parse_bool(PAUSE_VAR, &value)?;
        }
        if let Some(value) = get(LOG_FORMAT_VAR) {
            config.log.format =
                LogFormat::parse(&value).ok_or_else(|| ConfigError::InvalidLogFormat {
                    var: LOG_FORMAT_VAR,
                    value: value.clone(),
                })?;
        }
        if let Some(level) = get(LOG_LEVEL_VAR) {
            config.log.default_level = level.trim().to_string();
        }

        Ok(config)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.store_name, "BOUTIQUE LANITA");
        assert!(config.clear_screen);
        assert!(config.pause);
        assert_eq!(config.log.format, LogFormat::Text);
        assert_eq!(config.log.default_level, "warn");
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            (STORE_NAME_VAR, " Corner Shop "),
            (CLEAR_SCREEN_VAR, "off"),
            (PAUSE_VAR, "No"),
            (LOG_FORMAT_VAR, "json"),
            (LOG_LEVEL_VAR, "debug"),
        ])
        .unwrap();

        assert_eq!(config.store_name, "Corner Shop");
        assert!(!config.clear_screen);
        assert!(!config.pause);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.log.default_level, "debug");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[(STORE_NAME_VAR, "   "), (PAUSE_VAR, "")]).unwrap();
        assert_eq!(config.store_name, "BOUTIQUE LANITA");
        assert!(config.pause);
    }

    #[test]
    fn rejects_bad_bool() {
        let err = config_from(&[(CLEAR_SCREEN_VAR, "maybe")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                var: CLEAR_SCREEN_VAR,
                value: "maybe".to_string()
            }
        );
        assert!(err.to_string().starts_with("BOUTIQUE_CLEAR_SCREEN:"));
    }

    #[test]
    fn rejects_bad_log_format() {
        let err = config_from(&[(LOG_FORMAT_VAR, "xml")]).unwrap_err();
        match err {
            ConfigError::InvalidLogFormat { var, value } => {
                assert_eq!(var, LOG_FORMAT_VAR);
                assert_eq!(value, "xml");
            }
            _ => panic!("Expected InvalidLogFormat"),
        }
    }
}
