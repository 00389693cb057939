//! TOML configuration file loading
//!
//! An explicitly requested config file must exist. Otherwise the default
//! `<config dir>/Appversion/appversion.toml` is used when present.

use super::args::{Args, LOG_FORMATS, LOG_LEVELS};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for '{key}' in configuration file: {message}")]
    InvalidValue { key: String, message: String },
}

impl crate::core::error_handling::ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, ConfigError::Read { .. })
    }

    fn user_message(&self) -> Option<String> {
        match self {
            ConfigError::Read { .. } => None,
            other => Some(other.to_string()),
        }
    }
}

/// Default config file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Appversion").join("appversion.toml"))
}

/// Load the configuration table, if there is one
pub fn load_config(config_file: Option<&Path>) -> Result<Option<toml::Table>, ConfigError> {
    let path = match config_file {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(None),
        },
    };

    log::debug!("Loading configuration from {}", path.display());
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let table = contents
        .parse::<toml::Table>()
        .map_err(|source| ConfigError::Parse { path, source })?;
    Ok(Some(table))
}

impl Args {
    /// Apply TOML values to options the command line did not set
    pub fn apply_toml_values(&mut self, config: &toml::Table) -> Result<(), ConfigError> {
        if self.manifest.is_none() {
            if let Some(manifest) = string_value(config, "manifest")? {
                self.manifest = Some(PathBuf::from(manifest));
            }
        }

        if self.log_level.is_none() {
            self.log_level = choice_value(config, "log-level", &LOG_LEVELS)?;
        }
        if self.log_format.is_none() {
            self.log_format = choice_value(config, "log-format", &LOG_FORMATS)?;
        }
        if self.log_file.is_none() {
            if let Some(log_file) = string_value(config, "log-file")? {
                self.log_file = Some(PathBuf::from(log_file));
            }
        }

        if let Some(color) = bool_value(config, "color")? {
            self.config_color = Some(color);
        }
        if let Some(no_color) = bool_value(config, "no-color")? {
            // no-color = true wins over color = true
            if no_color || self.config_color.is_none() {
                self.config_color = Some(!no_color);
            }
        }

        Ok(())
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    }
}

fn string_value<'a>(config: &'a toml::Table, key: &str) -> Result<Option<&'a str>, ConfigError> {
    match config.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| invalid(key, "expected a string")),
    }
}

fn bool_value(config: &toml::Table, key: &str) -> Result<Option<bool>, ConfigError> {
    match config.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_bool()
            .map(Some)
            .ok_or_else(|| invalid(key, "expected true or false")),
    }
}

fn choice_value(
    config: &toml::Table,
    key: &str,
    choices: &[&str],
) -> Result<Option<String>, ConfigError> {
    match string_value(config, key)? {
        None => Ok(None),
        Some(value) if choices.contains(&value) => Ok(Some(value.to_string())),
        Some(value) => Err(invalid(
            key,
            format!("'{}' is not one of {}", value, choices.join(", ")),
        )),
    }
}
