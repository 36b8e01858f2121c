//! Application configuration
//!
//! Configuration loaded from `.textdiff.toml` or the user config directory.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound for `context_lines`.
pub const MAX_CONTEXT_LINES: usize = 100;

/// Line diff algorithm selected in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithmName {
    #[default]
    Myers,
    Patience,
    Lcs,
}

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Unchanged lines kept visible next to a change when a section is collapsed
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,

    /// Line diff algorithm
    #[serde(default)]
    pub algorithm: DiffAlgorithmName,

    /// Show old/new line numbers in the result
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,
}

fn default_context_lines() -> usize {
    3
}

fn default_show_line_numbers() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            context_lines: default_context_lines(),
            algorithm: DiffAlgorithmName::default(),
            show_line_numbers: default_show_line_numbers(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.context_lines > MAX_CONTEXT_LINES {
            return Err(ConfigError::Invalid {
                field: "context_lines",
                reason: format!(
                    "{} exceeds the maximum of {}",
                    self.context_lines, MAX_CONTEXT_LINES
                ),
            });
        }
        Ok(())
    }

    /// Load the config file if there is one.
    ///
    /// Returns defaults when no file exists, and an error when a file exists
    /// but cannot be read, parsed or validated.
    pub fn try_load() -> Result<Self, ConfigError> {
        match crate::load_config_file()? {
            Some((path, content)) => {
                let config = Self::from_toml_str(&content)?;
                log::info!("Loaded app config from {}", path.display());
                Ok(config)
            }
            None => {
                log::debug!("No config file found, using default app config");
                Ok(Self::default())
            }
        }
    }

    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            log::warn!("{}, using default app config", e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.context_lines, 3);
        assert_eq!(config.algorithm, DiffAlgorithmName::Myers);
        assert!(config.show_line_numbers);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            context_lines = 5
            algorithm = "patience"
            show_line_numbers = false
        "#;
        let config = AppConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.context_lines, 5);
        assert_eq!(config.algorithm, DiffAlgorithmName::Patience);
        assert!(!config.show_line_numbers);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            algorithm = "lcs"
        "#;
        let config = AppConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.algorithm, DiffAlgorithmName::Lcs);
        // Other fields should use defaults
        assert_eq!(config.context_lines, 3);
        assert!(config.show_line_numbers);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_unknown_algorithm_is_parse_error() {
        let err = AppConfig::from_toml_str(r#"algorithm = "histogram""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_context_lines_out_of_range() {
        let err = AppConfig::from_toml_str("context_lines = 101").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "context_lines",
                ..
            }
        ));

        let config = AppConfig::from_toml_str("context_lines = 100").unwrap();
        assert_eq!(config.context_lines, MAX_CONTEXT_LINES);
    }
}
