// Configuration management for the bot form validator

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Thresholds applied by the grid bot validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRules {
    #[serde(default = "default_min_small_grid")]
    pub min_small_grid_percent: f64,
    #[serde(default = "default_min_investment")]
    pub min_investment_per_interval: f64,
    #[serde(default = "default_max_price_levels")]
    pub max_price_levels: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_true")]
    pub log_submissions: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationRules,
    #[serde(default)]
    pub logging: LoggingConfig,
}

// Default value functions
fn default_min_small_grid() -> f64 { 0.2 }
fn default_min_investment() -> f64 { 10.0 }
fn default_max_price_levels() -> usize { 1_000_000 }
fn default_log_level() -> String { "info".to_string() }
fn default_true() -> bool { true }

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_small_grid_percent: default_min_small_grid(),
            min_investment_per_interval: default_min_investment(),
            max_price_levels: default_max_price_levels(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_submissions: default_true(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validation: ValidationRules::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, content)
            .map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.validation.min_small_grid_percent > 0.0) {
            return Err(ConfigError::Validation(
                "min_small_grid_percent must be positive".to_string()
            ));
        }

        if !(self.validation.min_investment_per_interval >= 0.0) {
            return Err(ConfigError::Validation(
                "min_investment_per_interval must be non-negative".to_string()
            ));
        }

        if self.validation.max_price_levels < 2 {
            return Err(ConfigError::Validation(
                "max_price_levels must be at least 2".to_string()
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' must be one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    FileRead(String),

    #[error("Failed to write config file: {0}")]
    FileWrite(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
