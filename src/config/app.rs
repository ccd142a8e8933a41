//! Main application configuration
//!
//! This module defines the top-level configuration for the engine and its
//! command-line driver, including environment variable loading, TOML file
//! loading and validation.

use crate::config::{BalanceConfig, RatingConfig};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub balance: BalanceConfig,
    pub rating: RatingConfig,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging and metrics
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "calcio-engine".to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow!("Invalid {} value: {}", name, value))
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; environment variables still override
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text; missing sections take defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Balance settings
        if let Ok(team_size) = env::var("TEAM_SIZE") {
            self.balance.team_size = parse_var("TEAM_SIZE", &team_size)?;
        }
        if let Ok(threshold) = env::var("EXACT_THRESHOLD") {
            self.balance.exact_threshold = parse_var("EXACT_THRESHOLD", &threshold)?;
        }
        if let Ok(penalty) = env::var("GOALKEEPER_MISSING_PENALTY") {
            self.balance.goalkeeper_missing_penalty =
                parse_var("GOALKEEPER_MISSING_PENALTY", &penalty)?;
        }
        if let Ok(weight) = env::var("GOALKEEPER_IMBALANCE_WEIGHT") {
            self.balance.goalkeeper_imbalance_weight =
                parse_var("GOALKEEPER_IMBALANCE_WEIGHT", &weight)?;
        }

        // Rating settings
        if let Ok(base) = env::var("BASE_RATING") {
            self.rating.base_rating = parse_var("BASE_RATING", &base)?;
        }
        if let Ok(k_factor) = env::var("K_FACTOR") {
            self.rating.k_factor = parse_var("K_FACTOR", &k_factor)?;
        }
        if let Ok(bonus) = env::var("GOAL_BONUS") {
            self.rating.goal_bonus = parse_var("GOAL_BONUS", &bonus)?;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    config.balance.validate()?;
    config.rating.validate()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.service.name, "calcio-engine");
        assert_eq!(config.service.log_level, "info");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = AppConfig::default();
        config.service.log_level = "verbose".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_partial_toml_takes_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [balance]
            team_size = 6
            exact_threshold = 12

            [rating]
            goal_bonus = 3.0
            "#,
        )
        .unwrap();

        assert_eq!(config.balance.team_size, 6);
        assert_eq!(config.balance.exact_threshold, 12);
        assert_eq!(config.balance.goalkeeper_missing_penalty, 1000.0);
        assert_eq!(config.rating.goal_bonus, 3.0);
        assert_eq!(config.rating.k_factor, 50.0);
        assert_eq!(config.service.log_level, "info");
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        assert!(AppConfig::from_toml_str("[balance]\nteam_size = \"five\"").is_err());
    }

    #[test]
    fn test_toml_threshold_out_of_range_fails_validation() {
        let config = AppConfig::from_toml_str("[balance]\nexact_threshold = 40").unwrap();
        assert!(validate_config(&config).is_err());
    }
}
