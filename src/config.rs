use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use fridgesavvy_shared::{Clock, parse_date};
use serde::Deserialize;
use std::env;
use strum::{AsRefStr, Display, EnumString};

/// Longest accepted "expiring soon" window.
pub const MAX_EXPIRING_WINDOW_DAYS: u32 = 365;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub kitchen: KitchenConfig,
}

#[derive(
    Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct KitchenConfig {
    /// Pins the date used for expiry, suggestion and shopping queries.
    /// The system date is used when unset.
    #[serde(default)]
    pub today: Option<String>,
    #[serde(default = "default_expiring_window_days")]
    pub expiring_window_days: u32,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            today: None,
            expiring_window_days: default_expiring_window_days(),
            prompt: default_prompt(),
        }
    }
}

fn default_expiring_window_days() -> u32 {
    fridgesavvy_pantry::EXPIRING_SOON_DAYS
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl KitchenConfig {
    pub fn clock(&self) -> fridgesavvy_shared::Result<Clock> {
        match &self.today {
            Some(today) => Ok(Clock::Fixed(parse_date(today)?)),
            None => Ok(Clock::System),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FRIDGESAVVY__KITCHEN__TODAY, etc.)
    /// 2. Config file specified by path, CONFIG_PATH, or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", LogFormat::default().to_string())?
            .set_default(
                "kitchen.expiring_window_days",
                i64::from(default_expiring_window_days()),
            )?
            .set_default("kitchen.prompt", default_prompt())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file just means defaults.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FRIDGESAVVY")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.logging.level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        if self.kitchen.expiring_window_days > MAX_EXPIRING_WINDOW_DAYS {
            return Err(format!(
                "kitchen.expiring_window_days must be at most {MAX_EXPIRING_WINDOW_DAYS}"
            ));
        }
        if let Err(e) = self.kitchen.clock() {
            return Err(format!("kitchen.today: {e}"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.kitchen.clock().unwrap(), Clock::System);
        assert_eq!(config.kitchen.expiring_window_days, 3);
    }

    #[test]
    fn test_validation_bad_today() {
        let config = Config {
            kitchen: KitchenConfig {
                today: Some("next friday".to_string()),
                ..KitchenConfig::default()
            },
            ..Config::default()
        };

        let err = config.validate().unwrap_err();
        assert!(err.contains("next friday"), "{err}");
    }

    #[test]
    fn test_validation_window_too_wide() {
        let config = Config {
            kitchen: KitchenConfig {
                expiring_window_days: 400,
                ..KitchenConfig::default()
            },
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_log_level() {
        let config = Config {
            logging: LoggingConfig {
                level: " ".to_string(),
                format: LogFormat::Json,
            },
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_fixed_today() {
        let kitchen = KitchenConfig {
            today: Some("2025-10-10".to_string()),
            ..KitchenConfig::default()
        };

        assert_eq!(kitchen.clock().unwrap(), Clock::Fixed(date!(2025 - 10 - 10)));
    }

    #[test]
    fn test_log_format_names() {
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    }
}
