//! Environment-driven settings, one struct per deployable service.
//!
//! Each service reads variables under its own prefix (`GATEWAY_*`,
//! `SCHEDULER_*`); every field has a default so an empty environment
//! yields a runnable local configuration.

use std::time::Duration;

use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

fn default_weather_addr() -> String {
    "http://localhost:50051".to_string()
}

fn default_advice_addr() -> String {
    "http://localhost:50052".to_string()
}

fn default_users_addr() -> String {
    "http://localhost:50053".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_interval_seconds() -> u64 {
    900
}

fn default_startup_delay_seconds() -> f64 {
    15.0
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_backoff_seconds() -> f64 {
    2.0
}

/// Settings for the gateway service (`GATEWAY_*`).
#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    #[serde(default = "default_users_addr")]
    pub users_addr: String,
    #[serde(default = "default_weather_addr")]
    pub weather_addr: String,
    #[serde(default = "default_advice_addr")]
    pub advice_addr: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl GatewaySettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let cfg = Config::builder()
            .add_source(Environment::with_prefix("GATEWAY").try_parsing(true))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}

/// Settings for the forecast refresh worker (`SCHEDULER_*`).
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerSettings {
    #[serde(default = "default_users_addr")]
    pub users_addr: String,
    #[serde(default = "default_weather_addr")]
    pub weather_addr: String,
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,
    #[serde(default = "default_startup_delay_seconds")]
    pub startup_delay_seconds: f64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_backoff_seconds")]
    pub retry_backoff_seconds: f64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl SchedulerSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let cfg = Config::builder()
            .add_source(Environment::with_prefix("SCHEDULER").try_parsing(true))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_secs_f64(self.startup_delay_seconds.max(0.0))
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_secs_f64(self.retry_backoff_seconds.max(0.0))
    }
}
