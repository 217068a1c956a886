//! Shared core for the wearcast services: error taxonomy, wire value
//! objects, and environment configuration.

pub mod config;
pub mod error;
pub mod types;

pub use config::{GatewaySettings, SchedulerSettings, SettingsError};
pub use error::{DomainError, ErrorBody, ErrorCode, RpcStatus};
pub use types::{City, Coordinate, OwnedCoordinate, RefreshOutcome, User, WeatherReading};

use anyhow::Result;

/// Initialize tracing for a service binary.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (typically from the
/// service settings) is used.
pub fn init_tracing(default_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    Ok(())
}
