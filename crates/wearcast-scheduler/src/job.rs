//! One refresh cycle: enumerate every known coordinate, then fan the
//! refresh out to the Weather service in a single batch call.

use wearcast_clients::{ClientError, ConnectionPool, UsersClient, WeatherClient};
use wearcast_core::Coordinate;

/// The idempotent unit of work the scheduler drives. An empty coordinate
/// list is a normal no-op cycle, not an error.
#[derive(Debug, Clone)]
pub struct RefreshForecastsJob {
    pool: ConnectionPool,
    users_addr: String,
    weather_addr: String,
}

impl RefreshForecastsJob {
    pub fn new(
        pool: ConnectionPool,
        users_addr: impl Into<String>,
        weather_addr: impl Into<String>,
    ) -> Self {
        Self {
            pool,
            users_addr: users_addr.into(),
            weather_addr: weather_addr.into(),
        }
    }

    pub async fn run(&self) -> Result<(), ClientError> {
        let users = UsersClient::new(self.pool.get(&self.users_addr)?);
        let owned = users.list_all_coordinates().await?;
        if owned.is_empty() {
            tracing::debug!("no coordinates registered, skipping refresh");
            return Ok(());
        }

        let coords: Vec<Coordinate> = owned.into_iter().map(Coordinate::from).collect();
        let weather = WeatherClient::new(self.pool.get(&self.weather_addr)?);
        let outcome = weather.refresh_forecasts(&coords).await?;

        if outcome.skipped.is_empty() {
            tracing::info!(refreshed = outcome.refreshed_count, "forecasts refreshed");
        } else {
            tracing::warn!(
                refreshed = outcome.refreshed_count,
                skipped = outcome.skipped.len(),
                "some coordinates were skipped during refresh"
            );
        }
        Ok(())
    }
}
