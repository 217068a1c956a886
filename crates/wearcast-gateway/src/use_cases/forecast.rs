//! Forecast for a named city: resolve the city through Users, then ask
//! Weather for the forecast at its coordinates.

use wearcast_clients::{ClientError, ConnectionPool, UsersClient, WeatherClient};
use wearcast_core::{DomainError, WeatherReading};

/// Two-hop chain: city resolution feeds the forecast request. An
/// unregistered city aborts the chain with `CITY_NOT_FOUND` before any
/// weather call is made.
#[derive(Debug, Clone)]
pub struct GetForecastForUserCity {
    pool: ConnectionPool,
    users_addr: String,
    weather_addr: String,
}

impl GetForecastForUserCity {
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

    pub async fn run(
        &self,
        user_id: i64,
        city_name: &str,
        date: &str,
        time: &str,
    ) -> Result<WeatherReading, ClientError> {
        tracing::info!(user_id, city_name, date, time, "GetForecastForUserCity");

        let users = UsersClient::new(self.pool.get(&self.users_addr)?);
        let Some(city) = users.get_city(user_id, city_name).await? else {
            tracing::warn!(user_id, city_name, "city not registered for user");
            return Err(DomainError::city_not_found().into());
        };

        let weather = WeatherClient::new(self.pool.get(&self.weather_addr)?);
        weather.get_forecast(city.lat, city.lon, date, time).await
    }
}
