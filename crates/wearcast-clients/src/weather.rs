//! Client for the Weather service: per-coordinate forecasts and the
//! batch refresh the scheduler drives.

use serde::{Deserialize, Serialize};
use wearcast_core::{Coordinate, RefreshOutcome, WeatherReading};

use crate::error::{check_response, ensure_finite_coords, ClientError};
use crate::pool::ClientHandle;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    data: WeatherReading,
}

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    coords: &'a [Coordinate],
}

/// Typed wrapper over a pooled connection to the Weather service.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    handle: ClientHandle,
}

impl WeatherClient {
    pub fn new(handle: ClientHandle) -> Self {
        Self { handle }
    }

    /// Forecast for one coordinate pair. `date` and `time` are opaque
    /// strings owned by the weather contract; empty means "now".
    pub async fn get_forecast(
        &self,
        lat: f64,
        lon: f64,
        date: &str,
        time: &str,
    ) -> Result<WeatherReading, ClientError> {
        ensure_finite_coords(lat, lon)?;
        tracing::debug!(lat, lon, date, time, "requesting forecast");

        let url = self.handle.url("api/v1/forecast")?;
        let response = self
            .handle
            .http()
            .get(url)
            .query(&[("lat", lat), ("lon", lon)])
            .query(&[("date", date), ("time", time)])
            .send()
            .await?;
        let response = check_response(response).await?;
        let body: ForecastResponse = response.json().await?;
        Ok(body.data)
    }

    /// Fan-out refresh of stored forecasts for every given coordinate.
    /// Idempotent; the scheduler retries it as a whole.
    pub async fn refresh_forecasts(
        &self,
        coords: &[Coordinate],
    ) -> Result<RefreshOutcome, ClientError> {
        for c in coords {
            ensure_finite_coords(c.lat, c.lon)?;
        }
        tracing::debug!(count = coords.len(), "refreshing forecasts");

        let url = self.handle.url("api/v1/forecast/refresh")?;
        let response = self
            .handle
            .http()
            .post(url)
            .json(&RefreshRequest { coords })
            .send()
            .await?;
        let response = check_response(response).await?;
        Ok(response.json().await?)
    }
}
