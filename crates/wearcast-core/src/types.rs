//! Wire value objects shared across service boundaries.
//!
//! All of these are immutable payloads: created per call, never mutated
//! after construction. The durable entities behind them (users, cities,
//! stored forecasts) are owned by the downstream services.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// A coordinate together with the user who registered it, as returned by
/// the Users service when enumerating every known location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OwnedCoordinate {
    pub user_id: i64,
    pub lat: f64,
    pub lon: f64,
}

impl From<OwnedCoordinate> for Coordinate {
    fn from(c: OwnedCoordinate) -> Self {
        Self {
            lat: c.lat,
            lon: c.lon,
        }
    }
}

/// A city registered by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// A user account, as exposed by the Users service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<String>,
    pub is_admin: bool,
    pub locale: String,
}

/// One weather observation or forecast point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
    /// Wall-clock time of the reading, formatted by the weather service
    /// (e.g. "12:00"). Opaque to this layer.
    pub time: String,
}

/// Result of a fan-out forecast refresh.
///
/// `skipped` lists the coordinates the weather service could not refresh,
/// so a failed item is visible to operators instead of silently folded
/// into a smaller count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshOutcome {
    pub refreshed_count: u32,
    #[serde(default)]
    pub skipped: Vec<Coordinate>,
}
