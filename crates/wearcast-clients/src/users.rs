//! Client for the Users service: account lookups plus per-user city
//! registry, including the coordinate enumeration the refresh worker
//! fans out over.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use wearcast_core::{City, DomainError, ErrorBody, ErrorCode, OwnedCoordinate, User};

use crate::error::{check_response, ensure_finite_coords, ensure_non_empty, ClientError};
use crate::pool::ClientHandle;

#[derive(Debug, Serialize)]
struct AddCityRequest<'a> {
    name: &'a str,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Serialize)]
struct CreateUserRequest<'a> {
    username: &'a str,
    password_hash: &'a str,
}

#[derive(Debug, Serialize)]
struct TelegramUserRequest<'a> {
    telegram_id: &'a str,
    username: &'a str,
    locale: &'a str,
}

#[derive(Debug, Deserialize)]
struct ListCitiesResponse {
    cities: Vec<City>,
}

#[derive(Debug, Deserialize)]
struct ListCoordinatesResponse {
    coords: Vec<OwnedCoordinate>,
}

/// Typed wrapper over a pooled connection to the Users service.
/// Stateless; construct one per call site.
#[derive(Debug, Clone)]
pub struct UsersClient {
    handle: ClientHandle,
}

impl UsersClient {
    pub fn new(handle: ClientHandle) -> Self {
        Self { handle }
    }

    /// Resolve a city registered by `user_id` to its coordinates.
    ///
    /// Returns `Ok(None)` when the city is not registered for this user —
    /// a known outcome, distinct from every transport failure.
    pub async fn get_city(
        &self,
        user_id: i64,
        city_name: &str,
    ) -> Result<Option<City>, ClientError> {
        ensure_non_empty("city name", city_name)?;
        tracing::debug!(user_id, city_name, "resolving city");

        let url = self.handle.url(&format!("api/v1/users/{user_id}/city"))?;
        let response = self
            .handle
            .http()
            .get(url)
            .query(&[("name", city_name)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            let text = response.text().await.unwrap_or_default();
            return match serde_json::from_str::<ErrorBody>(&text) {
                Ok(body) if ErrorCode::parse(&body.code) == ErrorCode::CityNotFound => Ok(None),
                Ok(body) => Err(DomainError::from_wire(body).into()),
                // A bare 404 on the city route means the same thing.
                Err(_) => Ok(None),
            };
        }

        let response = check_response(response).await?;
        Ok(Some(response.json::<City>().await?))
    }

    pub async fn list_cities(&self, user_id: i64) -> Result<Vec<City>, ClientError> {
        tracing::debug!(user_id, "listing cities");

        let url = self.handle.url(&format!("api/v1/users/{user_id}/cities"))?;
        let response = self.handle.http().get(url).send().await?;
        let response = check_response(response).await?;
        let body: ListCitiesResponse = response.json().await?;
        Ok(body.cities)
    }

    pub async fn add_city(
        &self,
        user_id: i64,
        name: &str,
        lat: f64,
        lon: f64,
    ) -> Result<City, ClientError> {
        ensure_non_empty("city name", name)?;
        ensure_finite_coords(lat, lon)?;
        tracing::debug!(user_id, name, lat, lon, "adding city");

        let url = self.handle.url(&format!("api/v1/users/{user_id}/cities"))?;
        let response = self
            .handle
            .http()
            .post(url)
            .json(&AddCityRequest { name, lat, lon })
            .send()
            .await?;
        let response = check_response(response).await?;
        Ok(response.json().await?)
    }

    /// Every coordinate known to the Users service, across all users.
    /// The refresh worker fans out over this list.
    pub async fn list_all_coordinates(&self) -> Result<Vec<OwnedCoordinate>, ClientError> {
        let url = self.handle.url("api/v1/coordinates")?;
        let response = self.handle.http().get(url).send().await?;
        let response = check_response(response).await?;
        let body: ListCoordinatesResponse = response.json().await?;
        tracing::debug!(count = body.coords.len(), "listed coordinates");
        Ok(body.coords)
    }

    pub async fn get_user_by_id(&self, user_id: i64) -> Result<User, ClientError> {
        let url = self.handle.url(&format!("api/v1/users/{user_id}"))?;
        let response = self.handle.http().get(url).send().await?;
        let response = check_response(response).await?;
        Ok(response.json().await?)
    }

    pub async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<User, ClientError> {
        ensure_non_empty("username", username)?;
        ensure_non_empty("password hash", password_hash)?;
        tracing::debug!(username, "creating user");

        let url = self.handle.url("api/v1/users")?;
        let response = self
            .handle
            .http()
            .post(url)
            .json(&CreateUserRequest {
                username,
                password_hash,
            })
            .send()
            .await?;
        let response = check_response(response).await?;
        Ok(response.json().await?)
    }

    pub async fn get_or_create_user_by_telegram_id(
        &self,
        telegram_id: &str,
        username: &str,
        locale: &str,
    ) -> Result<User, ClientError> {
        ensure_non_empty("telegram id", telegram_id)?;
        let locale = if locale.is_empty() { "en" } else { locale };
        tracing::debug!(telegram_id, locale, "resolving telegram user");

        let url = self.handle.url("api/v1/users/telegram")?;
        let response = self
            .handle
            .http()
            .post(url)
            .json(&TelegramUserRequest {
                telegram_id,
                username,
                locale,
            })
            .send()
            .await?;
        let response = check_response(response).await?;
        Ok(response.json().await?)
    }
}
