//! Client for the Dress Advice service: turns a weather reading into a
//! localized "what to wear" text.

use serde::{Deserialize, Serialize};
use wearcast_core::WeatherReading;

use crate::error::{check_response, ClientError};
use crate::pool::ClientHandle;

#[derive(Debug, Serialize)]
struct GetAdviceRequest<'a> {
    weather_data: &'a WeatherReading,
    locale: &'a str,
}

#[derive(Debug, Deserialize)]
struct AdviceResponse {
    advice_text: String,
}

/// Typed wrapper over a pooled connection to the Advice service.
///
/// Fails with `ADVICE_PROVIDER_NOT_CONFIGURED` (passed through from the
/// remote) when the service has no language-model backend configured.
#[derive(Debug, Clone)]
pub struct AdviceClient {
    handle: ClientHandle,
}

impl AdviceClient {
    pub fn new(handle: ClientHandle) -> Self {
        Self { handle }
    }

    pub async fn get_advice(
        &self,
        weather: &WeatherReading,
        locale: &str,
    ) -> Result<String, ClientError> {
        let locale = if locale.is_empty() { "en" } else { locale };
        tracing::debug!(locale, "requesting dress advice");

        let url = self.handle.url("api/v1/advice")?;
        let response = self
            .handle
            .http()
            .post(url)
            .json(&GetAdviceRequest {
                weather_data: weather,
                locale,
            })
            .send()
            .await?;
        let response = check_response(response).await?;
        let body: AdviceResponse = response.json().await?;
        Ok(body.advice_text)
    }
}
