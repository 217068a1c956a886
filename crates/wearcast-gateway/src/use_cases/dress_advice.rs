//! Dress advice for a named city: the forecast chain plus one more hop
//! sending the obtained reading to the Advice service.

use wearcast_clients::{AdviceClient, ClientError, ConnectionPool};

use crate::use_cases::forecast::GetForecastForUserCity;

/// Three-hop chain ending in localized "what to wear" text. Shares the
/// forecast chain, so an unresolved city short-circuits before Weather
/// and Advice are ever called.
#[derive(Debug, Clone)]
pub struct GetDressAdviceForUserCity {
    forecast: GetForecastForUserCity,
    pool: ConnectionPool,
    advice_addr: String,
}

impl GetDressAdviceForUserCity {
    pub fn new(
        pool: ConnectionPool,
        users_addr: impl Into<String>,
        weather_addr: impl Into<String>,
        advice_addr: impl Into<String>,
    ) -> Self {
        Self {
            forecast: GetForecastForUserCity::new(pool.clone(), users_addr, weather_addr),
            pool,
            advice_addr: advice_addr.into(),
        }
    }

    pub async fn run(
        &self,
        user_id: i64,
        city_name: &str,
        date: &str,
        time: &str,
        locale: &str,
    ) -> Result<String, ClientError> {
        tracing::info!(user_id, city_name, locale, "GetDressAdviceForUserCity");

        let reading = self.forecast.run(user_id, city_name, date, time).await?;

        let advice = AdviceClient::new(self.pool.get(&self.advice_addr)?);
        advice.get_advice(&reading, locale).await
    }
}
