//! Forecast refresh worker entry point (composition root).

use anyhow::{Context, Result};
use wearcast_clients::ConnectionPool;
use wearcast_core::SchedulerSettings;
use wearcast_scheduler::{ForecastRefreshScheduler, RefreshForecastsJob, RetryPolicy};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = SchedulerSettings::from_env().context("failed to load scheduler settings")?;
    wearcast_core::init_tracing(&settings.log_level)?;

    tracing::info!(
        users_addr = %settings.users_addr,
        weather_addr = %settings.weather_addr,
        interval_secs = settings.interval_seconds,
        max_retries = settings.max_retries,
        "starting forecast refresh worker"
    );

    let pool = ConnectionPool::new();
    let job = RefreshForecastsJob::new(
        pool,
        settings.users_addr.clone(),
        settings.weather_addr.clone(),
    );
    let retry = RetryPolicy::new(settings.max_retries, settings.retry_backoff());
    let scheduler =
        ForecastRefreshScheduler::new(job, retry, settings.interval(), settings.startup_delay());

    scheduler.run().await;
    Ok(())
}
