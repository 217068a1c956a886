//! The periodic loop around the refresh job.

use std::time::Duration;

use crate::job::RefreshForecastsJob;
use crate::retry::RetryPolicy;
use wearcast_clients::ClientError;

/// Runs the refresh job forever: optional startup delay, then
/// retry-wrapped cycles separated by a fixed sleep. A cycle that fails
/// even after retries is logged and swallowed — the loop must outlive
/// any single failure and only stops with the process.
#[derive(Debug)]
pub struct ForecastRefreshScheduler {
    job: RefreshForecastsJob,
    retry: RetryPolicy,
    interval: Duration,
    startup_delay: Duration,
}

impl ForecastRefreshScheduler {
    pub fn new(
        job: RefreshForecastsJob,
        retry: RetryPolicy,
        interval: Duration,
        startup_delay: Duration,
    ) -> Self {
        Self {
            job,
            retry,
            interval,
            startup_delay,
        }
    }

    /// One retry-wrapped cycle.
    pub async fn run_cycle(&self) -> Result<(), ClientError> {
        self.retry.execute_with_retry(|| self.job.run()).await
    }

    pub async fn run(&self) {
        if !self.startup_delay.is_zero() {
            tracing::info!(
                delay_secs = self.startup_delay.as_secs_f64(),
                "waiting for backends before first refresh"
            );
            tokio::time::sleep(self.startup_delay).await;
        }

        loop {
            if let Err(err) = self.run_cycle().await {
                tracing::error!(error = %err, "refresh cycle failed");
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Detach the loop onto the runtime.
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }
}
