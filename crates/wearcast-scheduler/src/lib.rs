//! Forecast refresh worker: a periodic job that asks the Users service
//! for every known coordinate and fans a refresh out to the Weather
//! service, wrapped in a bounded retry policy. A failed cycle is logged
//! and swallowed; the loop itself only stops with the process.

pub mod job;
pub mod retry;
pub mod scheduler;

pub use job::RefreshForecastsJob;
pub use retry::RetryPolicy;
pub use scheduler::ForecastRefreshScheduler;
