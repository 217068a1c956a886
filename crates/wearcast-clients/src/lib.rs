//! Typed clients for the downstream wearcast services, built on a
//! per-address connection pool.
//!
//! The pool hands out one reusable [`ClientHandle`] per address; clients
//! are stateless wrappers constructed per call from a handle. Transport
//! failures are classified once, here, into [`ClientError`]; domain error
//! codes from remote services pass through verbatim.

pub mod advice;
pub mod error;
pub mod pool;
pub mod users;
pub mod weather;

pub use advice::AdviceClient;
pub use error::ClientError;
pub use pool::{ClientHandle, ConnectionPool};
pub use users::UsersClient;
pub use weather::WeatherClient;
