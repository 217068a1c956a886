//! Per-endpoint orchestration chains.

pub mod cities;
pub mod dress_advice;
pub mod forecast;
pub mod users;
