//! Gateway orchestration: multi-hop use cases over the downstream
//! services, plus the error mapping the caller-facing transport applies.
//!
//! Each use case is a linear chain of dependent remote calls — a later
//! step consumes the literal output of the one before it, so steps run
//! strictly in order and the chain aborts on the first unrecoverable
//! failure. Routing (REST, bot transports) lives outside this crate; it
//! receives either the composed value or a [`boundary::BoundaryError`].

pub mod boundary;
pub mod use_cases;

pub use boundary::{map_error, BoundaryError};
pub use use_cases::cities::{AddCity, GetCity, ListUserCities};
pub use use_cases::dress_advice::GetDressAdviceForUserCity;
pub use use_cases::forecast::GetForecastForUserCity;
pub use use_cases::users::{CreateUser, GetOrCreateUserByTelegramId, GetUserById};
