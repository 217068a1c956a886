//! Transport-level error classification.
//!
//! Every failure that crosses a client call becomes a [`ClientError`]
//! exactly once, at this layer. Domain errors decoded from a remote's
//! error body keep their code; everything else is classified by the
//! transport condition that produced it.

use reqwest::StatusCode;
use thiserror::Error;
use wearcast_core::{DomainError, ErrorBody};

#[derive(Debug, Error)]
pub enum ClientError {
    /// A structured failure reported by the remote service. The code is
    /// preserved verbatim from the wire.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The peer could not be reached or reported itself unavailable
    /// (connect failure, 502/503/504).
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// The peer is shedding load (429).
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),

    /// The call's deadline elapsed before a response arrived.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// The peer answered with something this client cannot decode.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// A handle could not be constructed for the address.
    #[error("invalid address {addr}: {reason}")]
    InvalidAddress { addr: String, reason: String },

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ClientError {
    /// Whether the failure is transient enough for an idempotent retry.
    /// Only transport-level unavailability and load shedding qualify;
    /// domain errors and deadline expiry are always fatal.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClientError::Unavailable(_) | ClientError::ResourceExhausted(_)
        )
    }

    /// The domain code carried by this failure, if it is a domain error.
    pub fn domain_code(&self) -> Option<wearcast_core::ErrorCode> {
        match self {
            ClientError::Domain(err) => Some(err.code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::DeadlineExceeded
        } else if err.is_connect() {
            ClientError::Unavailable(err.to_string())
        } else if err.is_decode() {
            ClientError::InvalidResponse(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

/// Pass a successful response through; classify anything else.
///
/// Transport conditions (429, 502/503/504) are recognized before the body
/// is consulted, so a load-shedding proxy without a JSON body still
/// classifies correctly. Other failure statuses are expected to carry an
/// [`ErrorBody`]; when they do, the domain code passes through verbatim.
pub(crate) async fn check_response(
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ClientError::ResourceExhausted(status.to_string()));
    }
    if status == StatusCode::BAD_GATEWAY
        || status == StatusCode::SERVICE_UNAVAILABLE
        || status == StatusCode::GATEWAY_TIMEOUT
    {
        return Err(ClientError::Unavailable(status.to_string()));
    }

    let text = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => Err(DomainError::from_wire(body).into()),
        Err(_) => Err(ClientError::Transport(format!(
            "unexpected status {status}: {text}"
        ))),
    }
}

pub(crate) fn ensure_non_empty(field: &str, value: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} must not be empty")).into());
    }
    Ok(())
}

pub(crate) fn ensure_finite_coords(lat: f64, lon: f64) -> Result<(), ClientError> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(DomainError::validation(format!(
            "coordinates must be finite, got lat={lat} lon={lon}"
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wearcast_core::ErrorCode;

    #[test]
    fn test_retryable_classification() {
        assert!(ClientError::Unavailable("503".into()).is_retryable());
        assert!(ClientError::ResourceExhausted("429".into()).is_retryable());

        assert!(!ClientError::DeadlineExceeded.is_retryable());
        assert!(!ClientError::Transport("boom".into()).is_retryable());
        assert!(!ClientError::InvalidResponse("bad json".into()).is_retryable());
        assert!(!ClientError::Domain(DomainError::city_not_found()).is_retryable());
    }

    #[test]
    fn test_domain_code_passthrough() {
        let err = ClientError::Domain(DomainError::city_not_found());
        assert_eq!(err.domain_code(), Some(ErrorCode::CityNotFound));
        assert_eq!(ClientError::DeadlineExceeded.domain_code(), None);
    }

    #[test]
    fn test_validation_helpers() {
        assert!(ensure_non_empty("city name", "Moscow").is_ok());
        let err = ensure_non_empty("city name", "  ").unwrap_err();
        assert_eq!(err.domain_code(), Some(ErrorCode::ValidationError));

        assert!(ensure_finite_coords(55.75, 37.62).is_ok());
        let err = ensure_finite_coords(f64::NAN, 0.0).unwrap_err();
        assert_eq!(err.domain_code(), Some(ErrorCode::ValidationError));
        assert!(ensure_finite_coords(0.0, f64::INFINITY).is_err());
    }
}
