//! Final error mapping for the caller-facing transport.
//!
//! Whatever adapter fronts the gateway (REST router, bot transport)
//! receives a [`BoundaryError`] and emits its status/message pair. The
//! mapping is total over every declared code; anything unclassified
//! degrades to an internal status with a generic localized message —
//! internal detail is logged here, never returned.

use reqwest::StatusCode;
use wearcast_clients::ClientError;
use wearcast_core::{ErrorCode, RpcStatus};

/// A failed chain, ready for any transport to serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryError {
    pub code: ErrorCode,
    pub http: StatusCode,
    pub rpc: RpcStatus,
    pub message: String,
}

/// Map a chain failure to its caller-facing form.
///
/// Domain errors keep the code assigned at their origin. Transport-level
/// unavailability (including load shedding) surfaces as
/// `SERVICE_UNAVAILABLE`; everything else — deadline expiry, decode
/// failures, programming errors — degrades to the internal default.
pub fn map_error(err: &ClientError, locale: &str) -> BoundaryError {
    let code = match err {
        ClientError::Domain(domain) => domain.code,
        ClientError::Unavailable(_) | ClientError::ResourceExhausted(_) => {
            ErrorCode::ServiceUnavailable
        }
        _ => ErrorCode::Unknown,
    };

    match code {
        ErrorCode::Unknown => tracing::error!(error = %err, "chain failed with internal error"),
        _ => tracing::warn!(error = %err, code = %code, "chain failed"),
    }

    BoundaryError {
        code,
        http: code.http_status(),
        rpc: code.rpc_status(),
        message: code.localized_message(locale).to_string(),
    }
}
