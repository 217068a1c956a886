//! Error taxonomy shared by every service boundary.
//!
//! A failure is classified exactly once, at its origin, into an [`ErrorCode`];
//! every hop after that re-raises it without changing the code, until a
//! transport boundary performs the final code → status mapping.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable machine-readable error codes.
///
/// The wire strings (`CITY_NOT_FOUND`, ...) are part of the cross-service
/// contract and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationError,
    InvalidCredentials,
    UserNotFound,
    UserAlreadyExists,
    CityNotFound,
    CityAlreadyExists,
    ServiceUnavailable,
    AdviceProviderNotConfigured,
    Unknown,
}

/// Transport-agnostic status classes used by the RPC-style boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcStatus {
    InvalidArgument,
    Unauthenticated,
    NotFound,
    AlreadyExists,
    FailedPrecondition,
    Unavailable,
    Internal,
    Unknown,
}

impl ErrorCode {
    /// Every declared code, for exhaustive mapping tests.
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::ValidationError,
        ErrorCode::InvalidCredentials,
        ErrorCode::UserNotFound,
        ErrorCode::UserAlreadyExists,
        ErrorCode::CityNotFound,
        ErrorCode::CityAlreadyExists,
        ErrorCode::ServiceUnavailable,
        ErrorCode::AdviceProviderNotConfigured,
        ErrorCode::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::UserAlreadyExists => "USER_ALREADY_EXISTS",
            ErrorCode::CityNotFound => "CITY_NOT_FOUND",
            ErrorCode::CityAlreadyExists => "CITY_ALREADY_EXISTS",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorCode::AdviceProviderNotConfigured => "ADVICE_PROVIDER_NOT_CONFIGURED",
            ErrorCode::Unknown => "UNKNOWN",
        }
    }

    /// Parse a wire code. Total: anything undeclared becomes `Unknown`.
    pub fn parse(code: &str) -> Self {
        match code {
            "VALIDATION_ERROR" => ErrorCode::ValidationError,
            "INVALID_CREDENTIALS" => ErrorCode::InvalidCredentials,
            "USER_NOT_FOUND" => ErrorCode::UserNotFound,
            "USER_ALREADY_EXISTS" => ErrorCode::UserAlreadyExists,
            "CITY_NOT_FOUND" => ErrorCode::CityNotFound,
            "CITY_ALREADY_EXISTS" => ErrorCode::CityAlreadyExists,
            "SERVICE_UNAVAILABLE" => ErrorCode::ServiceUnavailable,
            "ADVICE_PROVIDER_NOT_CONFIGURED" => ErrorCode::AdviceProviderNotConfigured,
            _ => ErrorCode::Unknown,
        }
    }

    /// HTTP boundary mapping. Exhaustive; undeclared codes fall back to 500
    /// via `Unknown`, never a success status.
    pub fn http_status(&self) -> reqwest::StatusCode {
        use reqwest::StatusCode;
        match self {
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ErrorCode::UserNotFound | ErrorCode::CityNotFound => StatusCode::NOT_FOUND,
            ErrorCode::UserAlreadyExists | ErrorCode::CityAlreadyExists => StatusCode::CONFLICT,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::AdviceProviderNotConfigured => StatusCode::PRECONDITION_FAILED,
            ErrorCode::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// RPC-style boundary mapping.
    pub fn rpc_status(&self) -> RpcStatus {
        match self {
            ErrorCode::ValidationError => RpcStatus::InvalidArgument,
            ErrorCode::InvalidCredentials => RpcStatus::Unauthenticated,
            ErrorCode::UserNotFound | ErrorCode::CityNotFound => RpcStatus::NotFound,
            ErrorCode::UserAlreadyExists | ErrorCode::CityAlreadyExists => {
                RpcStatus::AlreadyExists
            }
            ErrorCode::ServiceUnavailable => RpcStatus::Unavailable,
            ErrorCode::AdviceProviderNotConfigured => RpcStatus::FailedPrecondition,
            ErrorCode::Unknown => RpcStatus::Unknown,
        }
    }

    /// Human message for a code. `en` and `ru` are supported; anything else
    /// falls back to `en`.
    pub fn localized_message(&self, locale: &str) -> &'static str {
        let ru = locale == "ru";
        match self {
            ErrorCode::ValidationError => {
                if ru {
                    "Ошибка проверки"
                } else {
                    "Validation error"
                }
            }
            ErrorCode::InvalidCredentials => {
                if ru {
                    "Неверные данные"
                } else {
                    "Invalid credentials"
                }
            }
            ErrorCode::UserNotFound => {
                if ru {
                    "Пользователь не найден"
                } else {
                    "User not found"
                }
            }
            ErrorCode::UserAlreadyExists => {
                if ru {
                    "Пользователь уже существует"
                } else {
                    "User already exists"
                }
            }
            ErrorCode::CityNotFound => {
                if ru {
                    "Город не найден"
                } else {
                    "City not found"
                }
            }
            ErrorCode::CityAlreadyExists => {
                if ru {
                    "Город уже добавлен"
                } else {
                    "City already exists"
                }
            }
            ErrorCode::ServiceUnavailable => {
                if ru {
                    "Сервис недоступен"
                } else {
                    "Service unavailable"
                }
            }
            ErrorCode::AdviceProviderNotConfigured => {
                if ru {
                    "Провайдер советов не настроен"
                } else {
                    "Advice provider not configured"
                }
            }
            ErrorCode::Unknown => {
                if ru {
                    "Внутренняя ошибка"
                } else {
                    "Internal error"
                }
            }
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged domain failure: a stable code plus a human message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn city_not_found() -> Self {
        Self::new(
            ErrorCode::CityNotFound,
            ErrorCode::CityNotFound.localized_message("en"),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// Rebuild a domain error from a wire body, preserving the code verbatim.
    /// An empty message falls back to the code's default English message.
    pub fn from_wire(body: ErrorBody) -> Self {
        let code = ErrorCode::parse(&body.code);
        let message = if body.message.is_empty() {
            code.localized_message("en").to_string()
        } else {
            body.message
        };
        Self { code, message }
    }
}

/// JSON error payload carried by non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl From<&DomainError> for ErrorBody {
    fn from(err: &DomainError) -> Self {
        Self {
            code: err.code.as_str().to_string(),
            message: err.message.clone(),
        }
    }
}
