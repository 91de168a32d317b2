//! Error types for the shared crate
//!
//! Standardized error codes carried in the API envelope, plus the typed
//! error a client derives from a non-success envelope.

use http::StatusCode;
use thiserror::Error;

/// Standard API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Success
    Success,
    /// Validation error (400)
    Validation,
    /// Authentication required (401)
    Unauthorized,
    /// Invalid token (401)
    InvalidToken,
    /// Token expired (401)
    TokenExpired,
    /// Permission denied (403)
    Forbidden,
    /// Resource not found (404)
    NotFound,
    /// Resource already exists (409)
    Conflict,
    /// Internal server error (500)
    Internal,
}

impl ApiErrorCode {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::TokenExpired => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the default message for this error
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Validation => "Validation failed",
            Self::Unauthorized => "Authentication required",
            Self::InvalidToken => "Invalid token",
            Self::TokenExpired => "Token expired",
            Self::Forbidden => "Permission denied",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Resource already exists",
            Self::Internal => "Internal server error",
        }
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success => "E0000",
            Self::Validation => "E0002",
            Self::Unauthorized => "E3001",
            Self::InvalidToken => "E3002",
            Self::TokenExpired => "E3003",
            Self::Forbidden => "E3004",
            Self::NotFound => "E4004",
            Self::Conflict => "E4009",
            Self::Internal => "E5000",
        }
    }

    /// Parse an error code string, `None` for unknown codes
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "E0000" => Some(Self::Success),
            "E0002" => Some(Self::Validation),
            "E3001" => Some(Self::Unauthorized),
            "E3002" => Some(Self::InvalidToken),
            "E3003" => Some(Self::TokenExpired),
            "E3004" => Some(Self::Forbidden),
            "E4004" => Some(Self::NotFound),
            "E4009" => Some(Self::Conflict),
            "E5000" => Some(Self::Internal),
            _ => None,
        }
    }
}

/// Typed error derived from a non-success API envelope
#[derive(Debug, Clone, Error)]
#[error("API error {code}: {message}")]
pub struct ApiError {
    /// Raw error code string from the envelope
    pub code: String,
    /// Human-readable message from the envelope
    pub message: String,
}

impl ApiError {
    /// Create an error from envelope fields
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The recognized error code, if any
    pub fn error_code(&self) -> Option<ApiErrorCode> {
        ApiErrorCode::from_code(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in [
            ApiErrorCode::Success,
            ApiErrorCode::Validation,
            ApiErrorCode::Unauthorized,
            ApiErrorCode::InvalidToken,
            ApiErrorCode::TokenExpired,
            ApiErrorCode::Forbidden,
            ApiErrorCode::NotFound,
            ApiErrorCode::Conflict,
            ApiErrorCode::Internal,
        ] {
            assert_eq!(ApiErrorCode::from_code(code.code()), Some(code));
        }
        assert_eq!(ApiErrorCode::from_code("E9999"), None);
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::new("E3004", "Permission denied: permissions.manage");
        assert_eq!(err.error_code(), Some(ApiErrorCode::Forbidden));
        assert_eq!(
            err.to_string(),
            "API error E3004: Permission denied: permissions.manage"
        );
    }
}
