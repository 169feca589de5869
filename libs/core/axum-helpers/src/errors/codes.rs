//! Type-safe error codes for API responses.
//!
//! Each code has a SCREAMING_SNAKE_CASE identifier for clients, an integer for
//! logs and dashboards, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request payload failed validation
    ValidationError,

    /// Identifier in the query string is not a valid number
    InvalidId,

    /// Request body could not be read as JSON of the expected shape
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// An unexpected internal server error occurred
    InternalError,

    /// Query string could not be parsed
    InvalidQuery,

    // Storage errors (2000-2999)
    /// Backing store unreachable or timed out
    ConnectionFailure,

    /// Backing store rejected a value (constraint or type violation)
    ConstraintViolation,

    /// A keyed operation matched more than one row
    MultipleMatch,
}

impl ErrorCode {
    /// Identifier clients can match on.
    ///
    /// ```rust
    /// use axum_helpers::errors::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::MultipleMatch.as_str(), "MULTIPLE_MATCH");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::ConnectionFailure => "CONNECTION_FAILURE",
            Self::ConstraintViolation => "CONSTRAINT_VIOLATION",
            Self::MultipleMatch => "MULTIPLE_MATCH",
        }
    }

    /// Integer code for logs and metrics.
    ///
    /// - 1000-1999: client/request errors
    /// - 2000-2999: storage errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::InvalidQuery => 1006,
            Self::ConnectionFailure => 2001,
            Self::ConstraintViolation => 2002,
            Self::MultipleMatch => 2003,
        }
    }

    /// Default human-readable message.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidId => "Identifier must be an integer",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::InternalError => "An internal server error occurred",
            Self::InvalidQuery => "Failed to parse query string",
            Self::ConnectionFailure => "Storage backend is unavailable",
            Self::ConstraintViolation => "Storage backend rejected the value",
            Self::MultipleMatch => "Identifier matched more than one record",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
