pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every error the API returns has this shape:
/// - `code`: Integer error code for logging/monitoring (e.g., 2001)
/// - `error`: Machine-readable error identifier (e.g., "CONNECTION_FAILURE")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details (e.g., validation errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Blog with id 42 not found"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Extractor rejections map to fixed statuses. Domain crates that decide
/// the status themselves go through [`AppError::Domain`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query string error: {0}")]
    QueryRejection(#[from] QueryRejection),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// A failure whose status and code were chosen by the caller.
    #[error("{message}")]
    Domain {
        status: StatusCode,
        code: ErrorCode,
        message: String,
        details: Option<serde_json::Value>,
    },
}

impl AppError {
    pub fn domain(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Domain {
            status,
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach structured details. No-op for variants other than `Domain`.
    pub fn with_details(self, details: serde_json::Value) -> Self {
        match self {
            Self::Domain {
                status,
                code,
                message,
                ..
            } => Self::Domain {
                status,
                code,
                message,
                details: Some(details),
            },
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::JsonExtractorRejection(e) => e.status(),
            Self::QueryRejection(e) => e.status(),
            Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::Domain { status, .. } => *status,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::JsonExtractorRejection(_) => ErrorCode::JsonExtraction,
            Self::QueryRejection(_) => ErrorCode::InvalidQuery,
            Self::InvalidId(_) => ErrorCode::InvalidId,
            Self::Domain { code, .. } => *code,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        if status.is_server_error() {
            tracing::error!(error_code = code.code(), error = %self, "Request failed");
        } else {
            tracing::info!(error_code = code.code(), error = %self, "Request rejected");
        }

        let (message, details) = match self {
            AppError::JsonExtractorRejection(e) => (e.body_text(), None),
            AppError::QueryRejection(e) => (e.body_text(), None),
            AppError::InvalidId(raw) => (format!("Invalid id '{raw}': must be an integer"), None),
            AppError::Domain {
                message, details, ..
            } => (message, details),
        };

        error_response_with_details(status, code, message, details)
    }
}

/// Build an error response with the standard envelope.
///
/// ```rust
/// use axum::http::StatusCode;
/// use axum_helpers::errors::{ErrorCode, error_response};
///
/// let response = error_response(StatusCode::NOT_FOUND, ErrorCode::NotFound, "missing");
/// assert_eq!(response.status(), StatusCode::NOT_FOUND);
/// ```
pub fn error_response(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Response {
    error_response_with_details(status, code, message.into(), None)
}

fn error_response_with_details(
    status: StatusCode,
    code: ErrorCode,
    message: String,
    details: Option<serde_json::Value>,
) -> Response {
    let body = Json(ErrorResponse {
        code: code.code(),
        error: code.as_str().to_string(),
        message,
        details,
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_domain_error_uses_caller_status_and_code() {
        let err = AppError::domain(
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::ConnectionFailure,
            "database unreachable",
        );

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_of(response).await;
        assert_eq!(body.code, 2001);
        assert_eq!(body.error, "CONNECTION_FAILURE");
        assert_eq!(body.message, "database unreachable");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_domain_error_carries_details() {
        let err = AppError::domain(
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationError,
            "Request validation failed",
        )
        .with_details(serde_json::json!({"title": ["blank"]}));

        let body = body_of(err.into_response()).await;
        assert_eq!(body.error, "VALIDATION_ERROR");
        assert_eq!(body.details, Some(serde_json::json!({"title": ["blank"]})));
    }

    #[tokio::test]
    async fn test_invalid_id_is_bad_request() {
        let response = AppError::InvalidId("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body.error, "INVALID_ID");
        assert!(body.message.contains("abc"));
    }

    #[test]
    fn test_with_details_ignores_fixed_variants() {
        let err = AppError::InvalidId("x".into()).with_details(serde_json::json!(1));
        assert!(matches!(err, AppError::InvalidId(_)));
    }
}
