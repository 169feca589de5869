use axum::http::StatusCode;
use axum_helpers::{AppError, ErrorCode};
use sea_orm::{DbErr, RuntimeErr, SqlxError};
use strum::{Display, EnumString};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Blog with id {0} not found")]
    NotFound(i64),

    #[error("Backend unavailable: {0}")]
    ConnectionFailure(String),

    #[error("Backend rejected the value: {0}")]
    ConstraintViolation(String),

    #[error("Blog id {id} matched {count} rows")]
    MultipleMatch { id: i64, count: usize },

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type BlogResult<T> = Result<T, BlogError>;

impl BlogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BlogError::NotFound(_) => ErrorCode::NotFound,
            BlogError::ConnectionFailure(_) => ErrorCode::ConnectionFailure,
            BlogError::ConstraintViolation(_) => ErrorCode::ConstraintViolation,
            BlogError::MultipleMatch { .. } => ErrorCode::MultipleMatch,
            BlogError::Validation(_) => ErrorCode::ValidationError,
            BlogError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Status when each kind is mapped on its own merits.
    pub fn classified_status(&self) -> StatusCode {
        match self {
            BlogError::NotFound(_) => StatusCode::NOT_FOUND,
            BlogError::Validation(_) => StatusCode::BAD_REQUEST,
            BlogError::ConstraintViolation(_) => StatusCode::CONFLICT,
            BlogError::ConnectionFailure(_) => StatusCode::SERVICE_UNAVAILABLE,
            BlogError::MultipleMatch { .. } | BlogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Render with the given status. The body always carries the error kind.
    pub fn into_app_error(self, status: StatusCode) -> AppError {
        let code = self.code();
        match self {
            BlogError::Validation(errors) => {
                let details = serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null);
                AppError::domain(status, code, code.default_message()).with_details(details)
            }
            other => AppError::domain(status, code, other.to_string()),
        }
    }
}

/// Maps sea-orm failures onto the storage taxonomy.
///
/// Postgres SQLSTATE classes 22 (data exception) and 23 (integrity constraint)
/// are constraint violations; I/O and pool failures are connection failures.
impl From<DbErr> for BlogError {
    fn from(err: DbErr) -> Self {
        if let Some(sql_err) = err.sql_err() {
            return BlogError::ConstraintViolation(sql_err.to_string());
        }

        match &err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                BlogError::ConnectionFailure(err.to_string())
            }
            DbErr::Type(_) => BlogError::ConstraintViolation(err.to_string()),
            DbErr::Exec(RuntimeErr::SqlxError(sqlx_err))
            | DbErr::Query(RuntimeErr::SqlxError(sqlx_err)) => classify_sqlx(sqlx_err, &err),
            _ => BlogError::Internal(err.to_string()),
        }
    }
}

fn classify_sqlx(sqlx_err: &SqlxError, err: &DbErr) -> BlogError {
    match sqlx_err {
        SqlxError::Io(_) | SqlxError::Tls(_) | SqlxError::PoolTimedOut | SqlxError::PoolClosed => {
            BlogError::ConnectionFailure(err.to_string())
        }
        SqlxError::Database(db_err)
            if db_err
                .code()
                .is_some_and(|state| state.starts_with("22") || state.starts_with("23")) =>
        {
            BlogError::ConstraintViolation(err.to_string())
        }
        _ => BlogError::Internal(err.to_string()),
    }
}

/// Which side of the CRUD surface a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
}

/// How failures are turned into HTTP statuses.
///
/// `Legacy` keeps the long-standing contract: every read failure is a 500,
/// every write failure a 400. `Classified` maps each error kind to its own
/// status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StatusPolicy {
    #[default]
    Legacy,
    Classified,
}

impl StatusPolicy {
    pub fn status_for(&self, operation: Operation, err: &BlogError) -> StatusCode {
        match self {
            StatusPolicy::Legacy => match operation {
                Operation::Read => StatusCode::INTERNAL_SERVER_ERROR,
                Operation::Write => StatusCode::BAD_REQUEST,
            },
            StatusPolicy::Classified => err.classified_status(),
        }
    }

    pub fn reject(&self, operation: Operation, err: BlogError) -> AppError {
        let status = self.status_for(operation, &err);
        err.into_app_error(status)
    }
}
