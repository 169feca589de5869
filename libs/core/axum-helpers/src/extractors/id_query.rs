//! Optional `?id=` query parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use std::str::FromStr;

#[derive(Deserialize)]
struct RawId {
    id: Option<String>,
}

/// Extracts an optional `id` query parameter and parses it as `T`.
///
/// A missing or empty `id` yields `IdQuery(None)`. A value that does not
/// parse is rejected with `400 INVALID_ID`.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::IdQuery;
///
/// async fn get(IdQuery(id): IdQuery<i64>) -> String {
///     match id {
///         Some(id) => format!("one: {id}"),
///         None => "all".to_string(),
///     }
/// }
/// ```
pub struct IdQuery<T>(pub Option<T>);

impl<T, S> FromRequestParts<S> for IdQuery<T>
where
    T: FromStr,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawId>::try_from_uri(&parts.uri)?;

        match raw.id.as_deref().map(str::trim) {
            None | Some("") => Ok(IdQuery(None)),
            Some(value) => value
                .parse::<T>()
                .map(|id| IdQuery(Some(id)))
                .map_err(|_| AppError::InvalidId(value.to_string())),
        }
    }
}
