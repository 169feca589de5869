//! Custom extractors for Axum handlers.
//!
//! Both reject with the structured [`ErrorResponse`](crate::errors::ErrorResponse)
//! envelope instead of axum's plain-text bodies.

pub mod id_query;
pub mod json_body;

pub use id_query::IdQuery;
pub use json_body::JsonBody;
