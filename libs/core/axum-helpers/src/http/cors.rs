use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";

/// Creates a CORS layer for the given origins.
///
/// - Methods: GET, POST, PATCH, DELETE, OPTIONS
/// - Headers: Content-Type, Accept
/// - Credentials: allowed
/// - Max age: 1 hour
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Builds the CORS layer from the comma-separated `CORS_ALLOWED_ORIGIN` variable.
///
/// # Errors
/// Fails when the variable is unset, empty, or holds a value that is not a
/// valid header value.
///
/// ```ignore
/// // CORS_ALLOWED_ORIGIN=http://localhost:3000,https://blog.example.com
/// let cors = cors_layer_from_env()?;
/// ```
pub fn cors_layer_from_env() -> io::Result<CorsLayer> {
    let origins_str = std::env::var(CORS_ALLOWED_ORIGIN).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN environment variable is required. Example: CORS_ALLOWED_ORIGIN=http://localhost:3000",
        )
    })?;

    let origins = parse_origins(&origins_str)?;
    info!(origins = %origins_str, "CORS configured");

    Ok(create_cors_layer(origins))
}

fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {e}"),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    Ok(origins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins("http://localhost:3000, https://blog.example.com ,").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "https://blog.example.com");
    }

    #[test]
    fn test_parse_origins_rejects_empty() {
        let err = parse_origins(" , ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_parse_origins_rejects_invalid_header_value() {
        assert!(parse_origins("http://bad\norigin").is_err());
    }

    #[test]
    fn test_cors_layer_from_env_requires_variable() {
        temp_env::with_var_unset(CORS_ALLOWED_ORIGIN, || {
            assert!(cors_layer_from_env().is_err());
        });
    }

    #[test]
    fn test_cors_layer_from_env_accepts_origin_list() {
        temp_env::with_var(CORS_ALLOWED_ORIGIN, Some("http://localhost:3000"), || {
            assert!(cors_layer_from_env().is_ok());
        });
    }
}
