use axum::Router;

pub mod blogs;
pub mod health;

/// API routes without the `/api` prefix; `create_router` adds it.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/blog", blogs::router(state))
}

/// Router with the `/ready` endpoint, state applied.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
