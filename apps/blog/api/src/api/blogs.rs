use axum::Router;
use domain_blogs::{BlogService, PgBlogRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository =
        PgBlogRepository::with_query_timeout(state.db.clone(), state.config.database.query_timeout());
    let service = BlogService::new(repository);
    handlers::router(service, state.config.status_policy)
}
