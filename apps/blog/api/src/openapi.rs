use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Blog API",
        version = "0.1.0",
        description = "CRUD API behind the blog admin panel"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/blog", api = domain_blogs::ApiDoc)
    )
)]
pub struct ApiDoc;
