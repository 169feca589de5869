use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, IdQuery, JsonBody,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse, ServiceUnavailableResponse,
    },
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::{Operation, StatusPolicy};
use crate::models::{Blog, BlogId, DeletedBlog, NewBlog, UpdateBlog};
use crate::repository::BlogRepository;
use crate::service::BlogService;

pub const BLOG_TAG: &str = "blog";

/// OpenAPI documentation for the Blog API
#[derive(OpenApi)]
#[openapi(
    paths(get_blogs, create_blog, update_blog, delete_blog),
    components(
        schemas(Blog, NewBlog, UpdateBlog, BlogId, DeletedBlog, GetBlogsResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            ConflictResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = BLOG_TAG, description = "Blog post management endpoints")
    )
)]
pub struct ApiDoc;

/// GET body: one blog when `?id=` is given, every blog otherwise.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum GetBlogsResponse {
    One(Blog),
    Many(Vec<Blog>),
}

struct BlogApi<R: BlogRepository> {
    service: BlogService<R>,
    policy: StatusPolicy,
}

type ApiState<R> = State<Arc<BlogApi<R>>>;

/// Router for the four blog operations, all on `/`.
///
/// `policy` decides which HTTP status each failure gets.
pub fn router<R: BlogRepository + 'static>(service: BlogService<R>, policy: StatusPolicy) -> Router {
    let state = Arc::new(BlogApi { service, policy });

    Router::new()
        .route(
            "/",
            get(get_blogs)
                .post(create_blog)
                .patch(update_blog)
                .delete(delete_blog),
        )
        .with_state(state)
}

/// Get one blog by id, or all blogs
#[utoipa::path(
    get,
    path = "",
    tag = BLOG_TAG,
    params(
        ("id" = Option<i64>, Query, description = "Blog ID; omit to list every blog")
    ),
    responses(
        (status = 200, description = "The blog, or every blog when no id is given", body = GetBlogsResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_blogs<R: BlogRepository>(
    State(api): ApiState<R>,
    IdQuery(id): IdQuery<i64>,
) -> Result<Json<GetBlogsResponse>, AppError> {
    let response = match id {
        Some(id) => api.service.get_blog(id).await.map(GetBlogsResponse::One),
        None => api.service.list_blogs().await.map(GetBlogsResponse::Many),
    };

    response
        .map(Json)
        .map_err(|e| api.policy.reject(Operation::Read, e))
}

/// Create a blog
#[utoipa::path(
    post,
    path = "",
    tag = BLOG_TAG,
    request_body = NewBlog,
    responses(
        (status = 201, description = "Blog created", body = Blog),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_blog<R: BlogRepository>(
    State(api): ApiState<R>,
    JsonBody(input): JsonBody<NewBlog>,
) -> Result<impl IntoResponse, AppError> {
    let blog = api
        .service
        .create_blog(input)
        .await
        .map_err(|e| api.policy.reject(Operation::Write, e))?;

    Ok((StatusCode::CREATED, Json(blog)))
}

/// Replace every mutable field of an existing blog
#[utoipa::path(
    patch,
    path = "",
    tag = BLOG_TAG,
    request_body = UpdateBlog,
    responses(
        (status = 200, description = "Blog updated", body = Blog),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn update_blog<R: BlogRepository>(
    State(api): ApiState<R>,
    JsonBody(input): JsonBody<UpdateBlog>,
) -> Result<Json<Blog>, AppError> {
    api.service
        .update_blog(input)
        .await
        .map(Json)
        .map_err(|e| api.policy.reject(Operation::Write, e))
}

/// Delete a blog
#[utoipa::path(
    delete,
    path = "",
    tag = BLOG_TAG,
    request_body = BlogId,
    responses(
        (status = 200, description = "Blog deleted", body = DeletedBlog),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn delete_blog<R: BlogRepository>(
    State(api): ApiState<R>,
    JsonBody(BlogId { id }): JsonBody<BlogId>,
) -> Result<Json<DeletedBlog>, AppError> {
    api.service
        .delete_blog(id)
        .await
        .map(|id| Json(DeletedBlog { id }))
        .map_err(|e| api.policy.reject(Operation::Write, e))
}
