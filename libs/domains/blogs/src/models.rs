use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Rejects strings with no non-whitespace character.
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("must not be blank".into()));
    }
    Ok(())
}

fn default_published() -> bool {
    true
}

/// A blog post as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    /// Assigned by storage at creation, never reused
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub is_published: bool,
    /// URL or site-relative path of the cover image
    pub featured_image: String,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    pub(crate) fn new(id: i64, input: NewBlog, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            content: input.content,
            category: input.category,
            is_published: input.is_published,
            featured_image: input.featured_image,
            created_at,
        }
    }

    /// Replace every mutable field. `id` and `created_at` are kept.
    pub fn apply_update(&mut self, update: UpdateBlog) {
        self.title = update.title;
        self.content = update.content;
        self.category = update.category;
        self.is_published = update.is_published;
        self.featured_image = update.featured_image;
    }
}

/// Create payload. Any `id` or `createdAt` sent by the client is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBlog {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 200, message = "title must be at most 200 characters")
    )]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "category must be at most 100 characters"))]
    pub category: String,

    #[serde(default = "default_published")]
    #[schema(default = true)]
    pub is_published: bool,

    #[serde(default)]
    #[validate(length(max = 2048, message = "featuredImage must be at most 2048 characters"))]
    pub featured_image: String,
}

/// Full-replace update payload; every mutable field is required.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlog {
    pub id: i64,

    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 200, message = "title must be at most 200 characters")
    )]
    pub title: String,

    pub content: String,

    #[validate(length(max = 100, message = "category must be at most 100 characters"))]
    pub category: String,

    pub is_published: bool,

    #[validate(length(max = 2048, message = "featuredImage must be at most 2048 characters"))]
    pub featured_image: String,
}

/// Delete request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BlogId {
    pub id: i64,
}

/// Delete response body: the identifier that was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeletedBlog {
    pub id: i64,
}
