use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::BlogResult;
use crate::models::{Blog, NewBlog, UpdateBlog};
use crate::repository::BlogRepository;

/// Service layer between the HTTP adapter and storage.
///
/// Holds nothing but the repository handle; results are never cached.
/// Payloads are validated here, before storage is touched.
pub struct BlogService<R: BlogRepository> {
    repository: Arc<R>,
}

impl<R: BlogRepository> Clone for BlogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: BlogRepository> BlogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_blogs(&self) -> BlogResult<Vec<Blog>> {
        self.repository.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_blog(&self, id: i64) -> BlogResult<Blog> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn create_blog(&self, input: NewBlog) -> BlogResult<Blog> {
        input.validate()?;
        self.repository.create(input).await
    }

    #[instrument(skip(self, input), fields(blog_id = input.id))]
    pub async fn update_blog(&self, input: UpdateBlog) -> BlogResult<Blog> {
        input.validate()?;
        self.repository.update(input).await
    }

    #[instrument(skip(self))]
    pub async fn delete_blog(&self, id: i64) -> BlogResult<i64> {
        self.repository.delete(id).await
    }
}
