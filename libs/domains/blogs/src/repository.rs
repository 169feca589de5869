use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{BlogError, BlogResult};
use crate::models::{Blog, NewBlog, UpdateBlog};

/// Repository trait for Blog persistence
///
/// Keyed operations fail with [`BlogError::NotFound`] when nothing matches
/// and never apply a partial write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Every stored blog
    async fn get_all(&self) -> BlogResult<Vec<Blog>>;

    /// Exactly one blog, or NotFound / MultipleMatch
    async fn get_by_id(&self, id: i64) -> BlogResult<Blog>;

    /// Insert and return the stored record with its assigned id and timestamp
    async fn create(&self, input: NewBlog) -> BlogResult<Blog>;

    /// Replace all mutable fields of the blog named by `input.id`
    async fn update(&self, input: UpdateBlog) -> BlogResult<Blog>;

    /// Remove the blog and return its id
    async fn delete(&self, id: i64) -> BlogResult<i64>;
}

#[derive(Debug)]
struct Store {
    blogs: BTreeMap<i64, Blog>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            blogs: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of BlogRepository (for development/testing)
///
/// Ids start at 1 and are never reused after a delete.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBlogRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn get_all(&self) -> BlogResult<Vec<Blog>> {
        let store = self.store.read().await;
        Ok(store.blogs.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> BlogResult<Blog> {
        let store = self.store.read().await;
        store.blogs.get(&id).cloned().ok_or(BlogError::NotFound(id))
    }

    async fn create(&self, input: NewBlog) -> BlogResult<Blog> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let blog = Blog::new(id, input, Utc::now());
        store.blogs.insert(id, blog.clone());

        tracing::info!(blog_id = id, "Created blog");
        Ok(blog)
    }

    async fn update(&self, input: UpdateBlog) -> BlogResult<Blog> {
        let mut store = self.store.write().await;

        let id = input.id;
        let blog = store.blogs.get_mut(&id).ok_or(BlogError::NotFound(id))?;
        blog.apply_update(input);

        tracing::info!(blog_id = id, "Updated blog");
        Ok(blog.clone())
    }

    async fn delete(&self, id: i64) -> BlogResult<i64> {
        let mut store = self.store.write().await;

        store.blogs.remove(&id).ok_or(BlogError::NotFound(id))?;

        tracing::info!(blog_id = id, "Deleted blog");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_blog(title: &str) -> NewBlog {
        NewBlog {
            title: title.to_string(),
            content: "B".to_string(),
            category: "tech".to_string(),
            is_published: true,
            featured_image: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids_from_one() {
        let repo = InMemoryBlogRepository::new();

        let first = repo.create(new_blog("A")).await.unwrap();
        let second = repo.create(new_blog("B")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_and_get_blog() {
        let repo = InMemoryBlogRepository::new();

        let created = repo.create(new_blog("A")).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_blog_is_not_found() {
        let repo = InMemoryBlogRepository::new();

        let result = repo.get_by_id(42).await;
        assert!(matches!(result, Err(BlogError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_created_at() {
        let repo = InMemoryBlogRepository::new();
        let created = repo.create(new_blog("A")).await.unwrap();

        let updated = repo
            .update(UpdateBlog {
                id: created.id,
                title: "A2".to_string(),
                content: String::new(),
                category: "news".to_string(),
                is_published: false,
                featured_image: "/a.png".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.title, "A2");
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_blog_is_not_found() {
        let repo = InMemoryBlogRepository::new();

        let result = repo
            .update(UpdateBlog {
                id: 9,
                title: "x".to_string(),
                content: String::new(),
                category: String::new(),
                is_published: true,
                featured_image: String::new(),
            })
            .await;

        assert!(matches!(result, Err(BlogError::NotFound(9))));
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_succeeds_exactly_once() {
        let repo = InMemoryBlogRepository::new();
        let created = repo.create(new_blog("A")).await.unwrap();

        assert_eq!(repo.delete(created.id).await.unwrap(), created.id);
        assert!(matches!(
            repo.delete(created.id).await,
            Err(BlogError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryBlogRepository::new();

        let first = repo.create(new_blog("A")).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let second = repo.create(new_blog("B")).await.unwrap();

        assert_ne!(first.id, second.id);
    }
}
