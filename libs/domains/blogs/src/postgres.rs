use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use std::future::Future;
use std::time::Duration;
use tracing::instrument;

use crate::{
    entity,
    error::{BlogError, BlogResult},
    models::{Blog, NewBlog, UpdateBlog},
    repository::BlogRepository,
};

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Postgres-backed repository.
///
/// Each call is bounded by `query_timeout`; expiry surfaces as
/// [`BlogError::ConnectionFailure`]. Keyed writes run in a transaction that is
/// only committed when exactly one row matched.
#[derive(Clone)]
pub struct PgBlogRepository {
    db: DatabaseConnection,
    query_timeout: Duration,
}

impl PgBlogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_query_timeout(db, DEFAULT_QUERY_TIMEOUT)
    }

    pub fn with_query_timeout(db: DatabaseConnection, query_timeout: Duration) -> Self {
        Self { db, query_timeout }
    }

    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> BlogResult<T>
    where
        F: Future<Output = BlogResult<T>>,
    {
        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => {
                match &err {
                    BlogError::NotFound(_) => {}
                    BlogError::ConnectionFailure(_) | BlogError::ConstraintViolation(_) => {
                        tracing::warn!(operation, error = %err, "Blog query failed");
                    }
                    _ => tracing::error!(operation, error = %err, "Blog query failed"),
                }
                Err(err)
            }
            Err(_) => {
                tracing::warn!(operation, timeout = ?self.query_timeout, "Blog query timed out");
                Err(BlogError::ConnectionFailure(format!(
                    "{operation} timed out after {:?}",
                    self.query_timeout
                )))
            }
        }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> BlogResult<Vec<Blog>> {
        self.bounded("get_all", async {
            let models = entity::Entity::find()
                .order_by_asc(entity::Column::Id)
                .all(&self.db)
                .await?;

            Ok(models.into_iter().map(Blog::from).collect())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> BlogResult<Blog> {
        self.bounded("get_by_id", async {
            // Two rows are enough to tell "exactly one" from "more than one"
            let mut models = entity::Entity::find()
                .filter(entity::Column::Id.eq(id))
                .limit(2)
                .all(&self.db)
                .await?;

            match models.len() {
                0 => Err(BlogError::NotFound(id)),
                1 => Ok(models.remove(0).into()),
                count => Err(BlogError::MultipleMatch { id, count }),
            }
        })
        .await
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: NewBlog) -> BlogResult<Blog> {
        self.bounded("create", async {
            let active_model: entity::ActiveModel = input.into();
            let model = active_model.insert(&self.db).await?;

            tracing::info!(blog_id = model.id, "Created blog");
            Ok(model.into())
        })
        .await
    }

    #[instrument(skip(self, input), fields(blog_id = input.id))]
    async fn update(&self, input: UpdateBlog) -> BlogResult<Blog> {
        let id = input.id;

        self.bounded("update", async {
            let txn = self.db.begin().await?;

            let mut models = entity::Entity::update_many()
                .set(entity::ActiveModel::from(input))
                .filter(entity::Column::Id.eq(id))
                .exec_with_returning(&txn)
                .await?;

            match models.len() {
                1 => {
                    txn.commit().await?;
                    tracing::info!(blog_id = id, "Updated blog");
                    Ok(models.remove(0).into())
                }
                0 => {
                    txn.rollback().await?;
                    Err(BlogError::NotFound(id))
                }
                count => {
                    txn.rollback().await?;
                    Err(BlogError::MultipleMatch { id, count })
                }
            }
        })
        .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> BlogResult<i64> {
        self.bounded("delete", async {
            let txn = self.db.begin().await?;

            let result = entity::Entity::delete_many()
                .filter(entity::Column::Id.eq(id))
                .exec(&txn)
                .await?;

            match result.rows_affected {
                1 => {
                    txn.commit().await?;
                    tracing::info!(blog_id = id, "Deleted blog");
                    Ok(id)
                }
                0 => {
                    txn.rollback().await?;
                    Err(BlogError::NotFound(id))
                }
                count => {
                    txn.rollback().await?;
                    Err(BlogError::MultipleMatch {
                        id,
                        count: count as usize,
                    })
                }
            }
        })
        .await
    }
}
