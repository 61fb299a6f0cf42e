use async_trait::async_trait;
use learnhub_models::Category;
use sqlx::PgPool;
use tracing::instrument;

use crate::error::DbError;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>, DbError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbError>;

    async fn create(&self, title: &str) -> Result<Category, DbError>;

    async fn update(&self, id: i32, title: &str) -> Result<Option<Category>, DbError>;

    async fn delete(&self, id: i32) -> Result<u64, DbError>;
}

#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, title, created_at, updated_at FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbError> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, title, created_at, updated_at FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    #[instrument(skip(self), fields(db.table = "categories"))]
    async fn create(&self, title: &str) -> Result<Category, DbError> {
        let category = sqlx::query_as::<_, Category>(
            r#"INSERT INTO categories (title) VALUES ($1)
               RETURNING id, title, created_at, updated_at"#,
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    #[instrument(skip(self), fields(db.table = "categories"))]
    async fn update(&self, id: i32, title: &str) -> Result<Option<Category>, DbError> {
        let category = sqlx::query_as::<_, Category>(
            r#"UPDATE categories SET title = $2, updated_at = NOW()
               WHERE id = $1
               RETURNING id, title, created_at, updated_at"#,
        )
        .bind(id)
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    #[instrument(skip(self), fields(db.table = "categories"))]
    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
