use async_trait::async_trait;
use learnhub_models::{Material, MaterialChanges, NewMaterial};
use sqlx::PgPool;
use tracing::instrument;

use crate::error::DbError;

/// Materials are always addressed through their course.
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    async fn list_by_course(&self, course_id: i32) -> Result<Vec<Material>, DbError>;

    async fn find(&self, course_id: i32, id: i32) -> Result<Option<Material>, DbError>;

    async fn create(&self, material: NewMaterial) -> Result<Material, DbError>;

    async fn update(
        &self,
        course_id: i32,
        id: i32,
        changes: MaterialChanges,
    ) -> Result<Option<Material>, DbError>;

    async fn delete(&self, course_id: i32, id: i32) -> Result<u64, DbError>;
}

const MATERIAL_COLUMNS: &str = "id, title, content, course_id, created_at, updated_at";

#[derive(Clone)]
pub struct PgMaterialRepository {
    pool: PgPool,
}

impl PgMaterialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaterialRepository for PgMaterialRepository {
    async fn list_by_course(&self, course_id: i32) -> Result<Vec<Material>, DbError> {
        let sql = format!("SELECT {MATERIAL_COLUMNS} FROM materials WHERE course_id = $1 ORDER BY id");
        let materials = sqlx::query_as::<_, Material>(&sql)
            .bind(course_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(materials)
    }

    async fn find(&self, course_id: i32, id: i32) -> Result<Option<Material>, DbError> {
        let sql =
            format!("SELECT {MATERIAL_COLUMNS} FROM materials WHERE course_id = $1 AND id = $2");
        let material = sqlx::query_as::<_, Material>(&sql)
            .bind(course_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(material)
    }

    #[instrument(skip(self, material), fields(db.table = "materials", course.id = material.course_id))]
    async fn create(&self, material: NewMaterial) -> Result<Material, DbError> {
        let sql = format!(
            "INSERT INTO materials (title, content, course_id) VALUES ($1, $2, $3) \
             RETURNING {MATERIAL_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Material>(&sql)
            .bind(&material.title)
            .bind(&material.content)
            .bind(material.course_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    #[instrument(skip(self, changes), fields(db.table = "materials"))]
    async fn update(
        &self,
        course_id: i32,
        id: i32,
        changes: MaterialChanges,
    ) -> Result<Option<Material>, DbError> {
        let sql = format!(
            "UPDATE materials SET \
                title = COALESCE($3, title), \
                content = COALESCE($4, content), \
                updated_at = NOW() \
             WHERE course_id = $1 AND id = $2 RETURNING {MATERIAL_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Material>(&sql)
            .bind(course_id)
            .bind(id)
            .bind(changes.title)
            .bind(changes.content)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    #[instrument(skip(self), fields(db.table = "materials"))]
    async fn delete(&self, course_id: i32, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM materials WHERE course_id = $1 AND id = $2")
            .bind(course_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
