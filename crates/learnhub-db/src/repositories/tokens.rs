use async_trait::async_trait;
use learnhub_models::JwtAuth;
use sqlx::PgPool;
use tracing::instrument;

use crate::error::DbError;

#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn find_by_user(&self, user_id: i32) -> Result<Option<JwtAuth>, DbError>;

    async fn delete(&self, id: i32) -> Result<u64, DbError>;

    /// Stores `jwt` as the user's token, replacing any existing row.
    async fn upsert(&self, user_id: i32, jwt: &str) -> Result<JwtAuth, DbError>;
}

#[derive(Clone)]
pub struct PgTokenRepository {
    pool: PgPool,
}

impl PgTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    #[instrument(skip(self), fields(db.table = "jwt_auth"))]
    async fn find_by_user(&self, user_id: i32) -> Result<Option<JwtAuth>, DbError> {
        let token = sqlx::query_as::<_, JwtAuth>(
            "SELECT id, jwt, user_id, created_at, updated_at FROM jwt_auth WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(token)
    }

    #[instrument(skip(self), fields(db.table = "jwt_auth"))]
    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM jwt_auth WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self, jwt), fields(db.table = "jwt_auth"))]
    async fn upsert(&self, user_id: i32, jwt: &str) -> Result<JwtAuth, DbError> {
        let token = sqlx::query_as::<_, JwtAuth>(
            r#"INSERT INTO jwt_auth (jwt, user_id)
               VALUES ($1, $2)
               ON CONFLICT (user_id) DO UPDATE SET jwt = EXCLUDED.jwt, updated_at = NOW()
               RETURNING id, jwt, user_id, created_at, updated_at"#,
        )
        .bind(jwt)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(token)
    }
}
