use async_trait::async_trait;
use learnhub_models::{NewUser, UserChanges, UserRecord};
use sqlx::PgPool;
use tracing::instrument;

use crate::error::DbError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Single lookup matching either column.
    async fn find_by_login_or_email(
        &self,
        login: &str,
        email: &str,
    ) -> Result<Option<UserRecord>, DbError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<UserRecord>, DbError>;

    async fn list_by_role(&self, role_id: i32) -> Result<Vec<UserRecord>, DbError>;

    async fn create(&self, user: NewUser) -> Result<UserRecord, DbError>;

    /// Returns `None` when no user has this id.
    async fn update(&self, id: i32, changes: UserChanges) -> Result<Option<UserRecord>, DbError>;

    async fn delete(&self, id: i32) -> Result<u64, DbError>;
}

const USER_COLUMNS: &str = "u.id, u.login, u.email, u.password, u.role, r.role AS role_name, \
     u.first_name, u.last_name, u.created_at, u.updated_at";

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self), fields(db.table = "users"))]
    async fn find_by_login_or_email(
        &self,
        login: &str,
        email: &str,
    ) -> Result<Option<UserRecord>, DbError> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users u JOIN roles r ON r.id = u.role \
             WHERE u.login = $1 OR u.email = $2 LIMIT 1"
        );

        let user = sqlx::query_as::<_, UserRecord>(&sql)
            .bind(login)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    #[instrument(skip(self), fields(db.table = "users"))]
    async fn find_by_id(&self, id: i32) -> Result<Option<UserRecord>, DbError> {
        let sql =
            format!("SELECT {USER_COLUMNS} FROM users u JOIN roles r ON r.id = u.role WHERE u.id = $1");

        let user = sqlx::query_as::<_, UserRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn list_by_role(&self, role_id: i32) -> Result<Vec<UserRecord>, DbError> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users u JOIN roles r ON r.id = u.role \
             WHERE u.role = $1 ORDER BY u.id"
        );

        let users = sqlx::query_as::<_, UserRecord>(&sql)
            .bind(role_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    #[instrument(skip(self, user), fields(db.table = "users", user.login = %user.login))]
    async fn create(&self, user: NewUser) -> Result<UserRecord, DbError> {
        let sql = format!(
            "WITH u AS ( \
                INSERT INTO users (login, email, password, role, first_name, last_name) \
                VALUES ($1, $2, $3, $4, $5, $6) RETURNING * \
             ) \
             SELECT {USER_COLUMNS} FROM u JOIN roles r ON r.id = u.role"
        );

        let created = sqlx::query_as::<_, UserRecord>(&sql)
            .bind(&user.login)
            .bind(&user.email)
            .bind(&user.password)
            .bind(user.role)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    #[instrument(skip(self, changes), fields(db.table = "users"))]
    async fn update(&self, id: i32, changes: UserChanges) -> Result<Option<UserRecord>, DbError> {
        let sql = format!(
            "WITH u AS ( \
                UPDATE users SET \
                    login = COALESCE($2, login), \
                    email = COALESCE($3, email), \
                    first_name = COALESCE($4, first_name), \
                    last_name = COALESCE($5, last_name), \
                    updated_at = NOW() \
                WHERE id = $1 RETURNING * \
             ) \
             SELECT {USER_COLUMNS} FROM u JOIN roles r ON r.id = u.role"
        );

        let updated = sqlx::query_as::<_, UserRecord>(&sql)
            .bind(id)
            .bind(changes.login)
            .bind(changes.email)
            .bind(changes.first_name)
            .bind(changes.last_name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    #[instrument(skip(self), fields(db.table = "users"))]
    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
