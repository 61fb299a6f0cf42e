use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Stored access token. At most one row per user.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct JwtAuth {
    pub id: i32,
    pub jwt: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
