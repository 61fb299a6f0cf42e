//! # LearnHub DB
//!
//! Database pool, embedded migrations and repositories for the LearnHub API.
//!
//! Every table group is reached through an object-safe repository trait
//! (see [`repositories`]) so handlers depend on `Arc<dyn ...Repository>`
//! rather than on a concrete pool. PostgreSQL implementations live next to
//! each trait.
//!
//! # Example
//!
//! ```ignore
//! use learnhub_config::DatabaseConfig;
//! use learnhub_db::{init_db_pool, run_migrations};
//!
//! let config = DatabaseConfig::from_env().expect("DATABASE_URL must be set");
//! let pool = init_db_pool(&config).await?;
//! run_migrations(&pool).await?;
//! ```

use learnhub_config::DatabaseConfig;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod repositories;

pub use error::DbError;
pub use repositories::{
    CategoryRepository, CourseRepository, MaterialRepository, PgCategoryRepository,
    PgCourseRepository, PgMaterialRepository, PgRoleRepository, PgTokenRepository,
    PgUserRepository, RoleRepository, TokenRepository, UserRepository,
};

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// Connects a PostgreSQL pool sized by `DATABASE_MAX_CONNECTIONS`.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| DbError::Migration(e.to_string()))?;

    tracing::info!("Database migrations applied");
    Ok(())
}
