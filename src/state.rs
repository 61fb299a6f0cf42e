use std::sync::Arc;

use learnhub_config::{ApiKeyConfig, CorsConfig, DatabaseConfig, JwtConfig, PasswordConfig};
use learnhub_db::{
    CategoryRepository, CourseRepository, DbError, MaterialRepository, PgCategoryRepository,
    PgCourseRepository, PgMaterialRepository, PgRoleRepository, PgTokenRepository,
    PgUserRepository, RoleRepository, TokenRepository, UserRepository, init_db_pool,
};
use sqlx::PgPool;

/// Shared, immutable application state. Handlers reach the database only
/// through the repository trait objects.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub roles: Arc<dyn RoleRepository>,
    pub tokens: Arc<dyn TokenRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub materials: Arc<dyn MaterialRepository>,
    pub jwt_config: JwtConfig,
    pub api_key_config: ApiKeyConfig,
    pub cors_config: CorsConfig,
    pub password_config: PasswordConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_expires_in", &self.jwt_config.expires_in)
            .field("cors_config", &self.cors_config)
            .field("password_config", &self.password_config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// PostgreSQL-backed state with configs read from the environment.
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            pool,
            JwtConfig::from_env(),
            ApiKeyConfig::from_env(),
            CorsConfig::from_env(),
            PasswordConfig::from_env(),
        )
    }

    pub fn new(
        pool: PgPool,
        jwt_config: JwtConfig,
        api_key_config: ApiKeyConfig,
        cors_config: CorsConfig,
        password_config: PasswordConfig,
    ) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            roles: Arc::new(PgRoleRepository::new(pool.clone())),
            tokens: Arc::new(PgTokenRepository::new(pool.clone())),
            categories: Arc::new(PgCategoryRepository::new(pool.clone())),
            courses: Arc::new(PgCourseRepository::new(pool.clone())),
            materials: Arc::new(PgMaterialRepository::new(pool)),
            jwt_config,
            api_key_config,
            cors_config,
            password_config,
        }
    }
}

pub async fn init_app_state(config: &DatabaseConfig) -> Result<AppState, DbError> {
    let pool = init_db_pool(config).await?;
    learnhub_db::run_migrations(&pool).await?;

    Ok(AppState::from_pool(pool))
}
