#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use learnhub::learnhub_auth::create_access_token;
use learnhub::learnhub_config::{ApiKeyConfig, CorsConfig, JwtConfig, PasswordConfig};
use learnhub::learnhub_core::hash_password_with_cost;
use learnhub::learnhub_db::{
    CategoryRepository, CourseRepository, PgCategoryRepository, PgCourseRepository,
    PgUserRepository, UserRepository,
};
use learnhub::learnhub_models::{Category, Course, NewCourse, NewUser, RoleName, UserRecord};
use learnhub::router::init_router;
use learnhub::state::AppState;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "testpass123";
pub const TEST_API_KEY: &str = "test-api-key";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new("test-secret-key-for-testing-only", 3600)
}

/// Role ids as seeded by the first migration.
pub fn role_id(role: RoleName) -> i32 {
    match role {
        RoleName::Admin => 1,
        RoleName::Teacher => 2,
        RoleName::Student => 3,
    }
}

pub struct TestApp {
    pub pool: PgPool,
    pub state: AppState,
    router: Router,
}

pub fn setup_test_app(pool: PgPool) -> TestApp {
    let state = AppState::new(
        pool.clone(),
        test_jwt_config(),
        ApiKeyConfig::new(TEST_API_KEY),
        CorsConfig::from_env(),
        PasswordConfig::new(4),
    );
    let router = init_router(state.clone());

    TestApp {
        pool,
        state,
        router,
    }
}

impl TestApp {
    pub async fn create_user(&self, login: &str, role: RoleName) -> UserRecord {
        let password = hash_password_with_cost(TEST_PASSWORD, 4).unwrap();

        PgUserRepository::new(self.pool.clone())
            .create(NewUser {
                login: login.to_string(),
                email: format!("{}@test.com", login),
                password,
                role: role_id(role),
                first_name: Some("Test".into()),
                last_name: Some("User".into()),
            })
            .await
            .unwrap()
    }

    pub fn token_for(&self, user: &UserRecord) -> String {
        create_access_token(user.id, &user.login, &user.role_name, &self.state.jwt_config).unwrap()
    }

    /// Creates a user of the given role and returns it with a valid token.
    pub async fn login_as(&self, login: &str, role: RoleName) -> (UserRecord, String) {
        let user = self.create_user(login, role).await;
        let token = self.token_for(&user);
        (user, token)
    }

    pub async fn create_category(&self, title: &str) -> Category {
        PgCategoryRepository::new(self.pool.clone())
            .create(title)
            .await
            .unwrap()
    }

    pub async fn create_course(&self, title: &str, category_id: i32, teacher_id: i32) -> Course {
        PgCourseRepository::new(self.pool.clone())
            .create(NewCourse {
                title: title.to_string(),
                description: Some("Test description".into()),
                category_id,
                teacher_id,
            })
            .await
            .unwrap()
    }

    pub async fn enroll(&self, course_id: i32, user_id: i32) {
        PgCourseRepository::new(self.pool.clone())
            .enroll(course_id, user_id)
            .await
            .unwrap();
    }

    async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    pub async fn token_count(&self) -> i64 {
        self.count("jwt_auth").await
    }

    pub async fn category_count(&self) -> i64 {
        self.count("categories").await
    }

    pub async fn material_count(&self) -> i64 {
        self.count("materials").await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, token, None).await
    }
}
