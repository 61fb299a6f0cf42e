mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{TEST_API_KEY, TEST_PASSWORD, setup_test_app};
use learnhub::learnhub_auth::{create_access_token, create_token_with_expiry, verify_token};
use learnhub::learnhub_config::JwtConfig;
use learnhub::learnhub_db::TokenRepository;
use learnhub::learnhub_models::RoleName;
use serde_json::json;
use sqlx::PgPool;

fn signup_body(login: &str, role: &str) -> serde_json::Value {
    json!({
        "login": login,
        "email": format!("{}@test.com", login),
        "password": "secret123",
        "role": role,
        "firstName": "John",
        "lastName": "Doe"
    })
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_success_hides_password(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = app.post("/api/v1/signup", None, signup_body("jdoe", "student")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["login"], "jdoe");
    assert_eq!(body["email"], "jdoe@test.com");
    assert_eq!(body["roleName"], "student");
    assert_eq!(body["firstName"], "John");
    assert!(body.get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_teacher_role(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = app.post("/api/v1/signup", None, signup_body("mentor", "teacher")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], 2);
    assert_eq!(body["roleName"], "teacher");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_duplicate_login_or_email(pool: PgPool) {
    let app = setup_test_app(pool);
    app.post("/api/v1/signup", None, signup_body("jdoe", "student")).await;

    let (status, body) = app.post("/api/v1/signup", None, signup_body("jdoe", "student")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], "User with such credentials already exist");

    let mut same_email = signup_body("other", "student");
    same_email["email"] = json!("jdoe@test.com");
    let (status, body) = app.post("/api/v1/signup", None, same_email).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], "User with such credentials already exist");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_rejects_admin_role(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = app.post("/api/v1/signup", None, signup_body("root", "admin")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        "Wrong role, please send the right role: student,teacher"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_missing_fields(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = app.post("/api/v1/signup", None, json!({ "login": "jdoe" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    let params: Vec<_> = errors.iter().map(|e| e["param"].as_str().unwrap()).collect();
    assert_eq!(params, vec!["email", "password", "role"]);
    assert!(
        errors
            .iter()
            .all(|e| e["msg"] == "Please send required fields: login,email,password,role")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_short_password(pool: PgPool) {
    let app = setup_test_app(pool);
    let mut body = signup_body("jdoe", "student");
    body["password"] = json!("123");

    let (status, body) = app.post("/api/v1/signup", None, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["param"], "password");
    assert_eq!(body["errors"][0]["msg"], "Minimum password length is: 6");
    assert_eq!(body["errors"][0]["location"], "body");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signin_unknown_user(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = app
        .post("/api/v1/signin", None, json!({ "username": "ghost", "password": "whatever" }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"], "Unable to find user record");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signin_wrong_password(pool: PgPool) {
    let app = setup_test_app(pool);
    app.create_user("jdoe", RoleName::Student).await;

    let (status, body) = app
        .post("/api/v1/signin", None, json!({ "username": "jdoe", "password": "wrongpass" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], "Unable to authenticate user, wrong credentials");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signin_issues_and_stores_token(pool: PgPool) {
    let app = setup_test_app(pool);
    let user = app.create_user("jdoe", RoleName::Teacher).await;

    let (status, body) = app
        .post("/api/v1/signin", None, json!({ "username": "jdoe", "password": TEST_PASSWORD }))
        .await;

    assert_eq!(status, StatusCode::OK);
    let token = body["accessToken"].as_str().unwrap();
    let claims = verify_token(token, &app.state.jwt_config).unwrap();
    assert_eq!(claims.user_id(), Some(user.id));
    assert_eq!(claims.username, "jdoe");
    assert_eq!(claims.role, "teacher");
    assert_eq!(app.token_count().await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signin_by_email(pool: PgPool) {
    let app = setup_test_app(pool);
    app.create_user("jdoe", RoleName::Student).await;

    let (status, body) = app
        .post(
            "/api/v1/signin",
            None,
            json!({ "username": "jdoe@test.com", "password": TEST_PASSWORD }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let claims = verify_token(body["accessToken"].as_str().unwrap(), &app.state.jwt_config).unwrap();
    assert_eq!(claims.username, "jdoe");
    assert_eq!(claims.role, "student");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signin_reuses_valid_token(pool: PgPool) {
    let app = setup_test_app(pool);
    let user = app.create_user("jdoe", RoleName::Student).await;
    let existing = app.token_for(&user);
    let stored = app.state.tokens.upsert(user.id, &existing).await.unwrap();

    let (status, body) = app
        .post("/api/v1/signin", None, json!({ "username": "jdoe", "password": TEST_PASSWORD }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accessToken"], existing);
    assert_eq!(app.token_count().await, 1);

    let after = app.state.tokens.find_by_user(user.id).await.unwrap().unwrap();
    assert_eq!(after.id, stored.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signin_replaces_expired_token(pool: PgPool) {
    let app = setup_test_app(pool);
    let user = app.create_user("jdoe", RoleName::Student).await;
    let expired =
        create_token_with_expiry(user.id, "jdoe", "student", -60, &app.state.jwt_config).unwrap();
    let stale = app.state.tokens.upsert(user.id, &expired).await.unwrap();

    let (status, body) = app
        .post("/api/v1/signin", None, json!({ "username": "jdoe", "password": TEST_PASSWORD }))
        .await;

    assert_eq!(status, StatusCode::OK);
    let token = body["accessToken"].as_str().unwrap();
    assert_ne!(token, expired);
    assert!(verify_token(token, &app.state.jwt_config).is_ok());
    assert_eq!(app.token_count().await, 1);

    // The expired row is removed and a fresh one inserted, not overwritten.
    let stored = app.state.tokens.find_by_user(user.id).await.unwrap().unwrap();
    assert_eq!(stored.jwt, token);
    assert_ne!(stored.id, stale.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signin_replaces_token_signed_with_other_secret(pool: PgPool) {
    let app = setup_test_app(pool);
    let user = app.create_user("jdoe", RoleName::Student).await;
    let foreign = create_access_token(
        user.id,
        "jdoe",
        "student",
        &JwtConfig::new("another-secret", 3600),
    )
    .unwrap();
    app.state.tokens.upsert(user.id, &foreign).await.unwrap();

    let (status, body) = app
        .post("/api/v1/signin", None, json!({ "username": "jdoe", "password": TEST_PASSWORD }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_ne!(body["accessToken"], foreign);
    assert_eq!(app.token_count().await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_jwt_check_passes_with_bearer_token(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, token) = app.login_as("jdoe", RoleName::Student).await;

    let (status, body) = app.get("/api/v1/auth/jwt", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "Authentication passed!");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_jwt_check_accepts_bare_token(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, token) = app.login_as("jdoe", RoleName::Student).await;

    let request = Request::builder()
        .uri("/api/v1/auth/jwt")
        .header("authorization", token)
        .body(Body::empty())
        .unwrap();
    let (status, _) = app.send(request).await;

    assert_eq!(status, StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_jwt_check_without_token(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = app.get("/api/v1/auth/jwt", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"], "Unauthorized");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_jwt_check_with_expired_token(pool: PgPool) {
    let app = setup_test_app(pool);
    let user = app.create_user("jdoe", RoleName::Student).await;
    let expired =
        create_token_with_expiry(user.id, "jdoe", "student", -60, &app.state.jwt_config).unwrap();

    let (status, body) = app.get("/api/v1/auth/jwt", Some(&expired)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"], "Token is expired");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_jwt_check_with_garbage_token(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = app.get("/api/v1/auth/jwt", Some("not.a.jwt")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"], "Unauthorized");
}

async fn api_key_request(pool: PgPool, key: Option<&str>) -> (StatusCode, serde_json::Value) {
    let app = setup_test_app(pool);
    let mut builder = Request::builder().uri("/api/v1/auth/api-key");
    if let Some(key) = key {
        builder = builder.header("x-api-key", key);
    }

    app.send(builder.body(Body::empty()).unwrap()).await
}

#[sqlx::test(migrations = "./migrations")]
async fn test_api_key_accepted(pool: PgPool) {
    let (status, body) = api_key_request(pool, Some(TEST_API_KEY)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "Authentication passed!");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_api_key_wrong_or_missing(pool: PgPool) {
    let (status, body) = api_key_request(pool.clone(), Some("wrong-key")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"], "Unauthorized");

    let (status, _) = api_key_request(pool, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
