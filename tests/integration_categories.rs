mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::setup_test_app;
use learnhub::learnhub_models::RoleName;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_list_is_public_and_strips_timestamps(pool: PgPool) {
    let app = setup_test_app(pool);
    app.create_category("Programming").await;

    let (status, body) = app.get("/api/v1/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Programming");
    assert!(items[0].get("createdAt").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_get_category(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, admin) = app.login_as("admin", RoleName::Admin).await;

    let (status, created) = app
        .post("/api/v1/categories", Some(&admin), json!({ "title": "Design" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["title"], "Design");
    assert!(created["createdAt"].is_string());

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = app.get(&format!("/api/v1/categories/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Design");
    assert!(fetched["updatedAt"].is_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_requires_admin(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, student) = app.login_as("student", RoleName::Student).await;

    let (status, body) = app
        .post("/api/v1/categories", Some(&student), json!({ "title": "Design" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["errors"], "Access denied: insufficient role");

    let (status, _) = app
        .post("/api/v1/categories", None, json!({ "title": "Design" }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.category_count().await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_title_rules_in_order(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, admin) = app.login_as("admin", RoleName::Admin).await;

    let cases = [
        (json!({}), "Please send required fields: title"),
        (json!({ "title": 42 }), "Parameter should be a string"),
        (
            json!({ "title": "abc1" }),
            "Only RU/EN alphabet symbols allowed, please change your request",
        ),
        (json!({ "title": "ab" }), "Minimum category length is: 3"),
        (json!({ "title": "a".repeat(51) }), "Maximum category length is: 50"),
    ];

    for (payload, message) in cases {
        let (status, body) = app.post("/api/v1/categories", Some(&admin), payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", message);
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["msg"], message);
        assert_eq!(errors[0]["param"], "title");
        assert_eq!(errors[0]["location"], "body");
    }

    assert_eq!(app.category_count().await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_boundary_titles_are_accepted(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, admin) = app.login_as("admin", RoleName::Admin).await;

    for title in ["abc".to_string(), "b".repeat(50), "Музыка".to_string()] {
        let (status, body) = app
            .post("/api/v1/categories", Some(&admin), json!({ "title": title }))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], title.as_str());
    }

    assert_eq!(app.category_count().await, 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_validation_error_carries_value(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, admin) = app.login_as("admin", RoleName::Admin).await;

    let (_, body) = app
        .post("/api/v1/categories", Some(&admin), json!({ "title": "ab" }))
        .await;

    assert_eq!(body["errors"][0]["value"], "ab");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_title(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, admin) = app.login_as("admin", RoleName::Admin).await;
    app.create_category("Music").await;

    let (status, body) = app
        .post("/api/v1/categories", Some(&admin), json!({ "title": "Music" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], "title should be unique");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_invalid_json_body(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, admin) = app.login_as("admin", RoleName::Admin).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/categories")
        .header("authorization", format!("Bearer {}", admin))
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        "Unable to parse request body, please send valid JSON"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_with_non_numeric_id(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = app.get("/api/v1/categories/test", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!([{
            "value": "test",
            "msg": "Parameter should be numeric",
            "param": "id",
            "location": "params"
        }])
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_missing_category(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = app.get("/api/v1/categories/9999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"], "Unable to find category record(s)");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_is_idempotent(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, admin) = app.login_as("admin", RoleName::Admin).await;
    let category = app.create_category("Science").await;
    let uri = format!("/api/v1/categories/{}", category.id);

    for _ in 0..2 {
        let (status, body) = app.delete(&uri, Some(&admin)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "Success: record was removed.");
    }

    let (status, _) = app.delete("/api/v1/categories/9999", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.category_count().await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_with_non_numeric_id(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, admin) = app.login_as("admin", RoleName::Admin).await;

    let (status, body) = app.delete("/api/v1/categories/abc", Some(&admin)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["param"], "id");
    assert_eq!(body["errors"][0]["location"], "params");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_fields_lists_both(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, admin) = app.login_as("admin", RoleName::Admin).await;

    let (status, body) = app.put("/api/v1/categories", Some(&admin), json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["param"], "id");
    assert_eq!(errors[1]["param"], "title");
    assert!(
        errors
            .iter()
            .all(|e| e["msg"] == "Please send required fields: id,title")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_id_out_of_range_is_field_error(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, admin) = app.login_as("admin", RoleName::Admin).await;

    let (status, body) = app
        .put(
            "/api/v1/categories",
            Some(&admin),
            json!({ "id": "99999999999", "title": "Music" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["param"], "id");
    assert_eq!(errors[0]["msg"], "Parameter should be numeric");
    assert_eq!(errors[0]["location"], "body");
    assert_eq!(errors[0]["value"], "99999999999");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_category(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, admin) = app.login_as("admin", RoleName::Admin).await;

    let (status, body) = app
        .put("/api/v1/categories", Some(&admin), json!({ "id": 9999, "title": "Nothing" }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"], "Unable to find category record(s)");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_category(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, admin) = app.login_as("admin", RoleName::Admin).await;
    let category = app.create_category("Science").await;

    let (status, body) = app
        .put(
            "/api/v1/categories",
            Some(&admin),
            json!({ "id": category.id.to_string(), "title": "Physics" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], category.id);
    assert_eq!(body["title"], "Physics");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_to_duplicate_title(pool: PgPool) {
    let app = setup_test_app(pool);
    let (_, admin) = app.login_as("admin", RoleName::Admin).await;
    app.create_category("Science").await;
    let other = app.create_category("History").await;

    let (status, body) = app
        .put(
            "/api/v1/categories",
            Some(&admin),
            json!({ "id": other.id, "title": "Science" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], "title should be unique");
}
