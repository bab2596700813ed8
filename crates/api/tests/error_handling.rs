//! Error-shape tests: response bodies for the main failure classes.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_not_found_error_shape(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/listings/{}", uuid::Uuid::new_v4())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].as_str().unwrap().contains("Listing"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_validation_error_is_field_keyed(pool: PgPool) {
    let token = common::register_and_login(&pool, "user").await;
    let listing_id = common::create_listing(&pool, &token, "Shape Check").await;

    let app = common::build_test_app(pool);
    let response = common::post_json_auth(
        app,
        "/api/v1/reviews",
        &token,
        serde_json::json!({"listing_id": listing_id, "rating": 9, "comment": "x"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    // Field-keyed error object, no flat "error" string.
    assert!(json["errors"].is_object());
    assert!(json.get("error").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_json_body_answers_in_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post_raw(app, "/api/v1/auth/login", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_body_field_answers_in_json(pool: PgPool) {
    let token = common::register_and_login(&pool, "user").await;

    // No `rating` or `listing_id`: deserialization fails before the handler.
    let app = common::build_test_app(pool);
    let response = common::post_json_auth(
        app,
        "/api/v1/reviews",
        &token,
        serde_json::json!({"comment": "x"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_uuid_path_is_client_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/listings/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_route_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
