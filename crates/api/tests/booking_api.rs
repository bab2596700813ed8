//! HTTP-level tests for booking creation and date-range validation.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_listing, get, post_json_auth, register_and_login};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_booking_returns_201(pool: PgPool) {
    let host = register_and_login(&pool, "host").await;
    let listing_id = create_listing(&pool, &host, "Beach House").await;
    let guest = register_and_login(&pool, "guest").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/bookings",
        &guest,
        serde_json::json!({
            "listing_id": listing_id,
            "start_date": "2024-01-10",
            "end_date": "2024-01-12",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    // Read representation: display strings, not foreign keys.
    assert_eq!(json["user"], "guest");
    assert_eq!(json["listing"], "Beach House");
    assert_eq!(json["start_date"], "2024-01-10");
    assert_eq!(json["end_date"], "2024-01-12");
    assert!(json.get("user_id").is_none());
    assert!(json.get("listing_id").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inverted_date_range_rejected(pool: PgPool) {
    let host = register_and_login(&pool, "host").await;
    let listing_id = create_listing(&pool, &host, "Flat").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/bookings",
        &host,
        serde_json::json!({
            "listing_id": listing_id,
            "start_date": "2024-01-10",
            "end_date": "2024-01-09",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["errors"]["non_field_errors"],
        "End date must be after start date."
    );
}

/// Same-day bookings (start == end) are accepted. The date rule is a strict
/// less-than comparison; flip this test if product intent ever changes.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_same_day_booking_accepted(pool: PgPool) {
    let host = register_and_login(&pool, "host").await;
    let listing_id = create_listing(&pool, &host, "Flat").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/bookings",
        &host,
        serde_json::json!({
            "listing_id": listing_id,
            "start_date": "2024-01-10",
            "end_date": "2024-01-10",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_listing_rejected_as_field_error(pool: PgPool) {
    let guest = register_and_login(&pool, "guest").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/bookings",
        &guest,
        serde_json::json!({
            "listing_id": uuid::Uuid::new_v4(),
            "start_date": "2024-01-10",
            "end_date": "2024-01-12",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["errors"]["listing_id"]
        .as_str()
        .unwrap()
        .contains("does not exist"));
}

/// The booking user is always the authenticated requester; a client-supplied
/// `user` field in the payload is ignored.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_comes_from_token_not_payload(pool: PgPool) {
    let host = register_and_login(&pool, "host").await;
    let listing_id = create_listing(&pool, &host, "Flat").await;
    let guest = register_and_login(&pool, "actual-guest").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/bookings",
        &guest,
        serde_json::json!({
            "listing_id": listing_id,
            "start_date": "2024-05-01",
            "end_date": "2024-05-02",
            "user": "someone-else",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["user"], "actual-guest");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_and_retrieve_bookings(pool: PgPool) {
    let host = register_and_login(&pool, "host").await;
    let listing_id = create_listing(&pool, &host, "Flat").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json_auth(
            app,
            "/api/v1/bookings",
            &host,
            serde_json::json!({
                "listing_id": listing_id,
                "start_date": "2024-06-01",
                "end_date": "2024-06-03",
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/bookings").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/bookings/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
