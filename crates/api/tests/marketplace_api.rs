//! HTTP-level integration tests for the marketplace endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, expect_json, get, post_json};
use sqlx::PgPool;

fn valid_item() -> serde_json::Value {
    serde_json::json!({
        "title": "Psych 101 Textbook",
        "description": "Lightly used, no highlights",
        "category": "Books",
        "price": "$25",
        "tags": ["textbook", "psychology"],
        "sellerId": "user-123",
    })
}

/// An item created via POST is returned by GET with the same core fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_then_list_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = expect_json(
        post_json(app.clone(), "/api/v1/marketplace/items", valid_item()).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(created["message"], "Marketplace item created successfully");
    assert!(created["id"].is_number());

    let listed = body_json(get(app, "/api/v1/marketplace/items").await).await;
    let items = listed.as_array().expect("list response must be an array");
    assert_eq!(items.len(), 1);

    let item = &items[0];
    assert_eq!(item["id"], created["id"]);
    assert_eq!(item["title"], "Psych 101 Textbook");
    assert_eq!(item["description"], "Lightly used, no highlights");
    assert_eq!(item["category"], "Books");
    assert_eq!(item["tags"], serde_json::json!(["textbook", "psychology"]));
    assert_eq!(item["sellerId"], "user-123");
    assert!(item["createdAt"].is_string());
}

/// Tags submitted as a comma-separated string come back as a trimmed array.
#[sqlx::test(migrations = "../db/migrations")]
async fn comma_separated_tags_are_normalized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = valid_item();
    body["tags"] = serde_json::json!("a, b ,, c");
    let response = post_json(app.clone(), "/api/v1/marketplace/items", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let listed = body_json(get(app, "/api/v1/marketplace/items").await).await;
    assert_eq!(listed[0]["tags"], serde_json::json!(["a", "b", "c"]));
}

/// A missing required field yields 400 and writes nothing.
#[sqlx::test(migrations = "../db/migrations")]
async fn missing_title_is_rejected_without_write(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = valid_item();
    body.as_object_mut().unwrap().remove("title");
    let json = expect_json(
        post_json(app.clone(), "/api/v1/marketplace/items", body).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("title"));

    let listed = body_json(get(app, "/api/v1/marketplace/items").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 0, "no row may be written");
}

/// A whitespace-only required field is treated as missing.
#[sqlx::test(migrations = "../db/migrations")]
async fn blank_price_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = valid_item();
    body["price"] = serde_json::json!("   ");
    let response = post_json(app, "/api/v1/marketplace/items", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Items stored without image URL or category are served with fixed defaults.
#[sqlx::test(migrations = "../db/migrations")]
async fn stored_nulls_are_served_with_defaults(pool: PgPool) {
    sqlx::query(
        "INSERT INTO marketplace_items (title, description, category, price, seller_id)
         VALUES ($1, $2, NULL, $3, $4)",
    )
    .bind("Mystery box")
    .bind("Contents unknown")
    .bind("$5")
    .bind("user-9")
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let listed = body_json(get(app, "/api/v1/marketplace/items").await).await;
    let item = &listed[0];

    assert_eq!(item["imageUrl"], "https://placehold.co/600x400.png");
    assert_eq!(item["category"], "Uncategorized");
    assert_eq!(item["imageHint"], "uncategorized");
}

/// Items are returned newest first.
#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_ordered_newest_first(pool: PgPool) {
    // Insert with explicit timestamps to make the ordering deterministic.
    for (title, offset_mins) in [("older", 10), ("newer", 0)] {
        sqlx::query(
            "INSERT INTO marketplace_items (title, description, category, price, seller_id, created_at)
             VALUES ($1, 'd', 'c', '$1', 'u', NOW() - make_interval(mins => $2))",
        )
        .bind(title)
        .bind(offset_mins)
        .execute(&pool)
        .await
        .unwrap();
    }

    let app = common::build_test_app(pool);
    let listed = body_json(get(app, "/api/v1/marketplace/items").await).await;

    assert_eq!(listed[0]["title"], "newer");
    assert_eq!(listed[1]["title"], "older");
}
