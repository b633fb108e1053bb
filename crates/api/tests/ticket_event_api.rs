//! Integration tests for the ticket-exchange and campus-events endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, expect_json, get, post_json};
use sqlx::PgPool;

fn valid_listing() -> serde_json::Value {
    serde_json::json!({
        "title": "Spring Concert - Row F",
        "description": "Two seats together, row F",
        "category": "Concert",
        "price": "25.00",
        "date": "2024-06-15",
        "location": "Campus Arena",
        "tags": ["concert", "music"],
        "sellerId": "seller-3",
    })
}

fn valid_event() -> serde_json::Value {
    serde_json::json!({
        "title": "Club Fair",
        "description": "Meet every student club on campus",
        "category": "Social",
        "date": "2024-09-02",
        "location": "Student Union Lawn",
        "tags": "clubs, fair",
        "organizerId": "org-12",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn ticket_listing_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = expect_json(
        post_json(app.clone(), "/api/v1/ticket-exchange/listings", valid_listing()).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(created["message"], "Ticket listing created successfully");
    assert!(created["id"].is_i64());

    let listings = body_json(get(app, "/api/v1/ticket-exchange/listings").await).await;
    let listings = listings.as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["title"], "Spring Concert - Row F");
    assert_eq!(listings[0]["status"], "available");
    assert_eq!(listings[0]["category"], "Concert");
    assert_eq!(listings[0]["tags"], serde_json::json!(["concert", "music"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn ticket_listing_missing_location_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = valid_listing();
    body.as_object_mut().unwrap().remove("location");
    let json = expect_json(
        post_json(app, "/api/v1/ticket-exchange/listings", body).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["error"], "Missing required field: location");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn ticket_listing_nulls_get_display_defaults(pool: PgPool) {
    sqlx::query(
        "INSERT INTO ticket_listings (title, description, price, date, location, seller_id)
         VALUES ('Bare listing', 'd', '10', '2024-01-01', 'Hall', 's')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let listings = body_json(get(app, "/api/v1/ticket-exchange/listings").await).await;
    let listing = &listings.as_array().unwrap()[0];
    assert_eq!(listing["category"], "Event Ticket");
    assert_eq!(listing["imageUrl"], "https://placehold.co/600x400.png");
    assert_eq!(listing["imageHint"], "event ticket");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn campus_event_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = expect_json(
        post_json(app.clone(), "/api/v1/events", valid_event()).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(created["message"], "Campus event promoted successfully");

    let events = body_json(get(app, "/api/v1/events").await).await;
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "Club Fair");
    assert_eq!(events[0]["category"], "Social");
    assert_eq!(events[0]["tags"], serde_json::json!(["clubs", "fair"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn campus_event_nulls_get_display_defaults(pool: PgPool) {
    sqlx::query(
        "INSERT INTO campus_events (title, description, date, location, organizer_id)
         VALUES ('Bare event', 'd', '2024-01-01', 'Quad', 'o')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let events = body_json(get(app, "/api/v1/events").await).await;
    let event = &events.as_array().unwrap()[0];
    assert_eq!(event["category"], "Campus Event");
    assert_eq!(event["imageHint"], "campus event");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn campus_event_missing_organizer_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = valid_event();
    body.as_object_mut().unwrap().remove("organizerId");
    let json = expect_json(
        post_json(app, "/api/v1/events", body).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["error"], "Missing required field: organizerId");
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
