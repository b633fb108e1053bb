//! Route modules and the combined `/api/v1` router.

use axum::Router;

use crate::state::AppState;

pub mod ai;
pub mod auth;
pub mod events;
pub mod health;
pub mod lost_and_found;
pub mod marketplace;
pub mod ticket_exchange;

/// All routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/marketplace", marketplace::router())
        .nest("/lost-and-found", lost_and_found::router())
        .nest("/ticket-exchange", ticket_exchange::router())
        .nest("/events", events::router())
        .nest("/ai", ai::router())
}
