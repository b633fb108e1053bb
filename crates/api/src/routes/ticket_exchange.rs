//! Route definitions for the `/ticket-exchange` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::ticket_exchange;
use crate::state::AppState;

/// Routes mounted at `/ticket-exchange`.
///
/// ```text
/// GET    /listings   -> list
/// POST   /listings   -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/listings",
        get(ticket_exchange::list).post(ticket_exchange::create),
    )
}
