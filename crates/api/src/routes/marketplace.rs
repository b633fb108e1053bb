//! Route definitions for the `/marketplace` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::marketplace;
use crate::state::AppState;

/// Routes mounted at `/marketplace`.
///
/// ```text
/// GET    /items   -> list
/// POST   /items   -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/items",
        get(marketplace::list).post(marketplace::create),
    )
}
