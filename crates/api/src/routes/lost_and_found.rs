//! Route definitions for the `/lost-and-found` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::lost_and_found;
use crate::state::AppState;

/// Routes mounted at `/lost-and-found`.
///
/// ```text
/// GET    /items                -> list (filterable by ?type=lost|found)
/// POST   /items                -> create
/// POST   /items/{id}/matches   -> find_matches
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(lost_and_found::list).post(lost_and_found::create),
        )
        .route("/items/{id}/matches", post(lost_and_found::find_matches))
}
