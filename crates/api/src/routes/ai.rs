//! Route definitions for the `/ai` helper flows.

use axum::routing::post;
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// Routes mounted at `/ai`.
///
/// ```text
/// POST   /generate-description   -> description
/// POST   /suggest-tags           -> suggest_tags
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-description", post(ai::description))
        .route("/suggest-tags", post(ai::suggest_tags))
}
