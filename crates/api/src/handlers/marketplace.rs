//! Handlers for the `/marketplace` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use campuslink_core::validate::require_all;
use campuslink_db::models::marketplace_item::{CreateMarketplaceItem, MarketplaceItemResponse};
use campuslink_db::repositories::MarketplaceRepo;

use crate::error::AppResult;
use crate::response::CreatedResponse;
use crate::state::AppState;

/// GET /api/v1/marketplace/items
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MarketplaceItemResponse>>> {
    let items = MarketplaceRepo::list(&state.pool).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/marketplace/items
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMarketplaceItem>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    require_all(&[
        (&input.title, "title"),
        (&input.description, "description"),
        (&input.category, "category"),
        (&input.price, "price"),
        (&input.seller_id, "sellerId"),
    ])?;

    let item = MarketplaceRepo::create(&state.pool, input).await?;
    tracing::info!(id = item.id, "Marketplace item created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Marketplace item created successfully",
            id: item.id,
        }),
    ))
}
