//! Handlers for the `/ticket-exchange` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use campuslink_core::validate::require_all;
use campuslink_db::models::ticket_listing::{CreateTicketListing, TicketListingResponse};
use campuslink_db::repositories::TicketListingRepo;

use crate::error::AppResult;
use crate::response::CreatedResponse;
use crate::state::AppState;

/// GET /api/v1/ticket-exchange/listings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TicketListingResponse>>> {
    let listings = TicketListingRepo::list(&state.pool).await?;
    Ok(Json(listings.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/ticket-exchange/listings
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTicketListing>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    require_all(&[
        (&input.title, "title"),
        (&input.description, "description"),
        (&input.category, "category"),
        (&input.price, "price"),
        (&input.date, "date"),
        (&input.location, "location"),
        (&input.seller_id, "sellerId"),
    ])?;

    let listing = TicketListingRepo::create(&state.pool, input).await?;
    tracing::info!(id = listing.id, "Ticket listing created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Ticket listing created successfully",
            id: listing.id,
        }),
    ))
}
