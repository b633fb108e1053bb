//! Handlers for the `/events` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use campuslink_core::validate::require_all;
use campuslink_db::models::campus_event::{CampusEventResponse, CreateCampusEvent};
use campuslink_db::repositories::CampusEventRepo;

use crate::error::AppResult;
use crate::response::CreatedResponse;
use crate::state::AppState;

/// GET /api/v1/events
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CampusEventResponse>>> {
    let events = CampusEventRepo::list(&state.pool).await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/events
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCampusEvent>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    require_all(&[
        (&input.title, "title"),
        (&input.description, "description"),
        (&input.category, "category"),
        (&input.date, "date"),
        (&input.location, "location"),
        (&input.organizer_id, "organizerId"),
    ])?;

    let event = CampusEventRepo::create(&state.pool, input).await?;
    tracing::info!(id = event.id, "Campus event promoted");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Campus event promoted successfully",
            id: event.id,
        }),
    ))
}
