//! Handlers for the `/lost-and-found` resource, including the match-check
//! endpoint for lost reports.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use campuslink_ai::matching::{find_lost_item_matches, MatchCandidate, MatchItem};
use campuslink_core::error::CoreError;
use campuslink_core::types::DbId;
use campuslink_core::validate::{require_all, validate_item_type, ITEM_TYPE_FOUND, ITEM_TYPE_LOST};
use campuslink_db::models::lost_found_item::{
    CreateLostFoundItem, LostFoundItem, LostFoundItemResponse,
};
use campuslink_db::repositories::LostFoundRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::CreatedResponse;
use crate::state::AppState;

/// Query parameters for `GET /lost-and-found/items`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// `lost` or `found`; any other value (or none) returns both lists.
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

/// Combined response when no type filter is given.
#[derive(Debug, Serialize)]
pub struct LostAndFoundLists {
    pub lost: Vec<LostFoundItemResponse>,
    pub found: Vec<LostFoundItemResponse>,
}

/// Response body for the match-check endpoint.
#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchCandidate>,
}

/// GET /api/v1/lost-and-found/items?type=lost|found
///
/// Only active items are returned, newest first. Without a recognized
/// `type` parameter both lists are returned as `{ "lost": [...], "found": [...] }`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Response> {
    match params.item_type.as_deref() {
        Some(t @ (ITEM_TYPE_LOST | ITEM_TYPE_FOUND)) => {
            let items = LostFoundRepo::list_by_type(&state.pool, t).await?;
            let items: Vec<LostFoundItemResponse> = items.into_iter().map(Into::into).collect();
            Ok(Json(items).into_response())
        }
        _ => {
            let lost = LostFoundRepo::list_by_type(&state.pool, ITEM_TYPE_LOST).await?;
            let found = LostFoundRepo::list_by_type(&state.pool, ITEM_TYPE_FOUND).await?;
            Ok(Json(LostAndFoundLists {
                lost: lost.into_iter().map(Into::into).collect(),
                found: found.into_iter().map(Into::into).collect(),
            })
            .into_response())
        }
    }
}

/// POST /api/v1/lost-and-found/items
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLostFoundItem>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    require_all(&[
        (&input.title, "title"),
        (&input.description, "description"),
        (&input.category, "category"),
        (&input.date, "date"),
        (&input.location, "location"),
        (&input.item_type, "itemType"),
        (&input.reporter_id, "reporterId"),
    ])?;
    validate_item_type(&input.item_type)?;

    let item = LostFoundRepo::create(&state.pool, input).await?;
    tracing::info!(id = item.id, item_type = %item.item_type, "Lost/found item reported");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Lost/Found item reported successfully",
            id: item.id,
        }),
    ))
}

/// POST /api/v1/lost-and-found/items/{id}/matches
///
/// Run the matching flow for a reported lost item against all active found
/// reports. An empty found set yields an empty match list without invoking
/// the model.
pub async fn find_matches(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MatchesResponse>> {
    let item = LostFoundRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LostFoundItem",
            id,
        }))?;

    if item.item_type != ITEM_TYPE_LOST {
        return Err(AppError::BadRequest(
            "Matches can only be requested for lost items".to_string(),
        ));
    }

    let found = LostFoundRepo::list_by_type(&state.pool, ITEM_TYPE_FOUND).await?;
    let lost_item = to_match_item(item);
    let found_items: Vec<MatchItem> = found.into_iter().map(to_match_item).collect();

    let matches = find_lost_item_matches(state.model.as_ref(), &lost_item, &found_items).await?;
    tracing::info!(
        id,
        candidates = matches.len(),
        "Lost-item match check completed"
    );

    Ok(Json(MatchesResponse { matches }))
}

/// Build the flow's item shape from a stored row, with display defaults
/// applied so the prompt never contains empty attributes.
fn to_match_item(row: LostFoundItem) -> MatchItem {
    let resp = LostFoundItemResponse::from(row);
    MatchItem {
        id: resp.id,
        title: resp.title,
        description: resp.description,
        category: resp.category,
        date: resp.date,
        location: resp.location,
        tags: resp.tags,
    }
}
