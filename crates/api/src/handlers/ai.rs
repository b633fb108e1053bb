//! Handlers for the `/ai` helper flows (description generation, tag
//! suggestion).

use axum::extract::State;
use axum::Json;
use campuslink_ai::description::generate_description;
use campuslink_ai::suggest::{suggest_tags_and_category, TagSuggestion};
use campuslink_core::validate::require_all;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /ai/generate-description`.
#[derive(Debug, Deserialize)]
pub struct GenerateDescriptionRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
}

/// Response body for `POST /ai/generate-description`.
#[derive(Debug, Serialize)]
pub struct GenerateDescriptionResponse {
    pub description: String,
}

/// Request body for `POST /ai/suggest-tags`.
#[derive(Debug, Deserialize)]
pub struct SuggestTagsRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// POST /api/v1/ai/generate-description
pub async fn description(
    State(state): State<AppState>,
    Json(input): Json<GenerateDescriptionRequest>,
) -> AppResult<Json<GenerateDescriptionResponse>> {
    require_all(&[(&input.title, "title"), (&input.category, "category")])?;

    let description =
        generate_description(state.model.as_ref(), &input.title, &input.category).await?;
    Ok(Json(GenerateDescriptionResponse { description }))
}

/// POST /api/v1/ai/suggest-tags
pub async fn suggest_tags(
    State(state): State<AppState>,
    Json(input): Json<SuggestTagsRequest>,
) -> AppResult<Json<TagSuggestion>> {
    require_all(&[
        (&input.title, "title"),
        (&input.description, "description"),
    ])?;

    let suggestion =
        suggest_tags_and_category(state.model.as_ref(), &input.title, &input.description).await?;
    Ok(Json(suggestion))
}
