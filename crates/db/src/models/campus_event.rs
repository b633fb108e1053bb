//! Campus event model and DTOs.

use campuslink_core::display::{
    category_or_default, image_hint_or_derived, image_url_or_placeholder, DEFAULT_EVENT_CATEGORY,
};
use campuslink_core::tags::TagsInput;
use campuslink_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `campus_events` table.
#[derive(Debug, Clone, FromRow)]
pub struct CampusEvent {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub date: String,
    pub location: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
    pub organizer_id: String,
    pub created_at: Timestamp,
}

/// Request body for `POST /events`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampusEvent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: TagsInput,
    #[serde(default)]
    pub organizer_id: String,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
}

/// API representation of a campus event with display defaults applied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusEventResponse {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub image_hint: String,
    pub category: String,
    pub date: String,
    pub location: String,
    pub tags: Vec<String>,
    pub organizer_id: String,
    pub created_at: Timestamp,
}

impl From<CampusEvent> for CampusEventResponse {
    fn from(row: CampusEvent) -> Self {
        let category = category_or_default(row.category, DEFAULT_EVENT_CATEGORY);
        let image_hint = image_hint_or_derived(row.image_hint, &category, "event campus");
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: image_url_or_placeholder(row.image_url),
            image_hint,
            category,
            date: row.date,
            location: row.location,
            tags: row.tags,
            organizer_id: row.organizer_id,
            created_at: row.created_at,
        }
    }
}
