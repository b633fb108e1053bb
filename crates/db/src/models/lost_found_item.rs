//! Lost-and-found item model and DTOs.

use campuslink_core::display::{
    category_or_default, image_hint_or_derived, image_url_or_placeholder,
    DEFAULT_LOST_FOUND_CATEGORY,
};
use campuslink_core::tags::TagsInput;
use campuslink_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `lost_found_items` table.
#[derive(Debug, Clone, FromRow)]
pub struct LostFoundItem {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub date: String,
    pub location: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
    pub item_type: String,
    pub status: String,
    pub reporter_id: String,
    pub created_at: Timestamp,
}

/// Request body for `POST /lost-and-found/items`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLostFoundItem {
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
    pub item_type: String,
    #[serde(default)]
    pub reporter_id: String,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
}

/// API representation of a lost-and-found item with display defaults applied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LostFoundItemResponse {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub image_hint: String,
    pub category: String,
    pub date: String,
    pub location: String,
    pub tags: Vec<String>,
    pub item_type: String,
    pub status: String,
    pub reporter_id: String,
    pub created_at: Timestamp,
}

impl From<LostFoundItem> for LostFoundItemResponse {
    fn from(row: LostFoundItem) -> Self {
        let category = category_or_default(row.category, DEFAULT_LOST_FOUND_CATEGORY);
        let image_hint = image_hint_or_derived(row.image_hint, &category, "item");
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
            item_type: row.item_type,
            status: row.status,
            reporter_id: row.reporter_id,
            created_at: row.created_at,
        }
    }
}
