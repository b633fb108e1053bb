//! Marketplace item model and DTOs.

use campuslink_core::display::{
    category_or_default, image_hint_or_derived, image_url_or_placeholder,
    DEFAULT_MARKETPLACE_CATEGORY,
};
use campuslink_core::tags::TagsInput;
use campuslink_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `marketplace_items` table.
#[derive(Debug, Clone, FromRow)]
pub struct MarketplaceItem {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub price: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
    pub seller_id: String,
    pub created_at: Timestamp,
}

/// Request body for `POST /marketplace/items`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMarketplaceItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub tags: TagsInput,
    #[serde(default)]
    pub seller_id: String,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
}

/// API representation of a marketplace item with display defaults applied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceItemResponse {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub image_hint: String,
    pub category: String,
    pub price: String,
    pub tags: Vec<String>,
    pub seller_id: String,
    pub created_at: Timestamp,
}

impl From<MarketplaceItem> for MarketplaceItemResponse {
    fn from(row: MarketplaceItem) -> Self {
        let category = category_or_default(row.category, DEFAULT_MARKETPLACE_CATEGORY);
        let image_hint = image_hint_or_derived(row.image_hint, &category, "item");
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: image_url_or_placeholder(row.image_url),
            image_hint,
            category,
            price: row.price,
            tags: row.tags,
            seller_id: row.seller_id,
            created_at: row.created_at,
        }
    }
}
