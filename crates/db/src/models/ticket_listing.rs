//! Ticket listing model and DTOs.

use campuslink_core::display::{
    category_or_default, image_hint_or_derived, image_url_or_placeholder, DEFAULT_TICKET_CATEGORY,
};
use campuslink_core::tags::TagsInput;
use campuslink_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `ticket_listings` table.
#[derive(Debug, Clone, FromRow)]
pub struct TicketListing {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub price: String,
    pub date: String,
    pub location: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
    pub status: String,
    pub seller_id: String,
    pub created_at: Timestamp,
}

/// Request body for `POST /ticket-exchange/listings`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketListing {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: TagsInput,
    #[serde(default)]
    pub seller_id: String,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
}

/// API representation of a ticket listing with display defaults applied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketListingResponse {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub image_hint: String,
    pub category: String,
    pub price: String,
    pub date: String,
    pub location: String,
    pub tags: Vec<String>,
    pub status: String,
    pub seller_id: String,
    pub created_at: Timestamp,
}

impl From<TicketListing> for TicketListingResponse {
    fn from(row: TicketListing) -> Self {
        let category = category_or_default(row.category, DEFAULT_TICKET_CATEGORY);
        let image_hint = image_hint_or_derived(row.image_hint, &category, "ticket");
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: image_url_or_placeholder(row.image_url),
            image_hint,
            category,
            price: row.price,
            date: row.date,
            location: row.location,
            tags: row.tags,
            status: row.status,
            seller_id: row.seller_id,
            created_at: row.created_at,
        }
    }
}
