//! Repository for the `ticket_listings` table.

use sqlx::PgPool;

use crate::models::ticket_listing::{CreateTicketListing, TicketListing};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category, price, date, location, tags, image_url, \
                       image_hint, status, seller_id, created_at";

/// Provides persistence operations for ticket listings.
pub struct TicketListingRepo;

impl TicketListingRepo {
    /// Insert a new ticket listing, returning the created row.
    ///
    /// New listings always start with status `available`. Tags are
    /// normalized before storage.
    pub async fn create(
        pool: &PgPool,
        input: CreateTicketListing,
    ) -> Result<TicketListing, sqlx::Error> {
        let tags = input.tags.normalize();
        let query = format!(
            "INSERT INTO ticket_listings
                (title, description, category, price, date, location, tags, image_url,
                 image_hint, seller_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TicketListing>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.price)
            .bind(&input.date)
            .bind(&input.location)
            .bind(&tags)
            .bind(&input.image_url)
            .bind(&input.image_hint)
            .bind(&input.seller_id)
            .fetch_one(pool)
            .await
    }

    /// List all ticket listings, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<TicketListing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ticket_listings ORDER BY created_at DESC");
        sqlx::query_as::<_, TicketListing>(&query)
            .fetch_all(pool)
            .await
    }
}
