//! Repository for the `marketplace_items` table.

use sqlx::PgPool;

use crate::models::marketplace_item::{CreateMarketplaceItem, MarketplaceItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category, price, tags, image_url, image_hint, \
                       seller_id, created_at";

/// Provides persistence operations for marketplace items.
pub struct MarketplaceRepo;

impl MarketplaceRepo {
    /// Insert a new marketplace item, returning the created row.
    ///
    /// Tags are normalized (trimmed, empty entries dropped) before storage.
    pub async fn create(
        pool: &PgPool,
        input: CreateMarketplaceItem,
    ) -> Result<MarketplaceItem, sqlx::Error> {
        let tags = input.tags.normalize();
        let query = format!(
            "INSERT INTO marketplace_items
                (title, description, category, price, tags, image_url, image_hint, seller_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MarketplaceItem>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.price)
            .bind(&tags)
            .bind(&input.image_url)
            .bind(&input.image_hint)
            .bind(&input.seller_id)
            .fetch_one(pool)
            .await
    }

    /// List all marketplace items, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MarketplaceItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marketplace_items ORDER BY created_at DESC");
        sqlx::query_as::<_, MarketplaceItem>(&query)
            .fetch_all(pool)
            .await
    }
}
