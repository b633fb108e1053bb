//! Repository for the `lost_found_items` table.

use campuslink_core::types::DbId;
use sqlx::PgPool;

use crate::models::lost_found_item::{CreateLostFoundItem, LostFoundItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category, date, location, tags, image_url, \
                       image_hint, item_type, status, reporter_id, created_at";

/// Provides persistence operations for lost-and-found items.
pub struct LostFoundRepo;

impl LostFoundRepo {
    /// Insert a new lost or found report, returning the created row.
    ///
    /// New reports always start with status `active`. Tags are normalized
    /// before storage.
    pub async fn create(
        pool: &PgPool,
        input: CreateLostFoundItem,
    ) -> Result<LostFoundItem, sqlx::Error> {
        let tags = input.tags.normalize();
        let query = format!(
            "INSERT INTO lost_found_items
                (title, description, category, date, location, tags, image_url, image_hint,
                 item_type, reporter_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LostFoundItem>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.date)
            .bind(&input.location)
            .bind(&tags)
            .bind(&input.image_url)
            .bind(&input.image_hint)
            .bind(&input.item_type)
            .bind(&input.reporter_id)
            .fetch_one(pool)
            .await
    }

    /// List active items of the given type (`lost` or `found`), newest first.
    pub async fn list_by_type(
        pool: &PgPool,
        item_type: &str,
    ) -> Result<Vec<LostFoundItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lost_found_items
             WHERE item_type = $1 AND status = 'active'
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, LostFoundItem>(&query)
            .bind(item_type)
            .fetch_all(pool)
            .await
    }

    /// Find a lost-and-found item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LostFoundItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lost_found_items WHERE id = $1");
        sqlx::query_as::<_, LostFoundItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
