//! Repository for the `campus_events` table.

use sqlx::PgPool;

use crate::models::campus_event::{CampusEvent, CreateCampusEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category, date, location, tags, image_url, \
                       image_hint, organizer_id, created_at";

/// Provides persistence operations for campus events.
pub struct CampusEventRepo;

impl CampusEventRepo {
    /// Insert a new campus event, returning the created row.
    ///
    /// Tags are normalized (trimmed, empty entries dropped) before storage.
    pub async fn create(pool: &PgPool, input: CreateCampusEvent) -> Result<CampusEvent, sqlx::Error> {
        let tags = input.tags.normalize();
        let query = format!(
            "INSERT INTO campus_events
                (title, description, category, date, location, tags, image_url, image_hint,
                 organizer_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CampusEvent>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.date)
            .bind(&input.location)
            .bind(&tags)
            .bind(&input.image_url)
            .bind(&input.image_hint)
            .bind(&input.organizer_id)
            .fetch_one(pool)
            .await
    }

    /// List all campus events, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<CampusEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campus_events ORDER BY created_at DESC");
        sqlx::query_as::<_, CampusEvent>(&query)
            .fetch_all(pool)
            .await
    }
}
