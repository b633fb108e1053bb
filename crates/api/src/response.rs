//! Shared response types for API handlers.

use campuslink_core::types::DbId;
use serde::Serialize;

/// Response body for successful creation endpoints: `{ "message", "id" }`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: DbId,
}
