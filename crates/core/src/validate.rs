//! Field-presence validation for creation requests.

use crate::error::CoreError;

/// Valid lost-and-found item types.
pub const ITEM_TYPE_LOST: &str = "lost";
pub const ITEM_TYPE_FOUND: &str = "found";

/// Validate that a required string field is present and non-empty after
/// trimming. Returns the original error message shape used by all creation
/// endpoints.
pub fn require_non_empty(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Missing required field: {field}"
        )));
    }
    Ok(())
}

/// Validate every `(value, name)` pair, reporting the first missing field.
pub fn require_all(fields: &[(&str, &str)]) -> Result<(), CoreError> {
    for (value, name) in fields {
        require_non_empty(value, name)?;
    }
    Ok(())
}

/// Validate that an item type is `"lost"` or `"found"`.
pub fn validate_item_type(item_type: &str) -> Result<(), CoreError> {
    if item_type == ITEM_TYPE_LOST || item_type == ITEM_TYPE_FOUND {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid item type".to_string()))
    }
}
