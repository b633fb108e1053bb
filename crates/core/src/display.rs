//! Read-time display defaults for stored items.
//!
//! Older documents may lack an image URL, image hint, or category. The API
//! never serves a null for these fields; missing values are replaced with
//! fixed defaults appropriate to the collection.

/// Placeholder served when an item has no stored image URL.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400.png";

/// Default category label for marketplace items.
pub const DEFAULT_MARKETPLACE_CATEGORY: &str = "Uncategorized";

/// Default category label for lost-and-found items.
pub const DEFAULT_LOST_FOUND_CATEGORY: &str = "Uncategorized";

/// Default category label for ticket listings.
pub const DEFAULT_TICKET_CATEGORY: &str = "Event Ticket";

/// Default category label for campus events.
pub const DEFAULT_EVENT_CATEGORY: &str = "Campus Event";

/// Resolve a stored image URL, falling back to the placeholder.
pub fn image_url_or_placeholder(stored: Option<String>) -> String {
    stored
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string())
}

/// Resolve a stored category, falling back to the collection default.
pub fn category_or_default(stored: Option<String>, default_label: &str) -> String {
    stored
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default_label.to_string())
}

/// Derive an image hint when none was supplied: the lowercased category,
/// or the given fallback when the category is also missing.
pub fn image_hint_or_derived(stored: Option<String>, category: &str, fallback: &str) -> String {
    if let Some(hint) = stored.filter(|s| !s.is_empty()) {
        return hint;
    }
    if category.is_empty() {
        fallback.to_string()
    } else {
        category.to_lowercase()
    }
}
