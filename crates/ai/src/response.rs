//! Parsing helpers for structured (JSON) model output.

use serde::de::DeserializeOwned;

use crate::error::AiError;

/// Parse a model reply as JSON of type `T`.
///
/// Models frequently wrap JSON output in a Markdown code fence even when
/// told not to; the fence is stripped before parsing.
pub fn parse_json_reply<T: DeserializeOwned>(raw: &str) -> Result<T, AiError> {
    let stripped = strip_code_fence(raw);
    serde_json::from_str(stripped).map_err(|e| AiError::MalformedResponse(e.to_string()))
}

/// Strip a surrounding ``` / ```json fence, if present.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence line.
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.trim_start_matches(['\r', '\n']);
    rest.strip_suffix("```").map_or(rest, str::trim).trim()
}
