//! Lost-item matching flow.
//!
//! Given one newly reported lost item and the set of active found reports,
//! asks the model for a ranked, confidence-scored list of plausible matches
//! with one-sentence justifications. The flow itself computes no similarity
//! score; it enforces the response contract:
//!
//! - an empty found-item list short-circuits to an empty result with no
//!   model call;
//! - every confidence must lie in [0.0, 1.0], otherwise the whole response
//!   is rejected as a contract violation;
//! - candidates whose id is not in the supplied found-item set are dropped
//!   server-side.

use std::collections::HashSet;
use std::fmt::Write as _;

use campuslink_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::client::GenerativeModel;
use crate::error::AiError;
use crate::response::parse_json_reply;

/// Item attributes supplied to the matching prompt, for both the lost item
/// and each found item.
#[derive(Debug, Clone, Serialize)]
pub struct MatchItem {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub location: String,
    pub tags: Vec<String>,
}

/// One candidate match returned by the flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Id of the found item that is a potential match.
    pub id: DbId,
    /// Likelihood of a match, in [0.0, 1.0].
    pub confidence: f64,
    /// One-sentence explanation of why this is a potential match.
    pub reason: String,
}

/// Raw response shape expected from the model.
#[derive(Debug, Deserialize)]
struct MatchReply {
    matches: Vec<MatchCandidate>,
}

/// Find potential matches for a lost item among the given found items.
///
/// Returns an empty list when `found_items` is empty (no model call) or
/// when the model finds no plausible match.
pub async fn find_lost_item_matches(
    model: &dyn GenerativeModel,
    lost_item: &MatchItem,
    found_items: &[MatchItem],
) -> Result<Vec<MatchCandidate>, AiError> {
    if found_items.is_empty() {
        return Ok(Vec::new());
    }

    let prompt = render_match_prompt(lost_item, found_items);
    let raw = model.complete(&prompt).await?;
    let reply: MatchReply = parse_json_reply(&raw)?;

    validate_candidates(reply.matches, found_items)
}

/// Enforce the output contract on parsed candidates.
///
/// Out-of-range confidence rejects the whole response; unknown ids are
/// dropped with a warning.
fn validate_candidates(
    candidates: Vec<MatchCandidate>,
    found_items: &[MatchItem],
) -> Result<Vec<MatchCandidate>, AiError> {
    for candidate in &candidates {
        if !(0.0..=1.0).contains(&candidate.confidence) {
            return Err(AiError::ContractViolation(format!(
                "confidence {} for item {} is outside [0.0, 1.0]",
                candidate.confidence, candidate.id
            )));
        }
    }

    let known_ids: HashSet<DbId> = found_items.iter().map(|item| item.id).collect();
    let (kept, dropped): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|c| known_ids.contains(&c.id));

    for candidate in &dropped {
        tracing::warn!(
            id = candidate.id,
            "Dropping match candidate not in the supplied found-item set"
        );
    }

    Ok(kept)
}

/// Render the comparison prompt enumerating the lost item and every found
/// item.
fn render_match_prompt(lost_item: &MatchItem, found_items: &[MatchItem]) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are a helpful assistant at a university's lost and found department. \
         Your task is to find potential matches for a newly reported lost item from \
         a list of existing found items.\n\n",
    );

    prompt.push_str("Analyze the details of the lost item:\n");
    let _ = writeln!(prompt, "- Title: {}", lost_item.title);
    let _ = writeln!(prompt, "- Description: {}", lost_item.description);
    let _ = writeln!(prompt, "- Category: {}", lost_item.category);
    let _ = writeln!(prompt, "- Date Lost: {}", lost_item.date);
    let _ = writeln!(prompt, "- Location Lost: {}", lost_item.location);
    if !lost_item.tags.is_empty() {
        let _ = writeln!(prompt, "- Tags: {}", lost_item.tags.join(", "));
    }

    prompt.push_str("\nNow, compare it against the following found items:\n");
    for item in found_items {
        let _ = writeln!(prompt, "- Item ID: {}", item.id);
        let _ = writeln!(prompt, "  - Title: {}", item.title);
        let _ = writeln!(prompt, "  - Description: {}", item.description);
        let _ = writeln!(prompt, "  - Category: {}", item.category);
        let _ = writeln!(prompt, "  - Date Found: {}", item.date);
        let _ = writeln!(prompt, "  - Location Found: {}", item.location);
        if !item.tags.is_empty() {
            let _ = writeln!(prompt, "  - Tags: {}", item.tags.join(", "));
        }
        prompt.push_str("---\n");
    }

    prompt.push_str(
        "\nFor each found item, determine if it is a plausible match. Consider \
         similarities in title, description (distinguishing features, brands), \
         category, location, tags, and the proximity of the dates. A match is \
         plausible even if not all details are identical.\n\n\
         Respond with a JSON object of the form \
         {\"matches\": [{\"id\": <found item id>, \"confidence\": <0.0 to 1.0>, \
         \"reason\": \"<one sentence>\"}]}. \
         Return a list of plausible matches with a confidence score (0.0 to 1.0) \
         and a brief reason. If there are no good matches, return an empty list.",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    /// Mock model returning a canned reply and counting invocations.
    struct MockModel {
        reply: String,
        calls: AtomicUsize,
    }

    impl MockModel {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerativeModel for MockModel {
        async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    fn item(id: DbId, title: &str) -> MatchItem {
        MatchItem {
            id,
            title: title.to_string(),
            description: "black, scratched corner".to_string(),
            category: "Electronics".to_string(),
            date: "2024-05-01".to_string(),
            location: "Library".to_string(),
            tags: vec!["laptop".to_string()],
        }
    }

    #[tokio::test]
    async fn test_empty_found_list_short_circuits_without_model_call() {
        let model = MockModel::new(r#"{"matches": []}"#);
        let lost = item(1, "Lost laptop");

        let matches = find_lost_item_matches(&model, &lost, &[]).await.unwrap();

        assert!(matches.is_empty());
        assert_eq!(model.call_count(), 0, "model must not be invoked");
    }

    #[tokio::test]
    async fn test_returns_parsed_candidates() {
        let model =
            MockModel::new(r#"{"matches": [{"id": 2, "confidence": 0.85, "reason": "Same brand and location."}]}"#);
        let lost = item(1, "Lost laptop");
        let found = vec![item(2, "Found laptop")];

        let matches = find_lost_item_matches(&model, &lost, &found).await.unwrap();

        assert_eq!(model.call_count(), 1);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 2);
        assert!((matches[0].confidence - 0.85).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_out_of_range_confidence_is_contract_violation() {
        let model =
            MockModel::new(r#"{"matches": [{"id": 2, "confidence": 1.5, "reason": "Too sure."}]}"#);
        let lost = item(1, "Lost laptop");
        let found = vec![item(2, "Found laptop")];

        let err = find_lost_item_matches(&model, &lost, &found)
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::ContractViolation(_)));
    }

    #[tokio::test]
    async fn test_unknown_ids_are_dropped() {
        let model = MockModel::new(
            r#"{"matches": [
                {"id": 2, "confidence": 0.9, "reason": "Matches closely."},
                {"id": 99, "confidence": 0.8, "reason": "Not a real found item."}
            ]}"#,
        );
        let lost = item(1, "Lost laptop");
        let found = vec![item(2, "Found laptop")];

        let matches = find_lost_item_matches(&model, &lost, &found).await.unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 2);
    }

    #[tokio::test]
    async fn test_malformed_reply_is_error() {
        let model = MockModel::new("I could not find any matches, sorry!");
        let lost = item(1, "Lost laptop");
        let found = vec![item(2, "Found laptop")];

        let err = find_lost_item_matches(&model, &lost, &found)
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::MalformedResponse(_)));
    }

    #[test]
    fn test_prompt_enumerates_all_items() {
        let lost = item(1, "Lost laptop");
        let found = vec![item(2, "Found laptop"), item(3, "Found charger")];

        let prompt = render_match_prompt(&lost, &found);

        assert!(prompt.contains("Title: Lost laptop"));
        assert!(prompt.contains("Item ID: 2"));
        assert!(prompt.contains("Item ID: 3"));
        assert!(prompt.contains("Date Lost: 2024-05-01"));
        assert!(prompt.contains("Tags: laptop"));
    }

    #[test]
    fn test_prompt_omits_empty_tags() {
        let mut lost = item(1, "Lost keys");
        lost.tags.clear();
        let found = vec![item(2, "Found keys")];

        let prompt = render_match_prompt(&lost, &found);

        assert!(!prompt.contains("- Tags: \n"));
    }
}
