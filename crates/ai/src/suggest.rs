//! Tag and category suggestion flow for marketplace items.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::client::GenerativeModel;
use crate::error::AiError;
use crate::response::parse_json_reply;

/// Suggested category and tags for an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagSuggestion {
    /// A single, concise category, e.g. `"Electronics"`.
    pub category: String,
    /// 3-5 relevant, lowercase tags.
    pub tags: Vec<String>,
}

/// Suggest a category and tags from an item's title and description.
pub async fn suggest_tags_and_category(
    model: &dyn GenerativeModel,
    title: &str,
    description: &str,
) -> Result<TagSuggestion, AiError> {
    let prompt = render_suggest_prompt(title, description);
    let raw = model.complete(&prompt).await?;
    parse_json_reply(&raw)
}

fn render_suggest_prompt(title: &str, description: &str) -> String {
    let mut prompt = String::from(
        "You are an expert at categorizing items for a student marketplace. Based \
         on the item title and description, provide a single, concise category and \
         an array of 3 to 5 relevant, lowercase tags.\n\n",
    );
    let _ = writeln!(prompt, "Item Title: {title}");
    let _ = writeln!(prompt, "Item Description: {description}");
    prompt.push_str(
        "\nRespond with a JSON object of the form \
         {\"category\": \"<category>\", \"tags\": [\"<tag>\", ...]}.",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    struct MockModel(String);

    #[async_trait]
    impl GenerativeModel for MockModel {
        async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_parses_suggestion() {
        let model =
            MockModel(r#"{"category": "Books", "tags": ["textbook", "psychology", "study"]}"#.into());
        let suggestion = suggest_tags_and_category(&model, "Psych 101 textbook", "Intro book")
            .await
            .unwrap();
        assert_eq!(suggestion.category, "Books");
        assert_eq!(suggestion.tags.len(), 3);
    }

    #[tokio::test]
    async fn test_malformed_reply_is_error() {
        let model = MockModel("Books: textbook, psychology".into());
        let err = suggest_tags_and_category(&model, "Psych 101 textbook", "Intro book")
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::MalformedResponse(_)));
    }
}
