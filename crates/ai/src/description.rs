//! Marketplace description generation flow.

use std::fmt::Write as _;

use crate::client::GenerativeModel;
use crate::error::AiError;

/// Generate a short, friendly product description from a title and category.
///
/// Output is plain text (2-3 sentences), trimmed.
pub async fn generate_description(
    model: &dyn GenerativeModel,
    title: &str,
    category: &str,
) -> Result<String, AiError> {
    let prompt = render_description_prompt(title, category);
    let raw = model.complete(&prompt).await?;
    Ok(raw.trim().to_string())
}

fn render_description_prompt(title: &str, category: &str) -> String {
    let mut prompt = String::from(
        "You are an expert copywriter for a student marketplace app. Your goal is \
         to write a short, friendly, and appealing product description based on an \
         item's title and category.\n\n\
         The tone should be casual and perfect for a student-to-student \
         marketplace. Aim for 2-3 sentences.\n\n",
    );
    let _ = writeln!(prompt, "Item Title: {title}");
    let _ = writeln!(prompt, "Item Category: {category}");
    prompt.push_str("\nGenerate a compelling description for this item.");
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
    async fn test_generates_trimmed_text() {
        let model = MockModel("  Great lamp, perfect for late-night study sessions.  \n".into());
        let description = generate_description(&model, "Desk lamp", "Furniture")
            .await
            .unwrap();
        assert_eq!(
            description,
            "Great lamp, perfect for late-night study sessions."
        );
    }

    #[test]
    fn test_prompt_includes_title_and_category() {
        let prompt = render_description_prompt("Desk lamp", "Furniture");
        assert!(prompt.contains("Item Title: Desk lamp"));
        assert!(prompt.contains("Item Category: Furniture"));
    }
}
