//! Tag normalization for item submissions.
//!
//! Clients may send tags either as a JSON array of strings or as a single
//! comma-separated string (the web form submits the latter). Both are
//! normalized to a trimmed array with empty entries removed before storage.

use serde::Deserialize;

/// Raw tag input accepted on creation endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    /// Already an array: `["textbook", "psychology"]`.
    List(Vec<String>),
    /// Comma-separated form string: `"textbook, psychology"`.
    CommaSeparated(String),
}

impl Default for TagsInput {
    fn default() -> Self {
        TagsInput::List(Vec::new())
    }
}

impl TagsInput {
    /// Normalize to the stored representation: trimmed, empty entries dropped.
    pub fn normalize(self) -> Vec<String> {
        match self {
            TagsInput::List(tags) => tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            TagsInput::CommaSeparated(s) => split_tag_string(&s),
        }
    }
}

/// Split a comma-separated tag string into trimmed, non-empty tags.
pub fn split_tag_string(s: &str) -> Vec<String> {
    s.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_drops_empties() {
        assert_eq!(split_tag_string("a, b ,, c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_empty_string() {
        assert!(split_tag_string("").is_empty());
        assert!(split_tag_string(" , ,").is_empty());
    }

    #[test]
    fn test_normalize_list_trims() {
        let input = TagsInput::List(vec![" bike ".into(), "".into(), "red".into()]);
        assert_eq!(input.normalize(), vec!["bike", "red"]);
    }

    #[test]
    fn test_normalize_comma_string() {
        let input = TagsInput::CommaSeparated("laptop, dell,charger".into());
        assert_eq!(input.normalize(), vec!["laptop", "dell", "charger"]);
    }

    #[test]
    fn test_deserialize_both_shapes() {
        let from_list: TagsInput = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(from_list.normalize(), vec!["a", "b"]);

        let from_string: TagsInput = serde_json::from_str(r#""a, b""#).unwrap();
        assert_eq!(from_string.normalize(), vec!["a", "b"]);
    }
}
