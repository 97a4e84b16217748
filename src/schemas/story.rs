//! Story request shapes.

use serde::Deserialize;

use crate::schema::{ObjectSchema, Schema, SchemaLike};

pub const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

/// Payload for creating a story.
///
/// `isPremium` defaults to `false` when missing or null, so the validated
/// object always carries it.
///
/// ```rust
/// use fablecheck::prelude::*;
/// use fablecheck::schemas::story;
/// use serde_json::json;
///
/// let out = story::create()
///     .parse(&json!({"title": "Ash", "genre": "fantasy", "difficulty": "hard"}))
///     .unwrap();
/// assert_eq!(out["isPremium"], json!(false));
/// ```
pub fn create() -> ObjectSchema {
    Schema::object()
        .field("title", Schema::string().min_len(1).max_len(200))
        .field("description", Schema::string().max_len(2000).optional())
        .field("genre", Schema::string().min_len(1))
        .field("difficulty", Schema::enum_type(DIFFICULTIES))
        .field(
            "tags",
            Schema::array(Schema::string().min_len(1).max_len(50))
                .max_len(10)
                .optional(),
        )
        .field("isPremium", Schema::boolean().default(false))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoryInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub genre: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub is_premium: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_minimal_story() {
        let input: CreateStoryInput = create()
            .parse_into(&json!({"title": "Ash", "genre": "fantasy", "difficulty": "easy"}))
            .unwrap();

        assert_eq!(input.difficulty, Difficulty::Easy);
        assert!(!input.is_premium);
        assert_eq!(input.tags, None);
        assert_eq!(input.description, None);
    }

    #[test]
    fn test_null_premium_defaults() {
        let input: CreateStoryInput = create()
            .parse_into(&json!({
                "title": "Ash",
                "genre": "fantasy",
                "difficulty": "medium",
                "isPremium": null,
                "tags": ["dragons"]
            }))
            .unwrap();

        assert!(!input.is_premium);
        assert_eq!(input.tags, Some(vec!["dragons".to_string()]));
    }

    #[test]
    fn test_premium_string_coerced() {
        let input: CreateStoryInput = create()
            .parse_into(&json!({
                "title": "Ash",
                "genre": "fantasy",
                "difficulty": "hard",
                "isPremium": "true"
            }))
            .unwrap();
        assert!(input.is_premium);
    }

    #[test]
    fn test_tag_errors_are_indexed() {
        let tags: Vec<String> = (0..11).map(|i| format!("t{}", i)).collect();
        let mut body = json!({
            "title": "Ash",
            "genre": "fantasy",
            "difficulty": "easy",
            "tags": tags
        });
        body["tags"][4] = json!("");

        let errors = create().safe_parse(&body).into_result().unwrap_err();
        let found: Vec<_> = errors.iter().map(|e| (e.path.dotted(), e.code)).collect();
        assert_eq!(
            found,
            vec![
                ("tags".to_string(), ErrorCode::TooLong),
                ("tags.4".to_string(), ErrorCode::TooShort),
            ]
        );
    }

    #[test]
    fn test_every_field_invalid() {
        let errors = create()
            .safe_parse(&json!({
                "title": "",
                "description": "d".repeat(2001),
                "genre": 7,
                "difficulty": "nightmare",
                "isPremium": "maybe"
            }))
            .into_result()
            .unwrap_err();

        assert_eq!(
            errors.codes(),
            vec![
                ErrorCode::TooShort,
                ErrorCode::TooLong,
                ErrorCode::InvalidType,
                ErrorCode::InvalidEnum,
            ]
        );
        assert_eq!(errors.len(), 5);
    }
}
