//! String validation.
//!
//! [`StringSchema`] checks that a value is a string and then applies length,
//! email, URL and pattern constraints, optionally after trimming.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{ErrorCode, SchemaError};
use crate::path::JsonPath;
use crate::ValidationResult;

use super::traits::SchemaLike;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

#[derive(Clone)]
enum StringConstraint {
    MinLength {
        min: usize,
        message: Option<String>,
    },
    MaxLength {
        max: usize,
        message: Option<String>,
    },
    Email {
        message: Option<String>,
    },
    Url {
        message: Option<String>,
    },
    Pattern {
        regex: Regex,
        message: Option<String>,
    },
}

/// A validator for string values.
///
/// A non-string input yields exactly one `invalid_type` error. Otherwise every
/// violated constraint is reported, in the order the constraints were added.
///
/// # Example
///
/// ```rust
/// use fablecheck::prelude::*;
/// use serde_json::json;
///
/// let username = Schema::string()
///     .min_len(3)
///     .max_len(30)
///     .pattern(r"^[a-zA-Z0-9_-]+$")
///     .unwrap();
///
/// let errors = username.safe_parse(&json!("a!")).into_result().unwrap_err();
/// assert_eq!(errors.codes(), vec![ErrorCode::TooShort, ErrorCode::InvalidPattern]);
///
/// let errors = username.safe_parse(&json!(42)).into_result().unwrap_err();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.first().code, "invalid_type");
/// ```
#[derive(Clone)]
pub struct StringSchema {
    constraints: Vec<StringConstraint>,
    trim: bool,
    type_error_message: Option<String>,
}

impl StringSchema {
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
            trim: false,
            type_error_message: None,
        }
    }

    /// Requires at least `min` characters (Unicode scalar values).
    pub fn min_len(mut self, min: usize) -> Self {
        self.constraints
            .push(StringConstraint::MinLength { min, message: None });
        self
    }

    /// Allows at most `max` characters (Unicode scalar values).
    pub fn max_len(mut self, max: usize) -> Self {
        self.constraints
            .push(StringConstraint::MaxLength { max, message: None });
        self
    }

    /// Requires a `local@domain.tld` shaped address.
    pub fn email(mut self) -> Self {
        self.constraints
            .push(StringConstraint::Email { message: None });
        self
    }

    /// Requires an absolute URL.
    ///
    /// ```rust
    /// use fablecheck::prelude::*;
    /// use serde_json::json;
    ///
    /// let cover = Schema::string().url();
    /// assert!(cover.safe_parse(&json!("https://cdn.example.com/c.png")).is_success());
    /// assert!(cover.safe_parse(&json!("/c.png")).is_failure());
    /// ```
    pub fn url(mut self) -> Self {
        self.constraints.push(StringConstraint::Url { message: None });
        self
    }

    /// Requires a match for `pattern` anywhere in the string; anchor it with
    /// `^...$` to match the whole value.
    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        self.constraints.push(StringConstraint::Pattern {
            regex,
            message: None,
        });
        Ok(self)
    }

    /// Like [`pattern`](Self::pattern) for an already compiled regex.
    pub fn matches(mut self, regex: Regex) -> Self {
        self.constraints.push(StringConstraint::Pattern {
            regex,
            message: None,
        });
        self
    }

    /// Trims surrounding whitespace before every check. The trimmed string
    /// is the validated output.
    pub fn trim(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Overrides the message of the most recently added constraint, or of the
    /// type error when no constraint has been added yet.
    ///
    /// ```rust
    /// use fablecheck::prelude::*;
    /// use serde_json::json;
    ///
    /// let title = Schema::string().min_len(1).error("Title is required");
    ///
    /// let errors = title.safe_parse(&json!("")).into_result().unwrap_err();
    /// assert_eq!(errors.first().message, "Title is required");
    /// ```
    pub fn error(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.constraints.last_mut() {
            match last {
                StringConstraint::MinLength { message: m, .. } => *m = Some(message.into()),
                StringConstraint::MaxLength { message: m, .. } => *m = Some(message.into()),
                StringConstraint::Email { message: m } => *m = Some(message.into()),
                StringConstraint::Url { message: m } => *m = Some(message.into()),
                StringConstraint::Pattern { message: m, .. } => *m = Some(message.into()),
            }
        } else {
            self.type_error_message = Some(message.into());
        }
        self
    }
}

impl Default for StringSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLike for StringSchema {
    type Output = String;

    fn validate_input(&self, input: Option<&Value>, path: &JsonPath) -> ValidationResult<String> {
        let raw = match input {
            Some(Value::String(s)) => s.as_str(),
            _ => {
                return Validation::Failure(super::type_mismatch(
                    path,
                    "string",
                    input,
                    self.type_error_message.as_ref(),
                ))
            }
        };
        let s = if self.trim { raw.trim() } else { raw };

        let errors: Vec<SchemaError> = self
            .constraints
            .iter()
            .filter_map(|c| check_constraint(c, s, path))
            .collect();

        if errors.is_empty() {
            Validation::Success(s.to_string())
        } else {
            Validation::Failure(crate::SchemaErrors::from_vec(errors))
        }
    }

    fn output_to_value(&self, output: String) -> Value {
        Value::String(output)
    }
}

fn check_constraint(
    constraint: &StringConstraint,
    value: &str,
    path: &JsonPath,
) -> Option<SchemaError> {
    let (code, message, default_message) = match constraint {
        StringConstraint::MinLength { min, message } => {
            let len = value.chars().count();
            if len >= *min {
                return None;
            }
            (
                ErrorCode::TooShort,
                message,
                format!("must be at least {} characters, got {}", min, len),
            )
        }
        StringConstraint::MaxLength { max, message } => {
            let len = value.chars().count();
            if len <= *max {
                return None;
            }
            (
                ErrorCode::TooLong,
                message,
                format!("must be at most {} characters, got {}", max, len),
            )
        }
        StringConstraint::Email { message } => {
            if EMAIL.is_match(value) {
                return None;
            }
            (
                ErrorCode::InvalidEmail,
                message,
                "invalid email address".to_string(),
            )
        }
        StringConstraint::Url { message } => {
            if url::Url::parse(value).is_ok() {
                return None;
            }
            (ErrorCode::InvalidUrl, message, "invalid URL".to_string())
        }
        StringConstraint::Pattern { regex, message } => {
            if regex.is_match(value) {
                return None;
            }
            (
                ErrorCode::InvalidPattern,
                message,
                format!("must match pattern '{}'", regex.as_str()),
            )
        }
    };

    let message = message.clone().unwrap_or(default_message);
    Some(SchemaError::new(path.clone(), code, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn codes(schema: &StringSchema, value: Value) -> Vec<ErrorCode> {
        match schema.safe_parse(&value) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().map(|e| e.code).collect(),
        }
    }

    #[test]
    fn test_type_mismatch_short_circuits() {
        let schema = StringSchema::new()
            .min_len(5)
            .email()
            .url()
            .pattern("^x$")
            .unwrap();

        for value in [json!(42), json!(null), json!(true), json!([]), json!({})] {
            assert_eq!(codes(&schema, value), vec![ErrorCode::InvalidType]);
        }
    }

    #[test]
    fn test_missing_is_type_error() {
        let result = StringSchema::new().safe_parse_input(None);
        let errors = result.into_result().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().message, "expected string, received missing");
    }

    #[test]
    fn test_all_constraints_reported() {
        let schema = StringSchema::new()
            .min_len(10)
            .email()
            .url()
            .pattern(r"^\d+$")
            .unwrap();

        assert_eq!(
            codes(&schema, json!("abc")),
            vec![
                ErrorCode::TooShort,
                ErrorCode::InvalidEmail,
                ErrorCode::InvalidUrl,
                ErrorCode::InvalidPattern,
            ]
        );
    }

    #[test]
    fn test_trim_applies_before_checks_and_to_output() {
        let schema = StringSchema::new().trim().min_len(1).max_len(3);

        assert_eq!(codes(&schema, json!("   ")), vec![ErrorCode::TooShort]);
        assert_eq!(
            schema.safe_parse(&json!("  abc  ")).into_result().unwrap(),
            "abc"
        );
    }

    #[test]
    fn test_untrimmed_whitespace_counts() {
        let schema = StringSchema::new().max_len(3);
        assert_eq!(codes(&schema, json!(" abc ")), vec![ErrorCode::TooLong]);
    }

    #[test]
    fn test_email_shapes() {
        let schema = StringSchema::new().email();
        assert!(codes(&schema, json!("reader@example.com")).is_empty());
        assert!(codes(&schema, json!("a.b+c@sub.example.org")).is_empty());
        for bad in ["plain", "no@tld", "two@@example.com", "sp ace@example.com", "@example.com"] {
            assert_eq!(codes(&schema, json!(bad)), vec![ErrorCode::InvalidEmail], "{bad}");
        }
    }

    #[test]
    fn test_url_must_parse() {
        let schema = StringSchema::new().url();
        assert!(codes(&schema, json!("https://example.com/story/1?ch=2")).is_empty());
        assert!(codes(&schema, json!("mailto:author@example.com")).is_empty());
        assert_eq!(codes(&schema, json!("example.com")), vec![ErrorCode::InvalidUrl]);
        assert_eq!(codes(&schema, json!("")), vec![ErrorCode::InvalidUrl]);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let schema = StringSchema::new().min_len(3).max_len(3);
        assert!(codes(&schema, json!("物語だ")).is_empty());
        assert_eq!(codes(&schema, json!("🐉🐉")), vec![ErrorCode::TooShort]);
    }

    #[test]
    fn test_custom_messages() {
        let schema = StringSchema::new()
            .error("must be text")
            .min_len(2)
            .error("too short!");

        let errors = schema.safe_parse(&json!(1)).into_result().unwrap_err();
        assert_eq!(errors.first().message, "must be text");

        let errors = schema.safe_parse(&json!("a")).into_result().unwrap_err();
        assert_eq!(errors.first().message, "too short!");
    }

    #[test]
    fn test_pattern_message_names_pattern() {
        let schema = StringSchema::new().pattern("^[a-z]+$").unwrap();
        let errors = schema.safe_parse(&json!("ABC")).into_result().unwrap_err();
        assert!(errors.first().message.contains("^[a-z]+$"));
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        assert!(StringSchema::new().pattern("[unclosed").is_err());
    }
}
