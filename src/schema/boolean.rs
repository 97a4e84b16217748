//! Boolean validation.

use serde_json::Value;
use stillwater::Validation;

use crate::path::JsonPath;
use crate::ValidationResult;

use super::traits::SchemaLike;

/// Accepts `true`/`false` and the exact strings `"true"`/`"false"`.
///
/// Form fields frequently arrive as strings, hence the coercion. Anything else,
/// including `"1"`, `"yes"` and `"TRUE"`, is `invalid_type`.
///
/// ```rust
/// use fablecheck::prelude::*;
/// use serde_json::json;
///
/// let premium = Schema::boolean();
/// assert_eq!(premium.parse(&json!("false")).unwrap(), false);
/// assert!(premium.safe_parse(&json!(1)).is_failure());
/// ```
#[derive(Clone, Default)]
pub struct BooleanSchema {
    type_error_message: Option<String>,
}

impl BooleanSchema {
    pub fn new() -> Self {
        Self {
            type_error_message: None,
        }
    }

    /// Overrides the type error message.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.type_error_message = Some(message.into());
        self
    }
}

impl SchemaLike for BooleanSchema {
    type Output = bool;

    fn validate_input(&self, input: Option<&Value>, path: &JsonPath) -> ValidationResult<bool> {
        match input {
            Some(Value::Bool(b)) => Validation::Success(*b),
            Some(Value::String(s)) if s == "true" => Validation::Success(true),
            Some(Value::String(s)) if s == "false" => Validation::Success(false),
            _ => Validation::Failure(super::type_mismatch(
                path,
                "boolean",
                input,
                self.type_error_message.as_ref(),
            )),
        }
    }

    fn output_to_value(&self, output: bool) -> Value {
        Value::Bool(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_native_and_string_booleans() {
        let schema = BooleanSchema::new();
        assert!(schema.parse(&json!(true)).unwrap());
        assert!(!schema.parse(&json!(false)).unwrap());
        assert!(schema.parse(&json!("true")).unwrap());
        assert!(!schema.parse(&json!("false")).unwrap());
    }

    #[test]
    fn test_everything_else_is_type_error() {
        let schema = BooleanSchema::new();
        for value in [
            json!("TRUE"),
            json!("yes"),
            json!("1"),
            json!(1),
            json!(0),
            json!(null),
            json!([]),
        ] {
            let errors = schema.safe_parse(&value).into_result().unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.first().code, ErrorCode::InvalidType);
        }
    }

    #[test]
    fn test_custom_message() {
        let schema = BooleanSchema::new().error("choose yes or no");
        let errors = schema.safe_parse_input(None).into_result().unwrap_err();
        assert_eq!(errors.first().message, "choose yes or no");
    }
}
