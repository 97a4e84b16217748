//! Enumerated string validation.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ErrorCode, SchemaError, SchemaErrors};
use crate::path::JsonPath;
use crate::ValidationResult;

use super::traits::SchemaLike;

/// Accepts only strings from a fixed set.
///
/// Any other input, strings and non-strings alike, yields one `invalid_enum`
/// error listing the allowed values.
///
/// ```rust
/// use fablecheck::prelude::*;
/// use serde_json::json;
///
/// let difficulty = Schema::enum_type(["easy", "medium", "hard"]);
///
/// let errors = difficulty.safe_parse(&json!("brutal")).into_result().unwrap_err();
/// assert_eq!(errors.first().code, "invalid_enum");
/// assert_eq!(
///     errors.first().message,
///     "expected one of 'easy' | 'medium' | 'hard', received 'brutal'"
/// );
/// ```
#[derive(Clone)]
pub struct EnumSchema {
    values: Vec<String>,
    message: Option<String>,
}

impl EnumSchema {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            message: None,
        }
    }

    /// The allowed values, in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Overrides the rejection message.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn rejection(&self, input: Option<&Value>) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        let allowed = self
            .values
            .iter()
            .map(|v| format!("'{}'", v))
            .collect::<Vec<_>>()
            .join(" | ");
        let got = match input {
            Some(Value::String(s)) => format!("'{}'", s),
            other => super::received(other).to_string(),
        };
        format!("expected one of {}, received {}", allowed, got)
    }
}

impl SchemaLike for EnumSchema {
    type Output = String;

    fn validate_input(&self, input: Option<&Value>, path: &JsonPath) -> ValidationResult<String> {
        match input {
            Some(Value::String(s)) if self.values.iter().any(|v| v == s) => {
                Validation::Success(s.clone())
            }
            _ => Validation::Failure(SchemaErrors::single(SchemaError::new(
                path.clone(),
                ErrorCode::InvalidEnum,
                self.rejection(input),
            ))),
        }
    }

    fn output_to_value(&self, output: String) -> Value {
        Value::String(output)
    }
}
