//! The validator contract.
//!
//! [`SchemaLike`] is the one trait every validator implements. A new validator
//! only provides `validate_input` and `output_to_value`; parsing entry points
//! and the `optional`/`nullable`/`default` modifiers come for free.
//! [`ValueValidator`] is its type-erased, object-safe counterpart used wherever
//! validators with different output types are stored side by side.

use serde::de::DeserializeOwned;
use serde_json::Value;
use stillwater::Validation;

use crate::error::ParseError;
use crate::path::JsonPath;
use crate::ValidationResult;

use super::modifiers::{Defaulted, Nullable, Optional};

/// A stateless validator producing `Self::Output` from untyped JSON input.
///
/// Input is `Option<&Value>`: `None` means the value is absent (a missing
/// object key), `Some(&Value::Null)` an explicit null. Validators hold no
/// mutable state, so one instance may serve any number of threads at once.
///
/// # Example
///
/// ```rust
/// use fablecheck::prelude::*;
/// use serde_json::json;
///
/// let title = Schema::string().trim().min_len(1).max_len(200);
///
/// assert_eq!(title.parse(&json!("  The Hollow Crown ")).unwrap(), "The Hollow Crown");
/// assert!(title.safe_parse(&json!("   ")).is_failure());
///
/// let subtitle = Schema::string().max_len(200).optional();
/// assert_eq!(subtitle.safe_parse_input(None).into_result().unwrap(), None);
/// ```
pub trait SchemaLike: Send + Sync {
    /// The value produced by successful validation.
    type Output;

    /// Validates `input` located at `path`.
    ///
    /// Errors are reported relative to `path`, so composite validators pass
    /// each child its extended path.
    fn validate_input(&self, input: Option<&Value>, path: &JsonPath) -> ValidationResult<Self::Output>;

    /// Encodes a validated output back into JSON.
    fn output_to_value(&self, output: Self::Output) -> Value;

    /// Validates a present value.
    fn validate(&self, value: &Value, path: &JsonPath) -> ValidationResult<Self::Output> {
        self.validate_input(Some(value), path)
    }

    /// Validates and re-encodes the output as JSON.
    ///
    /// `Success(None)` means the validated value is absent and should be left
    /// out of any enclosing object.
    fn validate_to_value(
        &self,
        input: Option<&Value>,
        path: &JsonPath,
    ) -> ValidationResult<Option<Value>> {
        self.validate_input(input, path)
            .map(|output| Some(self.output_to_value(output)))
    }

    /// Validates a value at the root path. Never panics.
    fn safe_parse(&self, value: &Value) -> ValidationResult<Self::Output> {
        self.validate_input(Some(value), &JsonPath::root())
    }

    /// Validates a possibly absent value at the root path. Never panics.
    fn safe_parse_input(&self, input: Option<&Value>) -> ValidationResult<Self::Output> {
        self.validate_input(input, &JsonPath::root())
    }

    /// Validates a value, returning every collected error on failure.
    fn parse(&self, value: &Value) -> Result<Self::Output, ParseError> {
        self.parse_input(Some(value))
    }

    /// Like [`parse`](Self::parse) for a possibly absent value.
    fn parse_input(&self, input: Option<&Value>) -> Result<Self::Output, ParseError> {
        match self.safe_parse_input(input) {
            Validation::Success(output) => Ok(output),
            Validation::Failure(errors) => {
                tracing::debug!(
                    error_count = errors.len(),
                    first_path = %errors.first().path.dotted(),
                    first_code = %errors.first().code,
                    "input rejected"
                );
                Err(ParseError::Invalid(errors))
            }
        }
    }

    /// Validates a value and deserializes the validated JSON into `T`.
    ///
    /// Coerced, trimmed, and defaulted values are what `T` receives, not the
    /// raw input.
    fn parse_into<T>(&self, value: &Value) -> Result<T, ParseError>
    where
        Self: Sized,
        T: DeserializeOwned,
    {
        match self.validate_to_value(Some(value), &JsonPath::root()) {
            Validation::Success(validated) => {
                Ok(serde_json::from_value(validated.unwrap_or(Value::Null))?)
            }
            Validation::Failure(errors) => Err(ParseError::Invalid(errors)),
        }
    }

    /// Accepts an absent value as `None`; anything present goes to `self`.
    fn optional(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional::new(self)
    }

    /// Accepts `null` as `None`; anything else goes to `self`.
    fn nullable(self) -> Nullable<Self>
    where
        Self: Sized,
    {
        Nullable::new(self)
    }

    /// Substitutes `value` when the input is absent or `null`.
    fn default(self, value: Self::Output) -> Defaulted<Self>
    where
        Self: Sized,
        Self::Output: Clone + Send + Sync,
    {
        Defaulted::new(self, value)
    }
}

/// Type-erased view of a [`SchemaLike`], producing JSON output.
///
/// Blanket-implemented for every `SchemaLike`, so heterogeneous validators can
/// share one collection:
///
/// ```rust
/// use fablecheck::{Schema, ValueValidator};
///
/// let fields: Vec<Box<dyn ValueValidator>> = vec![
///     Box::new(Schema::string().min_len(1)),
///     Box::new(Schema::number().positive()),
/// ];
/// assert_eq!(fields.len(), 2);
/// ```
pub trait ValueValidator: Send + Sync {
    fn validate_value(&self, input: Option<&Value>, path: &JsonPath) -> ValidationResult<Option<Value>>;
}

impl<S: SchemaLike> ValueValidator for S {
    fn validate_value(&self, input: Option<&Value>, path: &JsonPath) -> ValidationResult<Option<Value>> {
        self.validate_to_value(input, path)
    }
}
