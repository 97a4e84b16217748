//! Modifiers that change how absent and null input is handled.
//!
//! Each wrapper intercepts one case (absent, null, or both) and otherwise
//! hands the input to the wrapped validator unchanged, at the same path. The
//! wrapped validator's error codes and paths for present, invalid input are
//! therefore preserved exactly.

use serde_json::Value;
use stillwater::Validation;

use crate::path::JsonPath;
use crate::ValidationResult;

use super::traits::SchemaLike;

/// Succeeds with `None` when the input is absent. Built by
/// [`SchemaLike::optional`].
///
/// `null` is *not* absent: it still reaches the wrapped validator.
///
/// ```rust
/// use fablecheck::prelude::*;
/// use serde_json::json;
///
/// let bio = Schema::string().max_len(500).optional();
/// assert!(bio.safe_parse_input(None).is_success());
/// assert!(bio.safe_parse(&json!(null)).is_failure());
/// ```
#[derive(Clone)]
pub struct Optional<S> {
    inner: S,
}

impl<S> Optional<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: SchemaLike> SchemaLike for Optional<S> {
    type Output = Option<S::Output>;

    fn validate_input(
        &self,
        input: Option<&Value>,
        path: &JsonPath,
    ) -> ValidationResult<Option<S::Output>> {
        match input {
            None => Validation::Success(None),
            Some(_) => self.inner.validate_input(input, path).map(Some),
        }
    }

    fn output_to_value(&self, output: Option<S::Output>) -> Value {
        output.map_or(Value::Null, |o| self.inner.output_to_value(o))
    }

    fn validate_to_value(
        &self,
        input: Option<&Value>,
        path: &JsonPath,
    ) -> ValidationResult<Option<Value>> {
        match input {
            None => Validation::Success(None),
            Some(_) => self.inner.validate_to_value(input, path),
        }
    }
}

/// Succeeds with `None` when the input is `null`. Built by
/// [`SchemaLike::nullable`].
///
/// An absent value is still handed to the wrapped validator.
#[derive(Clone)]
pub struct Nullable<S> {
    inner: S,
}

impl<S> Nullable<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: SchemaLike> SchemaLike for Nullable<S> {
    type Output = Option<S::Output>;

    fn validate_input(
        &self,
        input: Option<&Value>,
        path: &JsonPath,
    ) -> ValidationResult<Option<S::Output>> {
        match input {
            Some(Value::Null) => Validation::Success(None),
            _ => self.inner.validate_input(input, path).map(Some),
        }
    }

    fn output_to_value(&self, output: Option<S::Output>) -> Value {
        output.map_or(Value::Null, |o| self.inner.output_to_value(o))
    }

    fn validate_to_value(
        &self,
        input: Option<&Value>,
        path: &JsonPath,
    ) -> ValidationResult<Option<Value>> {
        match input {
            Some(Value::Null) => Validation::Success(Some(Value::Null)),
            _ => self.inner.validate_to_value(input, path),
        }
    }
}

/// Substitutes a fixed value when the input is absent **or** `null`. Built by
/// [`SchemaLike::default`].
///
/// The wrapped validator is not consulted for those two cases, so the default
/// itself is never validated. Absent and `null` cannot be told apart after
/// this modifier; use `.nullable().optional()` when they must be.
///
/// ```rust
/// use fablecheck::prelude::*;
/// use serde_json::json;
///
/// let premium = Schema::boolean().default(false);
/// assert_eq!(premium.parse_input(None).unwrap(), false);
/// assert_eq!(premium.parse(&json!(null)).unwrap(), false);
/// assert_eq!(premium.parse(&json!("true")).unwrap(), true);
/// ```
pub struct Defaulted<S: SchemaLike> {
    inner: S,
    value: S::Output,
}

impl<S> Clone for Defaulted<S>
where
    S: SchemaLike + Clone,
    S::Output: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            value: self.value.clone(),
        }
    }
}

impl<S: SchemaLike> Defaulted<S> {
    pub fn new(inner: S, value: S::Output) -> Self {
        Self { inner, value }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// The value substituted for absent or null input.
    pub fn default_value(&self) -> &S::Output {
        &self.value
    }
}

impl<S> SchemaLike for Defaulted<S>
where
    S: SchemaLike,
    S::Output: Clone + Send + Sync,
{
    type Output = S::Output;

    fn validate_input(&self, input: Option<&Value>, path: &JsonPath) -> ValidationResult<S::Output> {
        match input {
            None | Some(Value::Null) => Validation::Success(self.value.clone()),
            Some(_) => self.inner.validate_input(input, path),
        }
    }

    fn output_to_value(&self, output: S::Output) -> Value {
        self.inner.output_to_value(output)
    }
}
