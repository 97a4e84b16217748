//! Object validation.
//!
//! [`ObjectSchema`] validates a JSON object field by field against a declared
//! shape and builds a fresh output object from the validated field values.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::Validation;

use crate::error::SchemaErrors;
use crate::path::JsonPath;
use crate::ValidationResult;

use super::traits::{SchemaLike, ValueValidator};

/// A validator for objects with a declared set of fields.
///
/// * Only declared fields are validated; undeclared input keys are ignored
///   and never copied to the output.
/// * A declared field missing from the input is handed to its validator as
///   absent, so it fails unless wrapped in `optional()` or `default()`.
/// * Errors from every field are collected, each under `path.field`.
/// * The output is built from validated values, so coercion, trimming and
///   defaults show up in it. Fields whose validated value is absent are left
///   out.
///
/// # Example
///
/// ```rust
/// use fablecheck::prelude::*;
/// use serde_json::json;
///
/// let schema = Schema::object()
///     .field("a", Schema::string().min_len(5))
///     .field("b", Schema::number().positive());
///
/// let errors = schema.safe_parse(&json!({"a": "x", "b": -1})).into_result().unwrap_err();
/// let found: Vec<_> = errors.iter().map(|e| (e.path.dotted(), e.code)).collect();
/// assert_eq!(found, vec![
///     ("a".to_string(), ErrorCode::TooShort),
///     ("b".to_string(), ErrorCode::InvalidPositive),
/// ]);
/// ```
#[derive(Clone, Default)]
pub struct ObjectSchema {
    fields: IndexMap<String, Arc<dyn ValueValidator>>,
    type_error_message: Option<String>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            type_error_message: None,
        }
    }

    /// Declares a field. Declaring the same name again replaces its
    /// validator but keeps its original position.
    pub fn field<S>(mut self, name: impl Into<String>, schema: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        self.fields.insert(name.into(), Arc::new(schema));
        self
    }

    /// Returns a copy of this shape with the fields of `other` added.
    ///
    /// ```rust
    /// use fablecheck::prelude::*;
    /// use serde_json::json;
    ///
    /// let base = Schema::object().field("title", Schema::string());
    /// let with_genre = base.extend(&Schema::object().field("genre", Schema::string()));
    ///
    /// assert_eq!(with_genre.field_names().collect::<Vec<_>>(), vec!["title", "genre"]);
    /// ```
    pub fn extend(&self, other: &ObjectSchema) -> Self {
        let mut merged = self.clone();
        for (name, schema) in &other.fields {
            merged.fields.insert(name.clone(), Arc::clone(schema));
        }
        merged
    }

    /// Overrides the message used when the input is not an object.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.type_error_message = Some(message.into());
        self
    }

    /// Declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Debug for ObjectSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectSchema")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl SchemaLike for ObjectSchema {
    type Output = Map<String, Value>;

    fn validate_input(
        &self,
        input: Option<&Value>,
        path: &JsonPath,
    ) -> ValidationResult<Map<String, Value>> {
        let obj = match input {
            Some(Value::Object(obj)) => obj,
            _ => {
                return Validation::Failure(super::type_mismatch(
                    path,
                    "object",
                    input,
                    self.type_error_message.as_ref(),
                ))
            }
        };

        let mut errors = Vec::new();
        let mut validated = Map::new();

        for (name, schema) in &self.fields {
            let field_path = path.push_field(name);
            match schema.validate_value(obj.get(name), &field_path) {
                Validation::Success(Some(v)) => {
                    validated.insert(name.clone(), v);
                }
                Validation::Success(None) => {}
                Validation::Failure(e) => errors.extend(e),
            }
        }

        if errors.is_empty() {
            Validation::Success(validated)
        } else {
            Validation::Failure(SchemaErrors::from_vec(errors))
        }
    }

    fn output_to_value(&self, output: Map<String, Value>) -> Value {
        Value::Object(output)
    }
}
