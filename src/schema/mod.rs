//! Validators and the combinators that compose them.
//!
//! Leaf validators ([`StringSchema`], [`NumberSchema`], [`BooleanSchema`],
//! [`EnumSchema`]) type-check and coerce a single value; composite validators
//! ([`ArraySchema`], [`ObjectSchema`]) delegate to child validators and merge
//! their errors; modifiers ([`Optional`], [`Nullable`], [`Defaulted`]) change
//! how absent and null input is treated. Every validator reports all violated
//! constraints, except that a base type mismatch stops further checks on that
//! value.
//!
//! # Example
//!
//! ```rust
//! use fablecheck::prelude::*;
//! use serde_json::json;
//!
//! let chapter = Schema::object()
//!     .field("title", Schema::string().min_len(1))
//!     .field("wordCount", Schema::number().integer().positive());
//!
//! let result = chapter.safe_parse(&json!({"title": "", "wordCount": -3}));
//! assert_eq!(result.into_result().unwrap_err().len(), 2);
//! ```

mod array;
mod boolean;
mod enumeration;
mod modifiers;
mod number;
mod object;
mod string;
mod traits;

pub use array::ArraySchema;
pub use boolean::BooleanSchema;
pub use enumeration::EnumSchema;
pub use modifiers::{Defaulted, Nullable, Optional};
pub use number::NumberSchema;
pub use object::ObjectSchema;
pub use string::StringSchema;
pub use traits::{SchemaLike, ValueValidator};

use serde_json::Value;

use crate::error::{ErrorCode, SchemaError, SchemaErrors};
use crate::path::JsonPath;

/// Entry point for creating validators.
///
/// ```rust
/// use fablecheck::prelude::*;
/// use serde_json::json;
///
/// let difficulty = Schema::enum_type(["easy", "medium", "hard"]);
/// assert!(difficulty.safe_parse(&json!("medium")).is_success());
///
/// let tags = Schema::array(Schema::string().min_len(1).max_len(50)).max_len(10);
/// assert!(tags.safe_parse(&json!(["horror", "gothic"])).is_success());
/// ```
pub struct Schema;

impl Schema {
    /// A string validator; see [`StringSchema`].
    pub fn string() -> StringSchema {
        StringSchema::new()
    }

    /// A number validator that also accepts numeric strings; see [`NumberSchema`].
    pub fn number() -> NumberSchema {
        NumberSchema::new()
    }

    /// Accepts booleans and the strings `"true"`/`"false"`.
    pub fn boolean() -> BooleanSchema {
        BooleanSchema::new()
    }

    /// Accepts only the listed strings.
    pub fn enum_type<I, S>(values: I) -> EnumSchema
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EnumSchema::new(values)
    }

    /// An array whose every element must pass `item`.
    pub fn array<S: SchemaLike>(item: S) -> ArraySchema<S> {
        ArraySchema::new(item)
    }

    /// An object validated field by field; add fields with
    /// [`ObjectSchema::field`].
    pub fn object() -> ObjectSchema {
        ObjectSchema::new()
    }
}

/// Describes the kind of input received, for type error messages.
pub(crate) fn received(input: Option<&Value>) -> &'static str {
    match input {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// The single error reported when the base type check fails.
pub(crate) fn type_mismatch(
    path: &JsonPath,
    expected: &str,
    input: Option<&Value>,
    custom: Option<&String>,
) -> SchemaErrors {
    let message = custom
        .cloned()
        .unwrap_or_else(|| format!("expected {}, received {}", expected, received(input)));
    SchemaErrors::single(SchemaError::new(path.clone(), ErrorCode::InvalidType, message))
}
