//! # fablecheck
//!
//! Composable validators for untyped payloads (form submissions, API request
//! bodies) that report every problem at once, each with a structural path and
//! a stable error code.
//!
//! ## Overview
//!
//! A validator turns an untyped [`serde_json::Value`] into a typed value or a
//! non-empty list of [`SchemaError`]s. Composite validators (arrays, objects)
//! visit every element and field before returning, so a caller gets the full
//! picture rather than the first failure. Results use stillwater's
//! `Validation`, a tagged union of success and failure.
//!
//! ## Core Types
//!
//! - [`Schema`]: factory for string, number, boolean, enum, array and object validators
//! - [`SchemaLike`]: the validator contract (`safe_parse`, `parse`, `optional`, `nullable`, `default`)
//! - [`SchemaError`] / [`SchemaErrors`] / [`ErrorCode`]: what went wrong, where
//! - [`ParseError`]: returned by the `parse` entry points
//! - [`schemas`]: ready-made validators for accounts and stories
//! - [`SchemaRegistry`]: named validators shared across request handlers
//!
//! ## Example
//!
//! ```rust
//! use fablecheck::prelude::*;
//! use serde_json::json;
//!
//! let signup = Schema::object()
//!     .field("email", Schema::string().email())
//!     .field("password", Schema::string().min_len(8))
//!     .field("newsletter", Schema::boolean().default(false));
//!
//! // Branch on validity (forms)
//! let result = signup.safe_parse(&json!({"email": "nope", "password": "short"}));
//! let errors = result.into_result().unwrap_err();
//! assert_eq!(errors.len(), 2);
//!
//! // Abort on invalid input (API entry points)
//! let err = signup.parse(&json!({"email": "nope", "password": "short"})).unwrap_err();
//! assert!(err.to_string().starts_with("email: invalid email address"));
//!
//! let ok = signup.parse(&json!({"email": "a@b.io", "password": "longenough"})).unwrap();
//! assert_eq!(ok["newsletter"], json!(false));
//! ```

pub mod error;
pub mod path;
pub mod registry;
pub mod schema;
pub mod schemas;

pub use error::{ErrorCode, ParseError, SchemaError, SchemaErrors};
pub use path::{JsonPath, PathSegment};
pub use registry::{RegistryError, SchemaRegistry};
pub use schema::{
    ArraySchema, BooleanSchema, Defaulted, EnumSchema, Nullable, NumberSchema, ObjectSchema,
    Optional, Schema, SchemaLike, StringSchema, ValueValidator,
};

/// The outcome of a validation: `Success(T)` or `Failure(SchemaErrors)`.
pub type ValidationResult<T> = stillwater::Validation<T, SchemaErrors>;

/// Everything needed to build and run validators.
pub mod prelude {
    pub use crate::error::{ErrorCode, ParseError, SchemaError, SchemaErrors};
    pub use crate::path::JsonPath;
    pub use crate::schema::{Schema, SchemaLike, ValueValidator};
    pub use crate::ValidationResult;
    pub use stillwater::Validation;
}
