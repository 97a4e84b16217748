//! Validation error records.
//!
//! This module provides [`SchemaError`] for a single violated constraint and
//! [`SchemaErrors`] for the non-empty set carried by a failed validation.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use super::ErrorCode;
use crate::path::JsonPath;

/// A single violated constraint.
///
/// # Example
///
/// ```rust
/// use fablecheck::{ErrorCode, JsonPath, SchemaError};
///
/// let error = SchemaError::new(
///     JsonPath::root().push_field("email"),
///     ErrorCode::InvalidEmail,
///     "invalid email address",
/// );
///
/// assert_eq!(error.code, "invalid_email");
/// assert_eq!(error.path.to_strings(), vec!["email"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaError {
    /// Where in the input the failing value lives.
    pub path: JsonPath,
    /// Human-readable explanation.
    pub message: String,
    /// Stable discriminator for programmatic handling.
    pub code: ErrorCode,
}

impl SchemaError {
    pub fn new(path: JsonPath, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            code,
        }
    }
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {} [{}]", self.message, self.code)
        } else {
            write!(f, "{}: {} [{}]", self.path, self.message, self.code)
        }
    }
}

impl std::error::Error for SchemaError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaError>();
    assert_sync::<SchemaError>();
};

/// A non-empty collection of validation errors.
///
/// Wrapping `NonEmptyVec` makes an empty failure unrepresentable. Errors from
/// sibling validations are merged with [`Semigroup::combine`]:
///
/// ```rust
/// use fablecheck::{ErrorCode, JsonPath, SchemaError, SchemaErrors};
/// use stillwater::prelude::*;
///
/// let title = SchemaErrors::single(SchemaError::new(
///     JsonPath::from_field("title"),
///     ErrorCode::TooShort,
///     "too short",
/// ));
/// let genre = SchemaErrors::single(SchemaError::new(
///     JsonPath::from_field("genre"),
///     ErrorCode::InvalidType,
///     "expected string, received missing",
/// ));
///
/// assert_eq!(title.combine(genre).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaErrors(NonEmptyVec<SchemaError>);

impl SchemaErrors {
    pub fn single(error: SchemaError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    pub fn from_non_empty(errors: NonEmptyVec<SchemaError>) -> Self {
        Self(errors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaError> {
        self.0.iter()
    }

    /// Returns all errors at exactly the given path.
    pub fn at_path(&self, path: &JsonPath) -> Vec<&SchemaError> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Returns all errors carrying the given code.
    pub fn with_code(&self, code: ErrorCode) -> Vec<&SchemaError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    /// Returns the distinct codes present, in first-seen order.
    pub fn codes(&self) -> Vec<ErrorCode> {
        let mut codes = Vec::new();
        for error in self.0.iter() {
            if !codes.contains(&error.code) {
                codes.push(error.code);
            }
        }
        codes
    }

    pub fn first(&self) -> &SchemaError {
        self.0.head()
    }

    pub fn into_vec(self) -> Vec<SchemaError> {
        self.0.into_vec()
    }

    pub fn as_non_empty_vec(&self) -> &NonEmptyVec<SchemaError> {
        &self.0
    }

    /// Creates a `SchemaErrors` from a vec the caller knows is non-empty.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty.
    pub fn from_vec(errors: Vec<SchemaError>) -> Self {
        Self(NonEmptyVec::from_vec(errors).expect("SchemaErrors requires at least one error"))
    }

    /// Renders every error as `dotted.path: message`, joined by `, `.
    ///
    /// This is the one-line summary carried by [`ParseError`](super::ParseError).
    pub fn flatten_messages(&self) -> String {
        self.0
            .iter()
            .map(|e| format!("{}: {}", e.path.dotted(), e.message))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Semigroup for SchemaErrors {
    fn combine(self, other: Self) -> Self {
        SchemaErrors(self.0.combine(other.0))
    }
}

impl Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

impl IntoIterator for SchemaErrors {
    type Item = SchemaError;
    type IntoIter = std::vec::IntoIter<SchemaError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a SchemaErrors {
    type Item = &'a SchemaError;
    type IntoIter = Box<dyn Iterator<Item = &'a SchemaError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaErrors>();
    assert_sync::<SchemaErrors>();
};
