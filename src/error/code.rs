//! Stable error codes.

use std::fmt::{self, Display};

/// Machine-readable classification of a validation failure.
///
/// The string form returned by [`ErrorCode::as_str`] is stable and safe to
/// match on from client code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The value is missing or has the wrong base type.
    InvalidType,
    /// A string or array is shorter than its minimum length.
    TooShort,
    /// A string or array is longer than its maximum length.
    TooLong,
    InvalidEmail,
    InvalidUrl,
    /// A string does not match the configured regex.
    InvalidPattern,
    /// A number is below its minimum.
    TooSmall,
    /// A number is above its maximum.
    TooBig,
    InvalidInteger,
    InvalidPositive,
    /// The value is not one of the allowed enum members.
    InvalidEnum,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 11] = [
        ErrorCode::InvalidType,
        ErrorCode::TooShort,
        ErrorCode::TooLong,
        ErrorCode::InvalidEmail,
        ErrorCode::InvalidUrl,
        ErrorCode::InvalidPattern,
        ErrorCode::TooSmall,
        ErrorCode::TooBig,
        ErrorCode::InvalidInteger,
        ErrorCode::InvalidPositive,
        ErrorCode::InvalidEnum,
    ];

    /// Returns the stable snake_case name of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidType => "invalid_type",
            ErrorCode::TooShort => "too_short",
            ErrorCode::TooLong => "too_long",
            ErrorCode::InvalidEmail => "invalid_email",
            ErrorCode::InvalidUrl => "invalid_url",
            ErrorCode::InvalidPattern => "invalid_pattern",
            ErrorCode::TooSmall => "too_small",
            ErrorCode::TooBig => "too_big",
            ErrorCode::InvalidInteger => "invalid_integer",
            ErrorCode::InvalidPositive => "invalid_positive",
            ErrorCode::InvalidEnum => "invalid_enum",
        }
    }

    /// Looks up a code by its snake_case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_str() == name)
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for ErrorCode {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ErrorCode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<ErrorCode> for &str {
    fn eq(&self, other: &ErrorCode) -> bool {
        *self == other.as_str()
    }
}
