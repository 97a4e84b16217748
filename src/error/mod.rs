//! Error types for validation failures.
//!
//! [`SchemaError`] describes one violated constraint, [`SchemaErrors`] the
//! non-empty set a failed validation carries, [`ErrorCode`] the stable
//! machine-readable discriminator, and [`ParseError`] what the throwing
//! `parse` entry points return.

mod code;
mod parse_error;
mod schema_error;

pub use code::ErrorCode;
pub use parse_error::ParseError;
pub use schema_error::{SchemaError, SchemaErrors};
