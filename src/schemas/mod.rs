//! Ready-made validators for the platform's account and story payloads.
//!
//! [`common`] holds field-level building blocks; [`auth`] and [`story`]
//! compose them into request shapes. Each request shape has a typed
//! counterpart obtained through [`SchemaLike::parse_into`](crate::SchemaLike::parse_into):
//!
//! ```rust
//! use fablecheck::prelude::*;
//! use fablecheck::schemas::{auth, LoginInput};
//! use serde_json::json;
//!
//! let login: LoginInput = auth::login()
//!     .parse_into(&json!({"email": "reader@example.com", "password": "hunter2"}))
//!     .unwrap();
//! assert_eq!(login.email, "reader@example.com");
//! ```

pub mod auth;
pub mod common;
pub mod story;

pub use auth::{LoginInput, RegisterInput};
pub use story::{CreateStoryInput, Difficulty};
