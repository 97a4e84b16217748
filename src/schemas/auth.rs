//! Account request shapes.

use serde::Deserialize;

use super::common;
use crate::schema::{ObjectSchema, Schema, SchemaLike};

/// `{ email, password }`; the password only needs to be non-empty since its
/// strength was checked at registration.
pub fn login() -> ObjectSchema {
    Schema::object()
        .field("email", common::email())
        .field("password", Schema::string().min_len(1))
}

/// `{ email, password, username, displayName? }`.
pub fn register() -> ObjectSchema {
    Schema::object()
        .field("email", common::email())
        .field("password", common::password())
        .field("username", common::username())
        .field("displayName", common::display_name().optional())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
