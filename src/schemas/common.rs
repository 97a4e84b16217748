//! Field-level validators shared by the request shapes.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::{NumberSchema, Schema, StringSchema};

static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("username regex is valid"));

static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid regex is valid")
});

pub fn email() -> StringSchema {
    Schema::string().email()
}

/// 8 to 100 characters.
pub fn password() -> StringSchema {
    Schema::string().min_len(8).max_len(100)
}

/// 3 to 30 characters of letters, digits, `_` and `-`.
pub fn username() -> StringSchema {
    Schema::string()
        .min_len(3)
        .max_len(30)
        .matches(USERNAME.clone())
        .error("may only contain letters, numbers, underscores and hyphens")
}

/// 1 to 50 characters.
pub fn display_name() -> StringSchema {
    Schema::string().min_len(1).max_len(50)
}

pub fn url() -> StringSchema {
    Schema::string().url()
}

/// Canonical hyphenated form, either case.
pub fn uuid() -> StringSchema {
    Schema::string().matches(UUID.clone()).error("invalid UUID")
}

pub fn positive_int() -> NumberSchema {
    Schema::number().integer().positive()
}

/// Whole stars from 1 to 5.
pub fn rating() -> NumberSchema {
    Schema::number().integer().range(1.0..=5.0)
}
