//! Tests for schema registry operations.

use fablecheck::{RegistryError, Schema, SchemaLike, SchemaRegistry, ValueValidator};
use serde_json::json;

#[test]
fn test_register_and_validate() {
    let registry = SchemaRegistry::new();
    registry
        .register(
            "review.create",
            Schema::object()
                .field("rating", Schema::number().integer().range(1.0..=5.0))
                .field("body", Schema::string().max_len(2000).optional()),
        )
        .unwrap();

    let ok = registry
        .validate("review.create", &json!({"rating": "5", "spam": true}))
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(ok, json!({"rating": 5}));

    let errors = registry
        .validate("review.create", &json!({"rating": 0, "body": 3}))
        .unwrap()
        .into_result()
        .unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_duplicate_registration_fails() {
    let registry = SchemaRegistry::with_builtin();

    let result = registry.register("auth.login", Schema::object());
    assert_eq!(
        result,
        Err(RegistryError::DuplicateName("auth.login".to_string()))
    );
}

#[test]
fn test_missing_schema() {
    let registry = SchemaRegistry::new();

    let result = registry.validate("story.create", &json!({}));
    assert!(matches!(result, Err(RegistryError::SchemaNotFound(name)) if name == "story.create"));
}

#[test]
fn test_builtin_login() {
    let registry = SchemaRegistry::with_builtin();

    let errors = registry
        .validate("auth.login", &json!({"email": "reader@example.com", "password": ""}))
        .unwrap()
        .into_result()
        .unwrap_err();
    assert_eq!(errors.first().path.dotted(), "password");
    assert_eq!(errors.first().code, "too_short");
}

#[test]
fn test_get_returns_shared_validator() {
    let registry = SchemaRegistry::with_builtin();

    let schema = registry.get("auth.register").unwrap();
    let result = schema.validate_value(
        Some(&json!({"email": "a@b.io", "password": "longenough", "username": "abc"})),
        &fablecheck::JsonPath::root(),
    );
    assert!(result.is_success());
}

#[test]
fn test_names_sorted() {
    let registry = SchemaRegistry::new();
    registry.register("b", Schema::string()).unwrap();
    registry.register("a", Schema::number().optional()).unwrap();

    assert_eq!(registry.names(), vec!["a", "b"]);
    assert!(registry.contains("a"));
}

#[test]
fn test_registered_schema_still_usable_directly() {
    let schema = Schema::string().min_len(2);
    let registry = SchemaRegistry::new();
    registry.register("name", schema.clone()).unwrap();

    assert!(schema.safe_parse(&json!("x")).is_failure());
}
