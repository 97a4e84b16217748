//! Integration tests for SchemaError, SchemaErrors and ParseError.

use fablecheck::prelude::*;
use serde_json::json;
use stillwater::Semigroup;

#[test]
fn test_error_fields() {
    let error = SchemaError::new(
        JsonPath::root().push_field("items").push_index(2).push_field("email"),
        ErrorCode::InvalidEmail,
        "invalid email address",
    );

    assert_eq!(error.path.to_strings(), vec!["items", "2", "email"]);
    assert_eq!(error.code.as_str(), "invalid_email");
    assert_eq!(error.message, "invalid email address");
}

#[test]
fn test_errors_never_empty() {
    let errors = SchemaErrors::single(SchemaError::new(
        JsonPath::root(),
        ErrorCode::InvalidType,
        "expected object, received null",
    ));
    assert!(!errors.is_empty());
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_errors_combine() {
    let a = SchemaErrors::single(SchemaError::new(
        JsonPath::from_field("title"),
        ErrorCode::TooShort,
        "too short",
    ));
    let b = SchemaErrors::single(SchemaError::new(
        JsonPath::from_field("genre"),
        ErrorCode::InvalidType,
        "expected string, received missing",
    ));

    let combined = a.combine(b);
    assert_eq!(combined.len(), 2);
    assert_eq!(combined.with_code(ErrorCode::TooShort).len(), 1);
}

#[test]
fn test_failure_is_a_tagged_union() {
    let result = Schema::boolean().safe_parse(&json!("nope"));

    match result {
        Validation::Success(_) => panic!("expected failure"),
        Validation::Failure(errors) => assert_eq!(errors.first().code, ErrorCode::InvalidType),
    }
}

#[test]
fn test_parse_error_flattens_paths() {
    let schema = Schema::object()
        .field("email", Schema::string().email())
        .field("tags", Schema::array(Schema::string().min_len(1)));

    let err = schema
        .parse(&json!({"email": "x", "tags": ["a", ""]}))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "email: invalid email address, tags.1: must be at least 1 characters, got 0"
    );
    assert_eq!(err.into_errors().len(), 2);
}

#[test]
fn test_parse_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}

    let err = Schema::number().parse(&json!("x")).unwrap_err();
    takes_error(&err);
}

#[test]
fn test_safe_parse_never_panics_on_odd_input() {
    let schema = Schema::object()
        .field("a", Schema::array(Schema::object().field("b", Schema::number())))
        .field("c", Schema::enum_type(["x"]));

    let inputs = [
        json!(null),
        json!(0),
        json!("string"),
        json!([[[[[]]]]]),
        json!({"a": {"a": {"a": {}}}}),
        json!({"a": [null, 1, "x", [], {"b": {"b": 1}}], "c": {"x": "x"}}),
    ];

    for input in inputs {
        assert!(schema.safe_parse(&input).is_failure());
    }
    assert!(schema.safe_parse_input(None).is_failure());
}
