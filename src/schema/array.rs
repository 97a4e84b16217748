//! Array validation.
//!
//! [`ArraySchema`] checks the array's own length and validates every element
//! with an item validator, collecting errors from all of them.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ErrorCode, SchemaError, SchemaErrors};
use crate::path::JsonPath;
use crate::ValidationResult;

use super::traits::SchemaLike;

#[derive(Clone)]
enum ArrayConstraint {
    MinLength { min: usize, message: Option<String> },
    MaxLength { max: usize, message: Option<String> },
}

/// A validator for arrays whose elements all pass `S`.
///
/// Length violations are reported at the array's own path. Each element is
/// validated at `path[index]` whether or not earlier elements failed, and the
/// output holds the validated (coerced, trimmed, defaulted) elements rather
/// than the raw input.
///
/// # Example
///
/// ```rust
/// use fablecheck::prelude::*;
/// use serde_json::json;
///
/// let tags = Schema::array(Schema::string().min_len(1)).max_len(2);
///
/// let errors = tags.safe_parse(&json!(["ok", "", "ok"])).into_result().unwrap_err();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.with_code(ErrorCode::TooLong)[0].path.to_strings(), Vec::<String>::new());
/// assert_eq!(errors.with_code(ErrorCode::TooShort)[0].path.to_strings(), vec!["1"]);
/// ```
#[derive(Clone)]
pub struct ArraySchema<S> {
    item_schema: S,
    constraints: Vec<ArrayConstraint>,
    type_error_message: Option<String>,
}

impl<S: SchemaLike> ArraySchema<S> {
    pub fn new(item_schema: S) -> Self {
        Self {
            item_schema,
            constraints: Vec::new(),
            type_error_message: None,
        }
    }

    /// Requires at least `min` elements.
    pub fn min_len(mut self, min: usize) -> Self {
        self.constraints
            .push(ArrayConstraint::MinLength { min, message: None });
        self
    }

    /// Allows at most `max` elements.
    pub fn max_len(mut self, max: usize) -> Self {
        self.constraints
            .push(ArrayConstraint::MaxLength { max, message: None });
        self
    }

    /// Shorthand for `.min_len(1)`.
    pub fn non_empty(self) -> Self {
        self.min_len(1)
    }

    /// Overrides the message of the most recently added length constraint,
    /// or of the type error when none has been added yet.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        match self.constraints.last_mut() {
            Some(ArrayConstraint::MinLength { message: m, .. })
            | Some(ArrayConstraint::MaxLength { message: m, .. }) => *m = Some(message.into()),
            None => self.type_error_message = Some(message.into()),
        }
        self
    }

    pub fn item_schema(&self) -> &S {
        &self.item_schema
    }

    fn check_length(&self, len: usize, path: &JsonPath) -> Vec<SchemaError> {
        self.constraints
            .iter()
            .filter_map(|constraint| match constraint {
                ArrayConstraint::MinLength { min, message } if len < *min => {
                    let msg = message.clone().unwrap_or_else(|| {
                        format!("must contain at least {} items, got {}", min, len)
                    });
                    Some(SchemaError::new(path.clone(), ErrorCode::TooShort, msg))
                }
                ArrayConstraint::MaxLength { max, message } if len > *max => {
                    let msg = message.clone().unwrap_or_else(|| {
                        format!("must contain at most {} items, got {}", max, len)
                    });
                    Some(SchemaError::new(path.clone(), ErrorCode::TooLong, msg))
                }
                _ => None,
            })
            .collect()
    }
}

impl<S: SchemaLike> SchemaLike for ArraySchema<S> {
    type Output = Vec<S::Output>;

    fn validate_input(
        &self,
        input: Option<&Value>,
        path: &JsonPath,
    ) -> ValidationResult<Vec<S::Output>> {
        let arr = match input {
            Some(Value::Array(arr)) => arr,
            _ => {
                return Validation::Failure(super::type_mismatch(
                    path,
                    "array",
                    input,
                    self.type_error_message.as_ref(),
                ))
            }
        };

        let mut errors = self.check_length(arr.len(), path);

        let mut validated_items = Vec::with_capacity(arr.len());
        for (index, item) in arr.iter().enumerate() {
            let item_path = path.push_index(index);
            match self.item_schema.validate_input(Some(item), &item_path) {
                Validation::Success(v) => validated_items.push(v),
                Validation::Failure(e) => errors.extend(e),
            }
        }

        if errors.is_empty() {
            Validation::Success(validated_items)
        } else {
            Validation::Failure(SchemaErrors::from_vec(errors))
        }
    }

    fn output_to_value(&self, output: Vec<S::Output>) -> Value {
        Value::Array(
            output
                .into_iter()
                .map(|item| self.item_schema.output_to_value(item))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{NumberSchema, ObjectSchema, StringSchema};
    use serde_json::json;

    fn failure<T: std::fmt::Debug>(result: ValidationResult<T>) -> SchemaErrors {
        result.into_result().unwrap_err()
    }

    #[test]
    fn test_rejects_non_arrays() {
        let schema = ArraySchema::new(StringSchema::new()).min_len(3);
        for value in [json!("abc"), json!({"0": "a"}), json!(null), json!(1)] {
            let errors = failure(schema.safe_parse(&value));
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.first().code, ErrorCode::InvalidType);
        }
    }

    #[test]
    fn test_index_qualified_item_errors() {
        let schema = ArraySchema::new(StringSchema::new().min_len(1));
        let errors = failure(schema.safe_parse(&json!(["ok", "", "ok"])));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().code, ErrorCode::TooShort);
        assert_eq!(errors.first().path.to_strings(), vec!["1"]);
    }

    #[test]
    fn test_every_element_is_checked() {
        let schema = ArraySchema::new(NumberSchema::new().positive());
        let errors = failure(schema.safe_parse(&json!([-1, 2, "x", 0])));

        let paths: Vec<_> = errors.iter().map(|e| e.path.dotted()).collect();
        assert_eq!(paths, vec!["0", "2", "3"]);
        assert_eq!(
            errors.codes(),
            vec![ErrorCode::InvalidPositive, ErrorCode::InvalidType]
        );
    }

    #[test]
    fn test_length_and_item_errors_merge() {
        let schema = ArraySchema::new(StringSchema::new().min_len(1)).min_len(3);
        let errors = failure(schema.safe_parse(&json!([""])));

        assert_eq!(errors.len(), 2);
        assert!(errors.first().path.is_root());
        assert_eq!(errors.first().code, ErrorCode::TooShort);
        assert_eq!(errors.iter().nth(1).unwrap().path.dotted(), "0");
    }

    #[test]
    fn test_output_uses_validated_items() {
        let schema = ArraySchema::new(NumberSchema::new());
        assert_eq!(schema.parse(&json!(["1", 2.5])).unwrap(), vec![1.0, 2.5]);

        let trimmed = ArraySchema::new(StringSchema::new().trim());
        assert_eq!(
            trimmed.parse(&json!([" a ", "b "])).unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_nested_paths() {
        let schema = ArraySchema::new(
            ObjectSchema::new().field("email", StringSchema::new().email()),
        );
        let errors = failure(schema.validate(
            &json!([{"email": "a@b.co"}, {"email": "nope"}]),
            &JsonPath::from_field("items"),
        ));

        assert_eq!(errors.first().path.to_strings(), vec!["items", "1", "email"]);
        assert_eq!(errors.first().code, ErrorCode::InvalidEmail);
    }

    #[test]
    fn test_empty_array() {
        let schema = ArraySchema::new(StringSchema::new());
        assert!(schema.parse(&json!([])).unwrap().is_empty());
        assert!(schema.clone().non_empty().safe_parse(&json!([])).is_failure());
    }

    #[test]
    fn test_custom_length_message() {
        let schema = ArraySchema::new(StringSchema::new())
            .max_len(1)
            .error("pick one tag");
        let errors = failure(schema.safe_parse(&json!(["a", "b"])));
        assert_eq!(errors.first().message, "pick one tag");
    }
}
