//! Numeric validation.
//!
//! [`NumberSchema`] accepts JSON numbers and numeric strings, producing `f64`.

use std::ops::RangeInclusive;

use serde_json::{Number, Value};
use stillwater::Validation;

use crate::error::{ErrorCode, SchemaError, SchemaErrors};
use crate::path::JsonPath;
use crate::ValidationResult;

use super::traits::SchemaLike;

/// Largest magnitude below which every integral `f64` is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Clone)]
enum NumberConstraint {
    Min { value: f64, message: Option<String> },
    Max { value: f64, message: Option<String> },
    Integer { message: Option<String> },
    Positive { message: Option<String> },
}

/// A validator for numbers.
///
/// Strings are coerced first: the whole string (ignoring surrounding
/// whitespace) must be a finite decimal number, so `"12"` and `" 4.5 "` are
/// accepted while `""`, `"12abc"` and `"NaN"` are `invalid_type`. After the
/// type check every violated constraint is reported.
///
/// # Example
///
/// ```rust
/// use fablecheck::prelude::*;
/// use serde_json::json;
///
/// let chapter = Schema::number().integer().positive();
///
/// assert_eq!(chapter.parse(&json!("4")).unwrap(), 4.0);
///
/// let errors = chapter.safe_parse(&json!(-1.5)).into_result().unwrap_err();
/// assert_eq!(errors.codes(), vec![ErrorCode::InvalidInteger, ErrorCode::InvalidPositive]);
/// ```
#[derive(Clone)]
pub struct NumberSchema {
    constraints: Vec<NumberConstraint>,
    type_error_message: Option<String>,
}

impl NumberSchema {
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
            type_error_message: None,
        }
    }

    /// Inclusive lower bound.
    pub fn min(mut self, value: f64) -> Self {
        self.constraints.push(NumberConstraint::Min {
            value,
            message: None,
        });
        self
    }

    /// Inclusive upper bound.
    pub fn max(mut self, value: f64) -> Self {
        self.constraints.push(NumberConstraint::Max {
            value,
            message: None,
        });
        self
    }

    /// Shorthand for `.min(start).max(end)`.
    ///
    /// ```rust
    /// use fablecheck::prelude::*;
    /// use serde_json::json;
    ///
    /// let rating = Schema::number().range(1.0..=5.0);
    /// assert!(rating.safe_parse(&json!(5)).is_success());
    /// assert!(rating.safe_parse(&json!(0)).is_failure());
    /// ```
    pub fn range(self, range: RangeInclusive<f64>) -> Self {
        self.min(*range.start()).max(*range.end())
    }

    /// Requires a whole number.
    pub fn integer(mut self) -> Self {
        self.constraints
            .push(NumberConstraint::Integer { message: None });
        self
    }

    /// Requires a value greater than zero.
    pub fn positive(mut self) -> Self {
        self.constraints
            .push(NumberConstraint::Positive { message: None });
        self
    }

    /// Overrides the message of the most recently added constraint, or of the
    /// type error when no constraint has been added yet.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.constraints.last_mut() {
            match last {
                NumberConstraint::Min { message: m, .. } => *m = Some(message.into()),
                NumberConstraint::Max { message: m, .. } => *m = Some(message.into()),
                NumberConstraint::Integer { message: m } => *m = Some(message.into()),
                NumberConstraint::Positive { message: m } => *m = Some(message.into()),
            }
        } else {
            self.type_error_message = Some(message.into());
        }
        self
    }
}

impl Default for NumberSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLike for NumberSchema {
    type Output = f64;

    fn validate_input(&self, input: Option<&Value>, path: &JsonPath) -> ValidationResult<f64> {
        let n = match input.and_then(coerce) {
            Some(n) => n,
            None => {
                return Validation::Failure(super::type_mismatch(
                    path,
                    "number",
                    input,
                    self.type_error_message.as_ref(),
                ))
            }
        };

        let errors: Vec<SchemaError> = self
            .constraints
            .iter()
            .filter_map(|c| check_constraint(c, n, path))
            .collect();

        if errors.is_empty() {
            Validation::Success(n)
        } else {
            Validation::Failure(SchemaErrors::from_vec(errors))
        }
    }

    /// Whole numbers are emitted as JSON integers so validated output
    /// round-trips through integer-typed consumers.
    fn output_to_value(&self, output: f64) -> Value {
        if output.fract() == 0.0 && output.abs() <= MAX_SAFE_INTEGER {
            Value::Number(Number::from(output as i64))
        } else {
            Number::from_f64(output).map_or(Value::Null, Value::Number)
        }
    }
}

/// Reads a finite number from a JSON number or a numeric string.
fn coerce(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(num) => num.as_f64()?,
        Value::String(s) => parse_strict(s)?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Whole-string decimal parse; rejects empty input, trailing garbage and the
/// textual infinities/NaN `f64::from_str` would otherwise accept.
fn parse_strict(s: &str) -> Option<f64> {
    let s = s.trim();
    let looks_numeric = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !looks_numeric {
        return None;
    }
    s.parse::<f64>().ok()
}

fn check_constraint(
    constraint: &NumberConstraint,
    n: f64,
    path: &JsonPath,
) -> Option<SchemaError> {
    let (code, message, default_message) = match constraint {
        NumberConstraint::Min { value, message } if n < *value => (
            ErrorCode::TooSmall,
            message,
            format!("must be at least {}, got {}", value, n),
        ),
        NumberConstraint::Max { value, message } if n > *value => (
            ErrorCode::TooBig,
            message,
            format!("must be at most {}, got {}", value, n),
        ),
        NumberConstraint::Integer { message } if n.fract() != 0.0 => (
            ErrorCode::InvalidInteger,
            message,
            format!("must be an integer, got {}", n),
        ),
        NumberConstraint::Positive { message } if n <= 0.0 => (
            ErrorCode::InvalidPositive,
            message,
            format!("must be positive, got {}", n),
        ),
        _ => return None,
    };

    let message = message.clone().unwrap_or(default_message);
    Some(SchemaError::new(path.clone(), code, message))
}
