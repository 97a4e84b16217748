//! Named validators shared across request handlers.
//!
//! A [`SchemaRegistry`] maps names (typically route or form identifiers) to
//! validators so boundary code can look a shape up by name instead of
//! threading validator values through every handler.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::path::JsonPath;
use crate::schema::ValueValidator;
use crate::schemas::{auth, story};
use crate::ValidationResult;

type SchemaMap = RwLock<HashMap<String, Arc<dyn ValueValidator>>>;

/// A thread-safe map of named validators.
///
/// Reads (`get`, `validate`) take a shared lock and may run concurrently;
/// `register` takes the write lock. Validators are handed out as `Arc`s, so a
/// validation never holds the lock while it runs.
///
/// # Example
///
/// ```rust
/// use fablecheck::{Schema, SchemaRegistry};
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
/// registry
///     .register("comment.create", Schema::object().field("body", Schema::string().min_len(1)))
///     .unwrap();
///
/// let result = registry.validate("comment.create", &json!({"body": ""})).unwrap();
/// assert!(result.is_failure());
///
/// assert!(registry.validate("comment.delete", &json!({})).is_err());
/// ```
pub struct SchemaRegistry {
    schemas: SchemaMap,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self {
            schemas: RwLock::new(HashMap::new()),
        }
    }

    /// A registry holding the built-in request shapes: `auth.login`,
    /// `auth.register` and `story.create`.
    pub fn with_builtin() -> Self {
        let registry = Self::new();
        let builtin: [(&str, Arc<dyn ValueValidator>); 3] = [
            ("auth.login", Arc::new(auth::login())),
            ("auth.register", Arc::new(auth::register())),
            ("story.create", Arc::new(story::create())),
        ];
        {
            let mut schemas = registry.schemas.write();
            for (name, schema) in builtin {
                schemas.insert(name.to_string(), schema);
            }
        }
        registry
    }

    /// Registers a validator under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is taken.
    pub fn register<S>(&self, name: impl Into<String>, schema: S) -> Result<(), RegistryError>
    where
        S: ValueValidator + 'static,
    {
        let name = name.into();
        let mut schemas = self.schemas.write();

        if schemas.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        tracing::debug!(schema = %name, "registered schema");
        schemas.insert(name, Arc::new(schema));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ValueValidator>> {
        self.schemas.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.schemas.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Validates `value` against the validator registered under `name`.
    ///
    /// The success value is the validated JSON (coerced, defaulted, with
    /// undeclared keys removed).
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::SchemaNotFound` for an unknown name.
    pub fn validate(
        &self,
        name: &str,
        value: &Value,
    ) -> Result<ValidationResult<Value>, RegistryError> {
        let schema = self.get(name).ok_or_else(|| {
            tracing::debug!(schema = %name, "lookup of unregistered schema");
            RegistryError::SchemaNotFound(name.to_string())
        })?;

        Ok(schema
            .validate_value(Some(value), &JsonPath::root())
            .map(|validated| validated.unwrap_or(Value::Null)))
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("schema '{0}' is already registered")]
    DuplicateName(String),

    #[error("schema '{0}' not found")]
    SchemaNotFound(String),
}
