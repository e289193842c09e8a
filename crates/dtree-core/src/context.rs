//! Evaluation context
//!
//! A `Context` is the key/value bag a caller hands to the engine for one
//! evaluation. Predicates and actions only ever see it by shared reference.

use crate::error::{CoreError, Result};
use crate::types::{FromValue, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-evaluation input bag of named, typed values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    values: HashMap<String, Value>,
}

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, replacing any previous value under the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Raw lookup
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Whether the key is present, regardless of its type
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context holds no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Typed lookup that never fails
    ///
    /// Returns `default` when the key is absent *or* when the stored value is
    /// not of type `T`. A mismatch is indistinguishable from absence here; use
    /// [`Context::require`] when the difference matters.
    pub fn get_or<T: FromValue>(&self, key: &str, default: T) -> T {
        self.values
            .get(key)
            .and_then(T::from_value)
            .unwrap_or(default)
    }

    /// Typed lookup that reports absence and mismatches
    pub fn require<T: FromValue>(&self, key: &str) -> Result<T> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| CoreError::FieldNotFound(key.to_string()))?;

        T::from_value(value).ok_or_else(|| CoreError::TypeError {
            field: key.to_string(),
            expected: T::TYPE_NAME,
            found: value.type_name(),
        })
    }
}

impl From<HashMap<String, Value>> for Context {
    fn from(values: HashMap<String, Value>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Get-or-default accessor as a free function
///
/// Same masking behavior as [`Context::get_or`].
pub fn get_context_value<T: FromValue>(context: &Context, key: &str, default: T) -> T {
    context.get_or(key, default)
}
