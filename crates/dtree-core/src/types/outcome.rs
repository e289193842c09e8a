//! Outcome values produced by tree evaluation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of values a tree evaluation may yield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Boolean outcome
    Boolean(bool),
    /// Integer outcome
    Integer(i64),
    /// Real outcome
    Real(f64),
    /// Text outcome
    Text(String),
}

impl Outcome {
    /// Create a text outcome
    pub fn text(value: impl Into<String>) -> Self {
        Outcome::Text(value.into())
    }

    /// Borrow the text if this is a text outcome
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Outcome::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Reals render with six fractional digits.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Boolean(b) => write!(f, "{}", b),
            Outcome::Integer(n) => write!(f, "{}", n),
            Outcome::Real(n) => write!(f, "{:.6}", n),
            Outcome::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Outcome {
    fn from(value: bool) -> Self {
        Outcome::Boolean(value)
    }
}

impl From<i64> for Outcome {
    fn from(value: i64) -> Self {
        Outcome::Integer(value)
    }
}

impl From<f64> for Outcome {
    fn from(value: f64) -> Self {
        Outcome::Real(value)
    }
}

impl From<&str> for Outcome {
    fn from(value: &str) -> Self {
        Outcome::Text(value.to_string())
    }
}

impl From<String> for Outcome {
    fn from(value: String) -> Self {
        Outcome::Text(value)
    }
}
