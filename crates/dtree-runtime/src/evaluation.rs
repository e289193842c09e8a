//! Evaluation results with routing diagnostics
//!
//! `Evaluation` keeps "reached an outcome" apart from the three ways a
//! traversal can stop short. [`Evaluation::into_outcome`] collapses it to the
//! plain [`Outcome`] callers get from `evaluate`, where a failed traversal is
//! reported as a reserved text value.

use dtree_core::Outcome;
use serde::{Deserialize, Serialize};

/// Sentinel text for a decision node whose selected branch is absent
pub const NO_RESULT: &str = "NO_RESULT";

/// Sentinel text for a multi-branch node with no matching branch and no default
pub const NO_MATCH: &str = "NO_MATCH";

/// Sentinel text for an engine without a root node
pub const NO_ROOT: &str = "NO_ROOT";

/// What a traversal reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evaluation {
    /// An outcome node was reached
    Reached { outcome: Outcome },

    /// The named decision node selected a branch that is not set
    NoResult { node: String },

    /// The named multi-branch node matched nothing and has no default
    NoMatch { node: String },

    /// There was no tree to evaluate
    NoRoot,
}

impl Evaluation {
    /// Whether an outcome node was reached
    pub fn is_reached(&self) -> bool {
        matches!(self, Evaluation::Reached { .. })
    }

    /// The reached outcome, if any
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            Evaluation::Reached { outcome } => Some(outcome),
            _ => None,
        }
    }

    /// Collapse into a plain outcome, substituting sentinel text on failure
    pub fn into_outcome(self) -> Outcome {
        match self {
            Evaluation::Reached { outcome } => outcome,
            Evaluation::NoResult { .. } => Outcome::text(NO_RESULT),
            Evaluation::NoMatch { .. } => Outcome::text(NO_MATCH),
            Evaluation::NoRoot => Outcome::text(NO_ROOT),
        }
    }
}
