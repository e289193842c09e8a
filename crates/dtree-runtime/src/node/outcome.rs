//! Terminal outcome node

use super::{Action, NodeRef};
use crate::document::NodeDocument;
use crate::evaluation::Evaluation;
use dtree_core::{Context, Outcome};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Terminal node returning a fixed outcome
///
/// The attached action, if any, runs on every evaluation before the outcome
/// is returned. It is not memoized, and a panic inside it propagates to the
/// caller of `evaluate`.
#[derive(Clone)]
pub struct OutcomeNode {
    value: Outcome,
    action: Option<Action>,
}

impl OutcomeNode {
    /// Create an outcome node without an action
    pub fn new(value: impl Into<Outcome>) -> Self {
        Self {
            value: value.into(),
            action: None,
        }
    }

    /// Attach an action
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&Context) + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// The fixed outcome
    pub fn value(&self) -> &Outcome {
        &self.value
    }

    /// Whether an action is attached
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Wrap in a shared node reference
    pub fn into_ref(self) -> NodeRef {
        Arc::new(self.into())
    }

    pub(crate) fn evaluate(&self, context: &Context) -> Evaluation {
        if let Some(action) = &self.action {
            action(context);
        }
        trace!(outcome = %self.value, "outcome reached");

        Evaluation::Reached {
            outcome: self.value.clone(),
        }
    }

    pub(crate) fn describe(&self) -> NodeDocument {
        NodeDocument::Outcome {
            value: self.value.to_string(),
            has_action: self.has_action(),
        }
    }
}

impl fmt::Debug for OutcomeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutcomeNode")
            .field("value", &self.value)
            .field("has_action", &self.has_action())
            .finish()
    }
}
