//! Binary decision node

use super::{NodeRef, Predicate};
use crate::document::NodeDocument;
use crate::evaluation::Evaluation;
use dtree_core::Context;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Routes on one predicate to a true or false child
///
/// The predicate is evaluated exactly once per visit, and exactly one child
/// (or none) is visited.
#[derive(Clone)]
pub struct DecisionNode {
    name: String,
    condition: Predicate,
    true_node: Option<NodeRef>,
    false_node: Option<NodeRef>,
}

impl DecisionNode {
    /// Create a decision node with no children
    pub fn new<F>(name: impl Into<String>, condition: F) -> Self
    where
        F: Fn(&Context) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            condition: Arc::new(condition),
            true_node: None,
            false_node: None,
        }
    }

    /// Set the child visited when the predicate holds, builder style
    pub fn on_true(mut self, node: NodeRef) -> Self {
        self.true_node = Some(node);
        self
    }

    /// Set the child visited when the predicate fails, builder style
    pub fn on_false(mut self, node: NodeRef) -> Self {
        self.false_node = Some(node);
        self
    }

    /// Replace the true child
    pub fn set_true_node(&mut self, node: NodeRef) {
        self.true_node = Some(node);
    }

    /// Replace the false child
    pub fn set_false_node(&mut self, node: NodeRef) {
        self.false_node = Some(node);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn true_node(&self) -> Option<&NodeRef> {
        self.true_node.as_ref()
    }

    pub fn false_node(&self) -> Option<&NodeRef> {
        self.false_node.as_ref()
    }

    /// Wrap in a shared node reference
    pub fn into_ref(self) -> NodeRef {
        Arc::new(self.into())
    }

    pub(crate) fn evaluate(&self, context: &Context) -> Evaluation {
        let matched = (self.condition)(context);
        trace!(node = %self.name, matched, "decision evaluated");

        let next = if matched {
            &self.true_node
        } else {
            &self.false_node
        };

        match next {
            Some(node) => node.evaluate_detailed(context),
            None => Evaluation::NoResult {
                node: self.name.clone(),
            },
        }
    }

    pub(crate) fn describe(&self) -> NodeDocument {
        NodeDocument::Decision {
            name: self.name.clone(),
            true_branch: self.true_node.as_ref().map(|n| Box::new(n.describe())),
            false_branch: self.false_node.as_ref().map(|n| Box::new(n.describe())),
        }
    }
}

impl fmt::Debug for DecisionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionNode")
            .field("name", &self.name)
            .field("true_node", &self.true_node)
            .field("false_node", &self.false_node)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::OutcomeNode;
    use dtree_core::Outcome;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn reached(text: &str) -> Evaluation {
        Evaluation::Reached {
            outcome: Outcome::text(text),
        }
    }

    fn amount_check() -> DecisionNode {
        DecisionNode::new("Loan Amount Check", |ctx| ctx.get_or("amount", 0i64) <= 100000)
            .on_true(OutcomeNode::new("small").into_ref())
            .on_false(OutcomeNode::new("large").into_ref())
    }

    #[test]
    fn test_routes_by_predicate() {
        let node = amount_check();
        assert_eq!(node.evaluate(&Context::new().with("amount", 50000)), reached("small"));
        assert_eq!(node.evaluate(&Context::new().with("amount", 150000)), reached("large"));
    }

    #[test]
    fn test_missing_branch_is_no_result() {
        let node = DecisionNode::new("Only True", |ctx| ctx.get_or("flag", false))
            .on_true(OutcomeNode::new("yes").into_ref());

        assert_eq!(node.evaluate(&Context::new().with("flag", true)), reached("yes"));
        assert_eq!(
            node.evaluate(&Context::new()),
            Evaluation::NoResult {
                node: "Only True".to_string()
            }
        );
    }

    #[test]
    fn test_predicate_runs_once_and_one_child_visited() {
        let predicate_calls = Arc::new(AtomicUsize::new(0));
        let true_calls = Arc::new(AtomicUsize::new(0));
        let false_calls = Arc::new(AtomicUsize::new(0));

        let (p, t, f) = (predicate_calls.clone(), true_calls.clone(), false_calls.clone());
        let node = DecisionNode::new("Counted", move |_| {
            p.fetch_add(1, Ordering::SeqCst);
            true
        })
        .on_true(
            OutcomeNode::new("t")
                .with_action(move |_| {
                    t.fetch_add(1, Ordering::SeqCst);
                })
                .into_ref(),
        )
        .on_false(
            OutcomeNode::new("f")
                .with_action(move |_| {
                    f.fetch_add(1, Ordering::SeqCst);
                })
                .into_ref(),
        );

        node.evaluate(&Context::new());
        assert_eq!(predicate_calls.load(Ordering::SeqCst), 1);
        assert_eq!(true_calls.load(Ordering::SeqCst), 1);
        assert_eq!(false_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_setters_replace_children() {
        let mut node = DecisionNode::new("Mutable", |_| false);
        node.set_false_node(OutcomeNode::new("first").into_ref());
        node.set_false_node(OutcomeNode::new("second").into_ref());
        assert!(node.true_node().is_none());
        assert!(node.false_node().is_some());
        assert_eq!(node.evaluate(&Context::new()), reached("second"));
    }

    #[test]
    fn test_describe_omits_absent_branches() {
        let node = DecisionNode::new("Bare", |_| true);
        assert_eq!(
            node.describe(),
            NodeDocument::Decision {
                name: "Bare".to_string(),
                true_branch: None,
                false_branch: None,
            }
        );
    }
}
