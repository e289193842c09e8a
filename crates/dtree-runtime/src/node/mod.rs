//! Tree nodes
//!
//! A tree is assembled bottom-up from three node shapes:
//! - [`OutcomeNode`]: terminal, returns a fixed outcome and may run an action
//! - [`DecisionNode`]: routes on one predicate to a true or false child
//! - [`MultiBranchNode`]: routes to the first branch whose predicate holds
//!
//! Children are held as [`NodeRef`] (`Arc<Node>`), so one node may be shared
//! by several parents. A node can only be given children while it is still
//! owned; once wrapped in an `Arc` it is immutable. This makes cycles
//! impossible to build, and evaluation does not check for them.
//!
//! Recursion depth during evaluation equals tree depth. There is no depth
//! limit.

mod decision;
mod multi_branch;
mod outcome;

pub use decision::DecisionNode;
pub use multi_branch::MultiBranchNode;
pub use outcome::OutcomeNode;

use crate::document::NodeDocument;
use crate::error::Result;
use crate::evaluation::Evaluation;
use dtree_core::{Context, Outcome};
use std::sync::Arc;

/// Shared reference to a node
pub type NodeRef = Arc<Node>;

/// Boolean test over a context
///
/// Predicates must not have observable side effects; the engine relies on
/// this but does not enforce it.
pub type Predicate = Arc<dyn Fn(&Context) -> bool + Send + Sync>;

/// Side effect run when an outcome node is reached
pub type Action = Arc<dyn Fn(&Context) + Send + Sync>;

/// A node of a decision tree
#[derive(Debug, Clone)]
pub enum Node {
    Outcome(OutcomeNode),
    Decision(DecisionNode),
    MultiBranch(MultiBranchNode),
}

impl Node {
    /// Evaluate the subtree rooted here
    ///
    /// Failed traversals are reported as sentinel text outcomes.
    pub fn evaluate(&self, context: &Context) -> Outcome {
        self.evaluate_detailed(context).into_outcome()
    }

    /// Evaluate the subtree rooted here, keeping routing failures explicit
    pub fn evaluate_detailed(&self, context: &Context) -> Evaluation {
        match self {
            Node::Outcome(node) => node.evaluate(context),
            Node::Decision(node) => node.evaluate(context),
            Node::MultiBranch(node) => node.evaluate(context),
        }
    }

    /// Structural document of the subtree rooted here
    pub fn describe(&self) -> NodeDocument {
        match self {
            Node::Outcome(node) => node.describe(),
            Node::Decision(node) => node.describe(),
            Node::MultiBranch(node) => node.describe(),
        }
    }

    /// Render the structural document as JSON with every line indented by `indent` spaces
    pub fn to_json(&self, indent: usize) -> Result<String> {
        self.describe().to_json(indent)
    }

    /// Diagnostic label, e.g. `DecisionNode: Income Check`
    pub fn type_label(&self) -> String {
        match self {
            Node::Outcome(_) => "OutcomeNode".to_string(),
            Node::Decision(node) => format!("DecisionNode: {}", node.name()),
            Node::MultiBranch(node) => format!("MultiBranchNode: {}", node.name()),
        }
    }

    /// Name of a branching node; outcome nodes are unnamed
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Outcome(_) => None,
            Node::Decision(node) => Some(node.name()),
            Node::MultiBranch(node) => Some(node.name()),
        }
    }
}

impl From<OutcomeNode> for Node {
    fn from(node: OutcomeNode) -> Self {
        Node::Outcome(node)
    }
}

impl From<DecisionNode> for Node {
    fn from(node: DecisionNode) -> Self {
        Node::Decision(node)
    }
}

impl From<MultiBranchNode> for Node {
    fn from(node: MultiBranchNode) -> Self {
        Node::MultiBranch(node)
    }
}
