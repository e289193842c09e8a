//! dtree Runtime - Evaluation of hand-assembled decision trees
//!
//! This crate provides the node variants that make up a tree, their
//! evaluation against a [`Context`], and the structural document each
//! node renders for inspection.

pub mod document;
pub mod error;
pub mod evaluation;
pub mod node;
pub mod trace;

// Re-export main types
pub use document::{BranchDocument, NodeDocument};
pub use error::{Result, RuntimeError};
pub use evaluation::{Evaluation, NO_MATCH, NO_RESULT, NO_ROOT};
pub use node::{Action, DecisionNode, MultiBranchNode, Node, NodeRef, OutcomeNode, Predicate};
pub use trace::{ExecutionTrace, TraceEntry};

pub use dtree_core::{Context, Outcome, Value};
