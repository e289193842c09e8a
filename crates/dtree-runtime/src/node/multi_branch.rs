//! Ordered multi-way branch node

use super::{NodeRef, Predicate};
use crate::document::{BranchDocument, NodeDocument};
use crate::evaluation::Evaluation;
use dtree_core::Context;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Routes to the first branch, in insertion order, whose predicate holds
///
/// Scanning stops at the first match. When nothing matches the default child
/// is visited if set.
#[derive(Clone)]
pub struct MultiBranchNode {
    name: String,
    branches: Vec<(Predicate, NodeRef)>,
    default_node: Option<NodeRef>,
}

impl MultiBranchNode {
    /// Create a multi-branch node with no branches and no default
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            branches: Vec::new(),
            default_node: None,
        }
    }

    /// Append a branch
    pub fn add_branch<F>(mut self, condition: F, node: NodeRef) -> Self
    where
        F: Fn(&Context) -> bool + Send + Sync + 'static,
    {
        self.branches.push((Arc::new(condition), node));
        self
    }

    /// Set the child visited when no branch matches
    pub fn set_default(mut self, node: NodeRef) -> Self {
        self.default_node = Some(node);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of branches, not counting the default
    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    pub fn default_node(&self) -> Option<&NodeRef> {
        self.default_node.as_ref()
    }

    /// Wrap in a shared node reference
    pub fn into_ref(self) -> NodeRef {
        Arc::new(self.into())
    }

    pub(crate) fn evaluate(&self, context: &Context) -> Evaluation {
        if let Some(index) = self.branches.iter().position(|(cond, _)| cond(context)) {
            trace!(node = %self.name, branch = index, "branch matched");
            return self.branches[index].1.evaluate_detailed(context);
        }

        match &self.default_node {
            Some(node) => {
                trace!(node = %self.name, "default branch taken");
                node.evaluate_detailed(context)
            }
            None => Evaluation::NoMatch {
                node: self.name.clone(),
            },
        }
    }

    pub(crate) fn describe(&self) -> NodeDocument {
        let mut branches: Vec<BranchDocument> = self
            .branches
            .iter()
            .enumerate()
            .map(|(i, (_, node))| BranchDocument::positional(i, node.describe()))
            .collect();

        if let Some(node) = &self.default_node {
            branches.push(BranchDocument::default_branch(node.describe()));
        }

        NodeDocument::MultiBranch {
            name: self.name.clone(),
            branches,
        }
    }
}

impl fmt::Debug for MultiBranchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: Vec<&NodeRef> = self.branches.iter().map(|(_, node)| node).collect();
        f.debug_struct("MultiBranchNode")
            .field("name", &self.name)
            .field("branches", &children)
            .field("default_node", &self.default_node)
            .finish()
    }
}
