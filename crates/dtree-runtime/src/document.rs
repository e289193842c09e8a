//! Structural documents describing a tree's shape
//!
//! Every node describes itself as a [`NodeDocument`]. Field order in the
//! rendered JSON follows declaration order: `type` first, then the variant's
//! own fields. Absent decision branches are omitted rather than rendered as
//! `null`. Multi-branch predicates are opaque closures, so branches are
//! labelled by position only (`branch_0`, `branch_1`, ...) plus a trailing
//! `default` entry when a default child is set.

use crate::error::{Result, RuntimeError};
use serde::{Deserialize, Serialize};

/// Default indentation step for rendered documents
pub const DEFAULT_INDENT_STEP: usize = 2;

/// Structural description of one node and everything below it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeDocument {
    /// Terminal node
    #[serde(rename = "outcome")]
    Outcome {
        /// Stringified outcome value
        value: String,

        /// Whether an action is attached
        #[serde(rename = "hasAction")]
        has_action: bool,
    },

    /// Binary branch node
    #[serde(rename = "decision")]
    Decision {
        name: String,

        #[serde(
            rename = "trueBranch",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        true_branch: Option<Box<NodeDocument>>,

        #[serde(
            rename = "falseBranch",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        false_branch: Option<Box<NodeDocument>>,
    },

    /// Ordered multi-way branch node
    #[serde(rename = "multibranch")]
    MultiBranch {
        name: String,
        branches: Vec<BranchDocument>,
    },
}

/// One entry of a multi-branch node's `branches` list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchDocument {
    /// Positional label (`branch_<i>`) or `default`
    pub condition: String,

    /// Document of the branch's child
    pub node: NodeDocument,
}

impl BranchDocument {
    /// Label for the branch at `index`
    pub fn positional(index: usize, node: NodeDocument) -> Self {
        Self {
            condition: format!("branch_{}", index),
            node,
        }
    }

    /// Label for the default child
    pub fn default_branch(node: NodeDocument) -> Self {
        Self {
            condition: "default".to_string(),
            node,
        }
    }
}

impl NodeDocument {
    /// Number of node entries in the document, counting shared nodes once per path
    pub fn node_count(&self) -> usize {
        1 + self.children().map(NodeDocument::node_count).sum::<usize>()
    }

    /// Nesting depth in nodes; a lone outcome has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .map(NodeDocument::depth)
            .max()
            .unwrap_or(0)
    }

    fn children(&self) -> Box<dyn Iterator<Item = &NodeDocument> + '_> {
        match self {
            NodeDocument::Outcome { .. } => Box::new(std::iter::empty()),
            NodeDocument::Decision {
                true_branch,
                false_branch,
                ..
            } => Box::new(
                true_branch
                    .iter()
                    .chain(false_branch.iter())
                    .map(|b| &**b),
            ),
            NodeDocument::MultiBranch { branches, .. } => {
                Box::new(branches.iter().map(|b| &b.node))
            }
        }
    }

    /// Render as pretty JSON using the default indent step
    pub fn to_json(&self, indent: usize) -> Result<String> {
        self.render(indent, DEFAULT_INDENT_STEP)
    }

    /// Render as pretty JSON
    ///
    /// Nesting levels are indented by `step` spaces and every line of the
    /// output is additionally prefixed with `indent` spaces.
    pub fn render(&self, indent: usize, step: usize) -> Result<String> {
        let unit = vec![b' '; step];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&unit);
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;

        let json = String::from_utf8(buf).map_err(|e| RuntimeError::Render(e.to_string()))?;
        if indent == 0 {
            return Ok(json);
        }

        let prefix = " ".repeat(indent);
        Ok(json
            .lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
