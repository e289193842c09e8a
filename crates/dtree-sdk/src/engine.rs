//! DecisionTreeEngine - Main API for evaluating decision trees

use crate::config::EngineConfig;
use crate::error::Result;
use dtree_core::{Context, Outcome};
use dtree_runtime::{Evaluation, ExecutionTrace, NodeDocument, NodeRef};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Structural dump of an engine's tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EngineDocument {
    /// Document of the root node
    Tree(NodeDocument),

    /// The engine has no root
    Error { error: String },
}

/// Entry point for evaluating a tree
///
/// Each evaluation is an independent function of the tree and the context.
/// The tree must not be changed while evaluations are in flight; nodes are
/// immutable once shared, so this only matters for interior mutability a
/// caller builds into its own predicates or actions.
#[derive(Debug, Clone)]
pub struct DecisionTreeEngine {
    root: Option<NodeRef>,
    trace: ExecutionTrace,
    config: EngineConfig,
}

impl DecisionTreeEngine {
    /// Create an engine around a root node with default configuration
    pub fn new(root: NodeRef) -> Self {
        Self::from_parts(Some(root), EngineConfig::new())
    }

    /// Create an engine with no tree; every evaluation yields `NO_ROOT`
    pub fn without_root() -> Self {
        Self::from_parts(None, EngineConfig::new())
    }

    /// Create an engine with explicit configuration
    ///
    /// Fails with `ConfigError` when the configuration is out of range.
    pub fn with_config(root: Option<NodeRef>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(root, config))
    }

    fn from_parts(root: Option<NodeRef>, config: EngineConfig) -> Self {
        Self {
            root,
            trace: ExecutionTrace::new(),
            config,
        }
    }

    pub fn root(&self) -> Option<&NodeRef> {
        self.root.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate using the configured trace flag
    pub fn evaluate(&mut self, context: &Context) -> Outcome {
        let enable_trace = self.config.enable_tracing;
        self.evaluate_with_trace(context, enable_trace)
    }

    /// Evaluate the tree against `context`
    ///
    /// With `enable_trace` set the trace buffer is cleared first; nothing is
    /// recorded into it during traversal. Routing failures come back as the
    /// sentinel texts `NO_RESULT`, `NO_MATCH` and `NO_ROOT`.
    pub fn evaluate_with_trace(&mut self, context: &Context, enable_trace: bool) -> Outcome {
        if enable_trace {
            self.trace.clear();
        }
        self.evaluate_detailed(context).into_outcome()
    }

    /// Evaluate the tree, reporting routing failures explicitly
    ///
    /// Does not touch the trace buffer.
    pub fn evaluate_detailed(&self, context: &Context) -> Evaluation {
        let root = match &self.root {
            Some(root) => root,
            None => {
                debug!("evaluation requested without a root node");
                return Evaluation::NoRoot;
            }
        };

        let evaluation = root.evaluate_detailed(context);
        debug!(root = %root.type_label(), reached = evaluation.is_reached(), "tree evaluated");
        evaluation
    }

    /// Trace buffer of the most recent traced evaluation
    pub fn trace(&self) -> &ExecutionTrace {
        &self.trace
    }

    /// Structural document of the whole tree
    pub fn describe(&self) -> EngineDocument {
        match &self.root {
            Some(root) => EngineDocument::Tree(root.describe()),
            None => EngineDocument::Error {
                error: "No root node".to_string(),
            },
        }
    }

    /// Render the structural document as pretty JSON
    pub fn tree_json(&self) -> Result<String> {
        match self.describe() {
            EngineDocument::Tree(doc) => Ok(doc.render(0, self.config.indent_step)?),
            error => Ok(serde_json::to_string(&error).map_err(dtree_runtime::RuntimeError::from)?),
        }
    }

    /// Print the structural document to stdout
    pub fn print_tree(&self) -> Result<()> {
        println!("{}", self.tree_json()?);
        Ok(())
    }
}
