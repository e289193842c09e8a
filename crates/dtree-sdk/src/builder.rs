//! Builder pattern for DecisionTreeEngine

use crate::config::EngineConfig;
use crate::engine::DecisionTreeEngine;
use crate::error::Result;
use dtree_runtime::NodeRef;
use std::path::Path;

/// Builder for DecisionTreeEngine
///
/// # Example
///
/// ```rust
/// use dtree_sdk::{Context, DecisionTreeEngineBuilder, OutcomeNode, Outcome};
///
/// let mut engine = DecisionTreeEngineBuilder::new()
///     .with_root(OutcomeNode::new("APPROVED").into_ref())
///     .indent_step(4)
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.evaluate(&Context::new()), Outcome::text("APPROVED"));
/// ```
#[derive(Debug, Default)]
pub struct DecisionTreeEngineBuilder {
    root: Option<NodeRef>,
    config: EngineConfig,
}

impl DecisionTreeEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root node
    pub fn with_root(mut self, root: NodeRef) -> Self {
        self.root = Some(root);
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a YAML file
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.config = EngineConfig::from_yaml_file(path)?;
        Ok(self)
    }

    /// Enable tracing
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.config.enable_tracing = enable;
        self
    }

    /// Set the indentation step of the rendered tree dump
    pub fn indent_step(mut self, step: usize) -> Self {
        self.config.indent_step = step;
        self
    }

    /// Build the engine
    ///
    /// A builder without a root yields an engine that answers `NO_ROOT`.
    pub fn build(self) -> Result<DecisionTreeEngine> {
        DecisionTreeEngine::with_config(self.root, self.config)
    }
}
