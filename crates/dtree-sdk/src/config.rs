//! Configuration types for DecisionTreeEngine

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted indentation step for rendered documents
pub const MAX_INDENT_STEP: usize = 8;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Trace flag applied by `DecisionTreeEngine::evaluate`
    pub enable_tracing: bool,

    /// Spaces per nesting level in the rendered tree dump
    pub indent_step: usize,
}

impl EngineConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            enable_tracing: false,
            indent_step: dtree_runtime::document::DEFAULT_INDENT_STEP,
        }
    }

    /// Enable or disable tracing
    pub fn with_tracing(mut self, enable: bool) -> Self {
        self.enable_tracing = enable;
        self
    }

    /// Set the indentation step
    pub fn with_indent_step(mut self, step: usize) -> Self {
        self.indent_step = step;
        self
    }

    /// Parse a configuration from YAML text
    ///
    /// Missing fields take their default values.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML configuration file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.indent_step == 0 || self.indent_step > MAX_INDENT_STEP {
            return Err(SdkError::ConfigError(format!(
                "indent_step must be between 1 and {}, got {}",
                MAX_INDENT_STEP, self.indent_step
            )));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
