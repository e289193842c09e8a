//! dtree Decision Tree SDK
//!
//! High-level API for evaluating hand-assembled decision trees.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;

// Re-export main types
pub use builder::DecisionTreeEngineBuilder;
pub use config::EngineConfig;
pub use engine::{DecisionTreeEngine, EngineDocument};
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use dtree_core::{get_context_value, Context, Outcome, Value};
pub use dtree_runtime::{
    DecisionNode, Evaluation, ExecutionTrace, MultiBranchNode, Node, NodeDocument, NodeRef,
    OutcomeNode, NO_MATCH, NO_RESULT, NO_ROOT,
};
