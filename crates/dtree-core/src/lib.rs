//! dtree Core - Core types for the dtree decision tree engine
//!
//! This crate provides the data model shared by the runtime and the SDK:
//! - Context values supplied by callers
//! - Outcome values produced by terminal nodes
//! - The evaluation context and its accessors
//! - Error types

pub mod context;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use context::{get_context_value, Context};
pub use error::CoreError;
pub use types::{FromValue, Outcome, Value};
