//! Execution trace buffer
//!
//! The engine owns one `ExecutionTrace` and clears it at the start of every
//! traced evaluation. Node evaluation does not append to it yet, so a trace is
//! always empty after an evaluation; entries can only be added through
//! [`ExecutionTrace::record`].

use serde::{Deserialize, Serialize};

/// One recorded step of a traversal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Label of the visited node
    pub node: String,

    /// Free-form description of what happened at the node
    pub detail: String,
}

impl TraceEntry {
    /// Create a new trace entry
    pub fn new(node: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            detail: detail.into(),
        }
    }
}

/// Ordered list of trace entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionTrace {
    entries: Vec<TraceEntry>,
}

impl ExecutionTrace {
    /// Create an empty trace
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    ///
    /// Extension point for callers that collect their own traces; node
    /// evaluation never calls it.
    pub fn record(&mut self, entry: TraceEntry) {
        self.entries.push(entry);
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
