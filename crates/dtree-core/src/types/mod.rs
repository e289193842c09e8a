//! Type system for dtree
//!
//! This module contains:
//! - Context values (`Value`) and their typed extraction (`FromValue`)
//! - Outcome values (`Outcome`) returned by tree evaluation

pub mod outcome;
pub mod value;

pub use outcome::Outcome;
pub use value::{FromValue, Value};
