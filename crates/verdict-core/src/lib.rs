//! Verdict Core - Value model and condition tree types for the verdict
//! rule engine
//!
//! This crate provides the data side of the engine:
//! - `Value` for runtime records and rule literals
//! - The typed condition tree (`ConditionGroup` / `ConditionItem` /
//!   `LeafTerm`) deserialized from JSON-shaped rule documents
//! - Error types

pub mod condition;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use condition::{ConditionGroup, ConditionItem, JoinOperator, LeafTerm};
pub use error::CoreError;
pub use types::Value;
