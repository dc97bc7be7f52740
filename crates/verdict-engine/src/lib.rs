//! Verdict Engine - operator dispatch and condition evaluation
//!
//! Turns a JSON-shaped condition tree into a reusable boolean check over
//! arbitrary records:
//!
//! ```
//! use std::sync::Arc;
//! use verdict_engine::{ConditionGroup, OperatorRegistry, Predicate, Value};
//!
//! let groups: Vec<ConditionGroup> = serde_json::from_str(r#"[
//!     {
//!         "join_operator": "and",
//!         "args": [
//!             {"field": "gender", "operator": "eq", "value": "F"},
//!             {"field": "age", "operator": "gt", "value": 21}
//!         ]
//!     }
//! ]"#).unwrap();
//!
//! let registry = Arc::new(OperatorRegistry::with_builtins());
//! let predicate = Predicate::compile(registry, groups);
//!
//! let record: Value = serde_json::json!({"gender": "F", "age": 65}).into();
//! assert!(predicate.matches(&record).unwrap());
//! ```
//!
//! The registry is an explicit instance: seed it with
//! [`OperatorRegistry::with_builtins`], add custom operators with
//! [`OperatorRegistry::register`] during initialization, and hand it to
//! [`Predicate::compile`]. Registration fails on duplicate names rather
//! than overwriting.

pub mod error;
pub mod evaluator;
pub mod operators;
pub mod registry;

// Re-export commonly used types
pub use error::{EngineError, Result};
pub use evaluator::Predicate;
pub use operators::{EvalArgs, Operator};
pub use registry::{OperatorEntry, OperatorRegistry, SharedOperator};

// The data model lives in verdict-core; re-exported so most callers only
// depend on this crate
pub use verdict_core::{ConditionGroup, ConditionItem, CoreError, JoinOperator, LeafTerm, Value};
