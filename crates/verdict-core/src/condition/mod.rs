//! Condition tree module
//!
//! Rule documents are JSON-shaped trees of condition groups and leaf
//! terms. This module defines the typed form those documents deserialize
//! into, once, at the boundary.
//!
//! # Shape
//!
//! ```json
//! [
//!   {
//!     "join_operator": "and",
//!     "args": [
//!       {"field": "gender", "operator": "eq", "value": "F"},
//!       {
//!         "join_operator": "or",
//!         "args": [
//!           {"field": "state", "operator": "assigned", "value": false},
//!           {"field": "country", "operator": "intersection", "value": ["Japan", "Brazil"]}
//!         ]
//!       }
//!     ]
//!   }
//! ]
//! ```
//!
//! A group is recognized by its `args` list; everything else in a group's
//! `args` is a leaf term (`field` + `operator`, plus the optional `value`,
//! `flag`, `compare` and `not` members). An empty or absent
//! `join_operator` means AND.

mod types;

pub use types::{ConditionGroup, ConditionItem, JoinOperator, LeafTerm};
