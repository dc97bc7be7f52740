//! Typed condition tree deserialized from rule documents

use crate::error::CoreError;
use crate::types::Value;
use serde::{Deserialize, Deserializer, Serialize};

/// How a group's children combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum JoinOperator {
    /// All children must be true (AND logic); also what `""`/absent means
    #[default]
    And,
    /// At least one child must be true (OR logic)
    Or,
}

impl TryFrom<String> for JoinOperator {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "and" | "" => Ok(JoinOperator::And),
            "or" => Ok(JoinOperator::Or),
            _ => Err(CoreError::InvalidJoinOperator(s)),
        }
    }
}

impl From<JoinOperator> for String {
    fn from(op: JoinOperator) -> Self {
        match op {
            JoinOperator::And => "and".to_string(),
            JoinOperator::Or => "or".to_string(),
        }
    }
}

/// A single field/operator/value comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafTerm {
    /// Dot-separated path into the input record (e.g., "main_driver.name")
    pub field: String,
    /// Registered operator name or alias (e.g., "eq", "∩", "length")
    pub operator: String,
    /// Literal to compare against; optional because `assigned` may omit
    /// it. A JSON `null` literal is a real value (`Value::Null`), distinct
    /// from the member being absent.
    #[serde(
        default,
        deserialize_with = "literal_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    /// Regex flag letters (only meaningful for the `regex` operator)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    /// Secondary comparison operator name (only meaningful for `length`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare: Option<String>,
    /// Negate the operator's result
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub not: bool,
}

/// Keep an authored `null` as `Some(Value::Null)`; only a missing member
/// takes the field default of `None`
fn literal_or_null<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl LeafTerm {
    /// Create a term from the three mandatory parts
    pub fn new(field: impl Into<String>, operator: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: Some(value),
            flag: None,
            compare: None,
            not: false,
        }
    }

    /// Negate this term
    pub fn negated(mut self) -> Self {
        self.not = true;
        self
    }
}

/// An item in a group's `args`: either a leaf term or a nested group
///
/// Discrimination is structural: a nested group carries `args`, a leaf
/// carries `field` + `operator`. The group variant is tried first so a
/// nested group is never mistaken for a term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionItem {
    /// Nested group
    Group(ConditionGroup),
    /// Single comparison
    Leaf(LeafTerm),
}

/// A node in the condition tree: sibling items combined under one join
/// semantics
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConditionGroup {
    /// AND/OR combinator; `""` or absent deserializes to AND
    #[serde(default)]
    pub join_operator: JoinOperator,
    /// The group's children, all of which are evaluated
    pub args: Vec<ConditionItem>,
}

impl ConditionGroup {
    /// Create a group with the given join semantics
    pub fn new(join_operator: JoinOperator, args: Vec<ConditionItem>) -> Self {
        Self { join_operator, args }
    }

    /// Create an AND group
    pub fn all(args: Vec<ConditionItem>) -> Self {
        Self::new(JoinOperator::And, args)
    }

    /// Create an OR group
    pub fn any(args: Vec<ConditionItem>) -> Self {
        Self::new(JoinOperator::Or, args)
    }
}
