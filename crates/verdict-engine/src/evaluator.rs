//! Recursive condition tree evaluation
//!
//! A `Predicate` captures a condition tree and a registry once and can be
//! evaluated against any number of records. Evaluation is a plain
//! recursive walk: every child of a group is evaluated eagerly, the
//! collected booleans are folded with AND or OR, and nested groups recurse
//! as single-element group lists.

use crate::error::{EngineError, Result};
use crate::operators::EvalArgs;
use crate::registry::{OperatorEntry, OperatorRegistry};
use std::sync::Arc;
use verdict_core::{ConditionGroup, ConditionItem, JoinOperator, LeafTerm, Value};

/// A compiled, reusable check
///
/// Cheap to build; the tree is never mutated, so a single predicate may be
/// shared across threads as long as every involved operator is pure.
pub struct Predicate {
    registry: Arc<OperatorRegistry>,
    groups: Vec<ConditionGroup>,
}

impl Predicate {
    /// Capture a condition tree and the registry it will dispatch through.
    ///
    /// The entry point accepts a sequence of top-level groups for
    /// compatibility with existing rule documents. When more than one is
    /// given, the children of all groups flatten into a single result list
    /// folded under the *last* group's `join_operator` — an artifact of
    /// the original fold, preserved as-is. Exactly one top-level group is
    /// the supported usage.
    pub fn compile(registry: Arc<OperatorRegistry>, groups: Vec<ConditionGroup>) -> Self {
        Self { registry, groups }
    }

    /// Evaluate the tree against one record
    pub fn matches(&self, record: &Value) -> Result<bool> {
        evaluate_groups(&self.registry, &self.groups, record)
    }
}

fn evaluate_groups(
    registry: &OperatorRegistry,
    groups: &[ConditionGroup],
    record: &Value,
) -> Result<bool> {
    let mut results = Vec::new();
    let mut joiner = JoinOperator::And;

    // Every sibling is evaluated before the fold; no short-circuiting, so
    // operators with observable effects all run regardless of the outcome
    for group in groups {
        for item in &group.args {
            let result = match item {
                ConditionItem::Group(nested) => {
                    evaluate_groups(registry, std::slice::from_ref(nested), record)?
                }
                ConditionItem::Leaf(term) => evaluate_leaf(registry, term, record)?,
            };
            results.push(result);
        }
        joiner = group.join_operator;
    }

    let verdict = match joiner {
        JoinOperator::Or => results.iter().any(|v| *v),
        JoinOperator::And => results.iter().all(|v| *v),
    };
    tracing::debug!("group fold: {:?} over {:?} -> {}", joiner, results, verdict);
    Ok(verdict)
}

fn evaluate_leaf(registry: &OperatorRegistry, term: &LeafTerm, record: &Value) -> Result<bool> {
    let entry = registry
        .lookup(&term.operator)
        .ok_or_else(|| EngineError::UnknownOperator(term.operator.clone()))?;
    let field_value = record.get_path(&term.field);

    let result = match entry {
        OperatorEntry::Assigned => {
            // Presence check: the comparand defaults to true when omitted
            let expected = term.value.as_ref().map(Value::coerce_bool).unwrap_or(true);
            field_value.is_some() == expected
        }
        OperatorEntry::Callable(op) => {
            let args = EvalArgs {
                field_value,
                value: term.value.as_ref(),
                not: term.not,
                flag: term.flag.as_deref(),
                compare: term.compare.as_deref(),
                registry,
            };
            op.evaluate(&args)?
        }
    };

    tracing::debug!(
        "term {:?} {} {:?} -> {}",
        term.field,
        term.operator,
        term.value,
        result
    );
    Ok(result)
}
