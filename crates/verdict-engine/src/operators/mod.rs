//! Operator trait and built-in implementations
//!
//! Every operator receives the same `EvalArgs` shape: the value resolved
//! from the record, the literal authored in the rule, and the optional
//! `not`/`flag`/`compare` members of the leaf term. Built-ins are grouped
//! by family:
//! - `comparison` - eq/ne/gt/ge/lt/le
//! - `sets` - intersection/difference/arrayEquals/belongs
//! - `pattern` - regex/length

pub(crate) mod comparison;
pub(crate) mod pattern;
pub(crate) mod sets;

use crate::error::Result;
use crate::registry::OperatorRegistry;
use verdict_core::Value;

/// A named predicate comparing a resolved field value against a literal
///
/// Implemented for plain functions and closures of the matching shape, so
/// custom operators register without boilerplate:
///
/// ```
/// use verdict_engine::{EvalArgs, OperatorRegistry, Result};
///
/// fn starts_with(args: &EvalArgs<'_>) -> Result<bool> {
///     let text = args.field_value.and_then(|v| v.as_str()).unwrap_or("");
///     let prefix = args.value.and_then(|v| v.as_str()).unwrap_or("");
///     Ok(text.starts_with(prefix))
/// }
///
/// let mut registry = OperatorRegistry::with_builtins();
/// registry.register("startsWith", starts_with).unwrap();
/// ```
pub trait Operator: Send + Sync {
    /// Evaluate one leaf term
    fn evaluate(&self, args: &EvalArgs<'_>) -> Result<bool>;
}

impl<F> Operator for F
where
    F: Fn(&EvalArgs<'_>) -> Result<bool> + Send + Sync,
{
    fn evaluate(&self, args: &EvalArgs<'_>) -> Result<bool> {
        self(args)
    }
}

/// The uniform parameter object passed to every operator
#[derive(Clone, Copy)]
pub struct EvalArgs<'a> {
    /// Value resolved from the record via the term's field path;
    /// `None` means the path was absent
    pub field_value: Option<&'a Value>,
    /// Literal from the leaf term, verbatim
    pub value: Option<&'a Value>,
    /// Negation flag from the leaf term (defaults to false)
    pub not: bool,
    /// Regex flag letters from the leaf term
    pub flag: Option<&'a str>,
    /// Secondary comparison name from the leaf term (used by `length`)
    pub compare: Option<&'a str>,
    /// The registry evaluation is running against, so operators like
    /// `length` can resolve a secondary operator by name
    pub registry: &'a OperatorRegistry,
}

/// Fold the term-level negation flag into an operator result
pub(crate) fn apply_not(not: bool, result: bool) -> bool {
    result != not
}
