//! Set-oriented operator implementations
//!
//! Scalars coerce to one-element sets, and an absent field behaves like a
//! null scalar: its set is `[null]`. So `difference` against a missing
//! field is true (null is never in the literal's set unless authored
//! there) while `intersection` against a missing field only matches a
//! literal containing null.

use super::{apply_not, EvalArgs};
use crate::error::Result;
use std::borrow::Cow;
use verdict_core::Value;

/// Coerce an operand to its set of elements
fn to_elements(value: Option<&Value>) -> Cow<'_, [Value]> {
    match value {
        Some(Value::Array(items)) => Cow::Borrowed(items.as_slice()),
        Some(scalar) => Cow::Owned(vec![scalar.clone()]),
        None => Cow::Owned(vec![Value::Null]),
    }
}

fn contains(haystack: &[Value], needle: &Value) -> bool {
    haystack.iter().any(|v| v == needle)
}

/// True iff the two sets share at least one element
pub(crate) fn intersection(args: &EvalArgs<'_>) -> Result<bool> {
    let a = to_elements(args.field_value);
    let b = to_elements(args.value);
    let shared = a.iter().any(|x| contains(&b, x));
    Ok(apply_not(args.not, shared))
}

/// True iff the field's set has at least one element absent from the
/// literal's set
pub(crate) fn difference(args: &EvalArgs<'_>) -> Result<bool> {
    let a = to_elements(args.field_value);
    let b = to_elements(args.value);
    let exclusive = a.iter().any(|x| !contains(&b, x));
    Ok(apply_not(args.not, exclusive))
}

/// True iff both operands are arrays of the same length with pairwise
/// equal elements, in order
pub(crate) fn array_equals(args: &EvalArgs<'_>) -> Result<bool> {
    let equal = match (args.field_value, args.value) {
        (Some(Value::Array(a)), Some(Value::Array(b))) => a == b,
        _ => false,
    };
    Ok(apply_not(args.not, equal))
}

/// True iff the literal `value` is a member of the field's set.
///
/// Operand roles are reversed relative to the other set operators: the
/// collection is the *field* value and the needle is the literal. Kept
/// that way for compatibility with existing rule documents.
pub(crate) fn belongs(args: &EvalArgs<'_>) -> Result<bool> {
    let member = match args.value {
        Some(needle) => contains(&to_elements(args.field_value), needle),
        None => false,
    };
    Ok(apply_not(args.not, member))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::OperatorRegistry;

    fn args<'a>(
        field_value: Option<&'a Value>,
        value: Option<&'a Value>,
        registry: &'a OperatorRegistry,
    ) -> EvalArgs<'a> {
        EvalArgs {
            field_value,
            value,
            not: false,
            flag: None,
            compare: None,
            registry,
        }
    }

    fn strings(items: &[&str]) -> Value {
        Value::Array(items.iter().map(|s| Value::from(*s)).collect())
    }

    #[test]
    fn test_intersection_shared_element() {
        let registry = OperatorRegistry::with_builtins();
        let colors = strings(&["red", "blue"]);
        let wanted = Value::Array(vec![
            Value::from("blue"),
            Value::from("green"),
            Value::from(123.0),
        ]);
        assert!(intersection(&args(Some(&colors), Some(&wanted), &registry)).unwrap());

        let other = strings(&["green"]);
        assert!(!intersection(&args(Some(&colors), Some(&other), &registry)).unwrap());
    }

    #[test]
    fn test_intersection_scalar_coercion() {
        let registry = OperatorRegistry::with_builtins();
        let country = Value::from("Brazil");
        let wanted = strings(&["Japan", "Brazil"]);
        assert!(intersection(&args(Some(&country), Some(&wanted), &registry)).unwrap());
    }

    #[test]
    fn test_intersection_absent_field_is_null_element() {
        let registry = OperatorRegistry::with_builtins();
        let wanted = strings(&["Japan", "Brazil"]);
        assert!(!intersection(&args(None, Some(&wanted), &registry)).unwrap());

        // Only a literal that names null meets a missing field
        let with_null = Value::Array(vec![Value::from("Japan"), Value::Null]);
        assert!(intersection(&args(None, Some(&with_null), &registry)).unwrap());
    }

    #[test]
    fn test_difference() {
        let registry = OperatorRegistry::with_builtins();
        let chars = strings(&["a", "b"]);
        let same = strings(&["a", "b"]);
        let partial = strings(&["a"]);
        assert!(!difference(&args(Some(&chars), Some(&same), &registry)).unwrap());
        assert!(difference(&args(Some(&chars), Some(&partial), &registry)).unwrap());
    }

    #[test]
    fn test_difference_absent_field_is_exclusive() {
        // A missing field coerces to [null], which the literal's set never
        // contains unless authored there
        let registry = OperatorRegistry::with_builtins();
        let listed = strings(&["a", "b"]);
        assert!(difference(&args(None, Some(&listed), &registry)).unwrap());

        let with_null = Value::Array(vec![Value::Null]);
        assert!(!difference(&args(None, Some(&with_null), &registry)).unwrap());
    }

    #[test]
    fn test_array_equals_requires_arrays() {
        let registry = OperatorRegistry::with_builtins();
        let colors = strings(&["red", "blue"]);
        let same = strings(&["red", "blue"]);
        let reordered = strings(&["blue", "red"]);
        let scalar = Value::from("red");

        assert!(array_equals(&args(Some(&colors), Some(&same), &registry)).unwrap());
        assert!(!array_equals(&args(Some(&colors), Some(&reordered), &registry)).unwrap());
        assert!(!array_equals(&args(Some(&scalar), Some(&same), &registry)).unwrap());
        assert!(!array_equals(&args(None, Some(&same), &registry)).unwrap());
    }

    #[test]
    fn test_belongs_reversed_operands() {
        let registry = OperatorRegistry::with_builtins();
        let chars = strings(&["a", "b"]);
        let present = Value::from("a");
        let missing = Value::from("c");

        assert!(belongs(&args(Some(&chars), Some(&present), &registry)).unwrap());
        assert!(!belongs(&args(Some(&chars), Some(&missing), &registry)).unwrap());
        assert!(!belongs(&args(None, Some(&present), &registry)).unwrap());
    }

    #[test]
    fn test_negation_law() {
        let registry = OperatorRegistry::with_builtins();
        let chars = strings(&["a", "b"]);
        let other = strings(&["c"]);

        let ops: [fn(&EvalArgs<'_>) -> Result<bool>; 4] =
            [intersection, difference, array_equals, belongs];
        for op in ops {
            let plain = args(Some(&chars), Some(&other), &registry);
            let mut negated = plain;
            negated.not = true;
            assert_eq!(op(&plain).unwrap(), !op(&negated).unwrap());
        }
    }
}
