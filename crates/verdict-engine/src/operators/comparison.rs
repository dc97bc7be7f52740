//! Comparison operator implementations

use super::{apply_not, EvalArgs};
use crate::error::Result;
use std::cmp::Ordering;
use verdict_core::Value;

/// Strict equality, no type coercion. An absent field only equals an
/// omitted literal.
///
/// Equality is structural, so two arrays with equal elements compare
/// equal here as well; `arrayEquals` stays the explicit operator for
/// ordered array comparison (it rejects non-array operands, `eq` does
/// not).
pub(crate) fn eq(args: &EvalArgs<'_>) -> Result<bool> {
    Ok(apply_not(args.not, args.field_value == args.value))
}

/// Strict inequality
pub(crate) fn ne(args: &EvalArgs<'_>) -> Result<bool> {
    Ok(apply_not(args.not, args.field_value != args.value))
}

pub(crate) fn gt(args: &EvalArgs<'_>) -> Result<bool> {
    ordered(args, Ordering::is_gt)
}

pub(crate) fn ge(args: &EvalArgs<'_>) -> Result<bool> {
    ordered(args, Ordering::is_ge)
}

pub(crate) fn lt(args: &EvalArgs<'_>) -> Result<bool> {
    ordered(args, Ordering::is_lt)
}

pub(crate) fn le(args: &EvalArgs<'_>) -> Result<bool> {
    ordered(args, Ordering::is_le)
}

/// Ordering comparison; absent, mixed-type or unordered operands
/// evaluate false rather than raising
fn ordered(args: &EvalArgs<'_>, check: fn(Ordering) -> bool) -> Result<bool> {
    let ordering = match (args.field_value, args.value) {
        (Some(left), Some(right)) => compare_values(left, right),
        _ => None,
    };
    Ok(apply_not(args.not, ordering.map(check).unwrap_or(false)))
}

/// Compare two values
fn compare_values(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
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

    #[test]
    fn test_eq_strict() {
        let registry = OperatorRegistry::with_builtins();
        let a = Value::from("F");
        let b = Value::from("F");
        assert!(eq(&args(Some(&a), Some(&b), &registry)).unwrap());

        // No coercion across types
        let n = Value::from(1.0);
        let t = Value::from(true);
        assert!(!eq(&args(Some(&n), Some(&t), &registry)).unwrap());
    }

    #[test]
    fn test_eq_is_structural_on_arrays() {
        let registry = OperatorRegistry::with_builtins();
        let a = Value::Array(vec![Value::from("red"), Value::from("blue")]);
        let b = Value::Array(vec![Value::from("red"), Value::from("blue")]);
        let c = Value::Array(vec![Value::from("blue"), Value::from("red")]);
        assert!(eq(&args(Some(&a), Some(&b), &registry)).unwrap());
        assert!(!eq(&args(Some(&a), Some(&c), &registry)).unwrap());
    }

    #[test]
    fn test_eq_absent_field() {
        let registry = OperatorRegistry::with_builtins();
        let b = Value::from("SP");
        assert!(!eq(&args(None, Some(&b), &registry)).unwrap());
        assert!(ne(&args(None, Some(&b), &registry)).unwrap());
        // Both sides missing compare equal
        assert!(eq(&args(None, None, &registry)).unwrap());
    }

    #[test]
    fn test_ordering_numbers() {
        let registry = OperatorRegistry::with_builtins();
        let age = Value::from(65.0);
        let limit = Value::from(21.0);
        assert!(gt(&args(Some(&age), Some(&limit), &registry)).unwrap());
        assert!(ge(&args(Some(&age), Some(&limit), &registry)).unwrap());
        assert!(!lt(&args(Some(&age), Some(&limit), &registry)).unwrap());
        assert!(le(&args(Some(&limit), Some(&age), &registry)).unwrap());
        assert!(ge(&args(Some(&age), Some(&age), &registry)).unwrap());
    }

    #[test]
    fn test_ordering_strings() {
        let registry = OperatorRegistry::with_builtins();
        let a = Value::from("abc");
        let b = Value::from("abd");
        assert!(lt(&args(Some(&a), Some(&b), &registry)).unwrap());
    }

    #[test]
    fn test_ordering_mixed_types_is_false() {
        let registry = OperatorRegistry::with_builtins();
        let n = Value::from(65.0);
        let s = Value::from("21");
        assert!(!gt(&args(Some(&n), Some(&s), &registry)).unwrap());
        assert!(!le(&args(Some(&n), Some(&s), &registry)).unwrap());
        assert!(!gt(&args(None, Some(&n), &registry)).unwrap());
    }

    #[test]
    fn test_not_flag_flips_result() {
        let registry = OperatorRegistry::with_builtins();
        let age = Value::from(65.0);
        let limit = Value::from(21.0);
        let mut negated = args(Some(&age), Some(&limit), &registry);
        negated.not = true;
        assert!(!gt(&negated).unwrap());
        assert!(lt(&negated).unwrap());
    }
}
