//! Pattern and length operator implementations

use super::{apply_not, comparison, EvalArgs};
use crate::error::Result;
use crate::registry::OperatorEntry;
use regex::Regex;
use verdict_core::Value;

/// Match the field's text against a pattern.
///
/// The literal is either a pattern source string (paired with the
/// term-level `flag`) or a pattern object `{"pattern": ..., "flags": ...}`.
/// A source that fails to compile fails the match: the result is false and
/// `not` does not apply, so a broken pattern can never satisfy a rule.
pub(crate) fn regex(args: &EvalArgs<'_>) -> Result<bool> {
    let (source, flags) = match args.value {
        Some(Value::String(source)) => (source.as_str(), args.flag.unwrap_or("")),
        Some(Value::Object(map)) => {
            let source = match map.get("pattern").and_then(Value::as_str) {
                Some(source) => source,
                None => return Ok(false),
            };
            let flags = map
                .get("flags")
                .and_then(Value::as_str)
                .or(args.flag)
                .unwrap_or("");
            (source, flags)
        }
        _ => return Ok(false),
    };

    let pattern = with_inline_flags(source, flags);
    let compiled = match Regex::new(&pattern) {
        Ok(compiled) => compiled,
        Err(err) => {
            tracing::debug!("pattern {:?} failed to compile: {}", pattern, err);
            return Ok(false);
        }
    };

    Ok(apply_not(args.not, compiled.is_match(&text_of(args.field_value))))
}

/// Prefix the pattern with an inline group for the supported flag
/// letters; anything else (e.g. the host-agnostic `g`) is ignored
fn with_inline_flags(source: &str, flags: &str) -> String {
    let kept: String = flags
        .chars()
        .filter(|c| matches!(c, 'i' | 'm' | 's' | 'x' | 'U'))
        .collect();
    if kept.is_empty() {
        source.to_string()
    } else {
        format!("(?{}){}", kept, source)
    }
}

/// Textual form of a field value for pattern matching; absent fields
/// match as the empty string
fn text_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_text(*n),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| text_of(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => String::new(),
    }
}

fn number_text(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Compare the field's length against the literal.
///
/// The measure is element count for arrays, character count for strings,
/// entry count for objects, 0 for absent or null fields and display-text
/// length for other scalars. The comparison itself is a second operator
/// resolved from `compare` through the registry; `le` when `compare` is
/// unset, unknown or not callable.
pub(crate) fn length(args: &EvalArgs<'_>) -> Result<bool> {
    let measured = Value::Number(measure(args.field_value) as f64);
    let sub_args = EvalArgs {
        field_value: Some(&measured),
        value: args.value,
        not: false,
        flag: None,
        compare: None,
        registry: args.registry,
    };

    let result = match args.compare.and_then(|name| args.registry.lookup(name)) {
        Some(OperatorEntry::Callable(op)) => op.evaluate(&sub_args)?,
        _ => comparison::le(&sub_args)?,
    };
    Ok(apply_not(args.not, result))
}

fn measure(value: Option<&Value>) -> usize {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::String(s)) => s.chars().count(),
        Some(Value::Array(items)) => items.len(),
        Some(Value::Object(map)) => map.len(),
        Some(scalar) => text_of(Some(scalar)).chars().count(),
    }
}
