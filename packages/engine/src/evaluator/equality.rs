//! Strict equality and membership

use serde_json::Value;

use crate::error::{Mismatch, Outcome};
use crate::spec::Literal;

/// Strict equality between two JSON values
///
/// Numbers compare numerically. Arrays and objects are never equal, even to
/// an identical copy.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn strict_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

#[allow(clippy::float_cmp)]
pub(super) fn equals_literal(literal: &Literal, value: &Value) -> Outcome {
    let equal = match (literal, value) {
        (Literal::Null, Value::Null) => true,
        (Literal::Bool(a), Value::Bool(b)) => a == b,
        (Literal::Number(a), Value::Number(b)) => b.as_f64() == Some(*a),
        (Literal::String(a), Value::String(b)) => a == b,
        _ => false,
    };

    if equal {
        Ok(())
    } else {
        Err(Mismatch::value_mismatch(format!("{value} does not equal {literal}")))
    }
}

pub(super) fn equals(expected: &Value, value: &Value) -> Outcome {
    if strict_equals(expected, value) {
        Ok(())
    } else {
        Err(Mismatch::value_mismatch(format!("{value} does not equal {expected}")))
    }
}

/// Linear scan for an element strictly equal to `needle`
pub(super) fn member_of(needle: &Value, haystack: &[Value]) -> Outcome {
    if haystack.iter().any(|item| strict_equals(item, needle)) {
        Ok(())
    } else {
        Err(Mismatch::value_mismatch(format!("{needle} not found in array")))
    }
}
