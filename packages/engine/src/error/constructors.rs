//! Mismatch constructor functions
//!
//! Factory methods for the failure values produced by the resolver and the
//! evaluator, so detail texts stay uniform across modules.

use super::types::{Mismatch, MismatchKind};

impl Mismatch {
    #[must_use]
    pub fn new(kind: MismatchKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operator: None,
            causes: Vec::new(),
        }
    }

    /// Attach the operator name responsible for the failure
    #[must_use]
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    pub fn path_not_found(segment: &str) -> Self {
        Self::new(
            MismatchKind::PathNotFound,
            format!("object/property '{segment}' not found"),
        )
    }

    pub fn index_out_of_bounds(segment: &str, len: usize) -> Self {
        Self::new(
            MismatchKind::IndexOutOfBounds,
            format!("index {segment} out of bound for array of length {len}"),
        )
    }

    pub fn invalid_path_segment(segment: &str) -> Self {
        Self::new(
            MismatchKind::InvalidPathSegment,
            format!("no valid array index '{segment}'"),
        )
    }

    pub fn unknown_operator(spec: &str, value_type: &str) -> Self {
        Self::new(
            MismatchKind::OperatorMismatch,
            format!("unknown operator {spec} for {value_type} value"),
        )
    }

    pub fn no_valid_attribute(value_type: &str) -> Self {
        Self::new(
            MismatchKind::OperatorMismatch,
            format!("no valid attribute: {value_type} values cannot be matched"),
        )
    }

    pub fn value_mismatch(message: impl Into<String>) -> Self {
        Self::new(MismatchKind::ValueMismatch, message)
    }

    pub fn invalid_operand(message: impl Into<String>) -> Self {
        Self::new(MismatchKind::InvalidOperand, message)
    }

    /// Failure of an any-must-succeed combinator, carrying every branch failure
    #[must_use]
    pub fn aggregate(causes: Vec<Mismatch>) -> Self {
        let message = if causes.is_empty() {
            "no alternative to try".to_string()
        } else {
            format!("none of {} alternatives succeeded", causes.len())
        };
        Self {
            kind: MismatchKind::AggregateFailure,
            message,
            operator: None,
            causes,
        }
    }
}
