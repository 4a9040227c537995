//! Spec evaluation against a single resolved value
//!
//! Rules are tried in a fixed order: same-type specs (literals, and object
//! specs against object values), predicates, `$not`, `$or`, then a dispatch on
//! the value's runtime type.

mod date;
mod equality;
mod numeric;
mod strings;

use serde_json::Value;

pub use equality::strict_equals;

use crate::combinators::any_succeed;
use crate::config::MatcherConfig;
use crate::error::{Mismatch, Outcome};
use crate::spec::{MatchSpec, OrBranch};

/// Evaluates specs under one configuration
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'c> {
    config: &'c MatcherConfig,
}

impl<'c> Evaluator<'c> {
    #[must_use]
    pub fn new(config: &'c MatcherConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &'c MatcherConfig {
        self.config
    }

    pub fn evaluate(&self, spec: &MatchSpec, value: &Value) -> Outcome {
        match spec {
            MatchSpec::Literal(literal) if literal.same_type(value) => equality::equals_literal(literal, value),
            MatchSpec::Operators(_) | MatchSpec::Not(_) | MatchSpec::Or(_) if value.is_object() => {
                Err(Mismatch::value_mismatch(format!(
                    "{value} does not equal {}: objects never compare equal",
                    spec.describe()
                )))
            }
            MatchSpec::Predicate(predicate) => {
                if predicate.test(value) {
                    Ok(())
                } else {
                    Err(Mismatch::value_mismatch(format!(
                        "calculation mismatch: predicate rejected {value}"
                    )))
                }
            }
            MatchSpec::Not(inner) => match self.evaluate(inner, value) {
                Ok(()) => Err(Mismatch::value_mismatch(format!(
                    "negation did not hold: {value} matched {}",
                    inner.describe()
                ))
                .with_operator("$not")),
                Err(_) => Ok(()),
            },
            MatchSpec::Or(branches) => self.any_branch(branches, value),
            _ => self.by_value_type(spec, value),
        }
    }

    fn any_branch(&self, branches: &[OrBranch], value: &Value) -> Outcome {
        let outcomes = branches.iter().map(|branch| {
            self.evaluate(&branch.spec, value).map_err(|mismatch| {
                if mismatch.operator.is_none() {
                    mismatch.with_operator(branch.label.clone())
                } else {
                    mismatch
                }
            })
        });

        any_succeed(outcomes)
            .map(|_| ())
            .map_err(|mismatch| mismatch.with_operator("$or"))
    }

    fn by_value_type(&self, spec: &MatchSpec, value: &Value) -> Outcome {
        tracing::trace!(
            target: "fltr::evaluator",
            spec = %spec.describe(),
            value_type = type_name(value),
            "dispatching on value type"
        );

        match value {
            Value::Number(number) => match number.as_f64() {
                Some(n) => numeric::compare(self, spec, n, value),
                None => Err(Mismatch::no_valid_attribute(type_name(value))),
            },
            Value::String(text) => strings::compare(self, spec, text, value),
            Value::Bool(flag) => {
                if truthy(spec) == *flag {
                    Ok(())
                } else {
                    Err(Mismatch::value_mismatch(format!(
                        "{} is not {flag}",
                        spec.describe()
                    )))
                }
            }
            Value::Array(items) => match spec {
                MatchSpec::Operators(ops) => match &ops.contains {
                    Some(needle) => {
                        equality::member_of(needle, items).map_err(|m| m.with_operator("$contains"))
                    }
                    None => Err(Mismatch::unknown_operator(&spec.describe(), "array")),
                },
                _ => Err(Mismatch::unknown_operator(&spec.describe(), "array")),
            },
            Value::Null | Value::Object(_) => Err(Mismatch::no_valid_attribute(type_name(value))),
        }
    }
}

/// Truthiness of a spec checked against a boolean value
fn truthy(spec: &MatchSpec) -> bool {
    match spec {
        MatchSpec::Literal(literal) => literal.truthy(),
        _ => true,
    }
}

/// Runtime type name of a JSON value
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
