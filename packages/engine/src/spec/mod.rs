//! Match specifications
//!
//! `MatchSpec` is the closed set of things a query path can be matched
//! against: a literal, a predicate, an operator object, `$not`, or `$or`.
//! JSON-shaped specs are validated into this union once, when the query is
//! built (see `parse`).

pub mod operators;
mod parse;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::QueryResult;

pub use operators::{DateOperand, OperatorSet, Operators};

/// Predicate function type
pub type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

/// Shared unary predicate over a resolved value
#[derive(Clone)]
pub struct Predicate(Arc<PredicateFn>);

impl Predicate {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    #[inline]
    #[must_use]
    pub fn test(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(<fn>)")
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

/// Scalar literal compared by strict equality
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Literal {
    /// Literal for a scalar JSON value; `None` for arrays and objects
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Literal::Null),
            Value::Bool(b) => Some(Literal::Bool(*b)),
            Value::Number(n) => n.as_f64().map(Literal::Number),
            Value::String(s) => Some(Literal::String(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Whether `value` has this literal's runtime type
    #[must_use]
    pub fn same_type(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Literal::Null, Value::Null)
                | (Literal::Bool(_), Value::Bool(_))
                | (Literal::Number(_), Value::Number(_))
                | (Literal::String(_), Value::String(_))
        )
    }

    /// Truthiness used when a literal is checked against a boolean value
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Literal::Null => false,
            Literal::Bool(b) => *b,
            Literal::Number(n) => *n != 0.0 && !n.is_nan(),
            Literal::String(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Number(n) => write!(f, "{n}"),
            Literal::String(s) => write!(f, "{s:?}"),
        }
    }
}

/// One labelled alternative of `$or`
#[derive(Debug, Clone, PartialEq)]
pub struct OrBranch {
    /// Operator name the branch was declared under
    pub label: String,
    pub spec: MatchSpec,
}

impl OrBranch {
    pub fn new(label: impl Into<String>, spec: impl Into<MatchSpec>) -> Self {
        Self {
            label: label.into(),
            spec: spec.into(),
        }
    }
}

/// What a resolved value is matched against
#[derive(Debug, Clone, PartialEq)]
pub enum MatchSpec {
    Literal(Literal),
    Predicate(Predicate),
    Operators(Box<OperatorSet>),
    /// `{ $not: spec }`
    Not(Box<MatchSpec>),
    /// `{ $or: { op: spec, ... } }`
    Or(Vec<OrBranch>),
}

impl MatchSpec {
    /// Validate a JSON-shaped spec
    pub fn from_json(value: &Value) -> QueryResult<Self> {
        parse::parse_spec("", value)
    }

    /// Like `from_json`, with errors naming `path`
    pub fn from_json_at(path: &str, value: &Value) -> QueryResult<Self> {
        parse::parse_spec(path, value)
    }

    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        MatchSpec::Predicate(Predicate::new(f))
    }

    /// Negation of `spec`
    #[must_use]
    pub fn not(spec: impl Into<MatchSpec>) -> Self {
        MatchSpec::Not(Box::new(spec.into()))
    }

    /// Inclusive or over `specs`, each branch labelled by its own description
    pub fn any_of<I, S>(specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<MatchSpec>,
    {
        MatchSpec::Or(
            specs
                .into_iter()
                .map(|spec| {
                    let spec = spec.into();
                    OrBranch::new(spec.describe(), spec)
                })
                .collect(),
        )
    }

    /// Short description used in diagnostics (`literal`, `$gt`, `$not`, ...)
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            MatchSpec::Literal(literal) => format!("literal {literal}"),
            MatchSpec::Predicate(_) => "predicate".to_string(),
            MatchSpec::Operators(ops) if ops.is_empty() => "{}".to_string(),
            MatchSpec::Operators(ops) => ops.operator_names().join(","),
            MatchSpec::Not(_) => "$not".to_string(),
            MatchSpec::Or(_) => "$or".to_string(),
        }
    }

    /// Every `$regexp` pattern reachable from this spec
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        let mut patterns = Vec::new();
        self.collect_patterns(&mut patterns);
        patterns
    }

    fn collect_patterns<'a>(&'a self, patterns: &mut Vec<&'a str>) {
        match self {
            MatchSpec::Operators(ops) => {
                if let Some(pattern) = ops.regexp.as_deref() {
                    patterns.push(pattern);
                }
            }
            MatchSpec::Not(inner) => inner.collect_patterns(patterns),
            MatchSpec::Or(branches) => {
                for branch in branches {
                    branch.spec.collect_patterns(patterns);
                }
            }
            MatchSpec::Literal(_) | MatchSpec::Predicate(_) => {}
        }
    }
}

impl TryFrom<Value> for MatchSpec {
    type Error = crate::error::QueryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        MatchSpec::from_json(&value)
    }
}

impl From<Literal> for MatchSpec {
    fn from(literal: Literal) -> Self {
        MatchSpec::Literal(literal)
    }
}

impl From<OperatorSet> for MatchSpec {
    fn from(ops: OperatorSet) -> Self {
        MatchSpec::Operators(Box::new(ops))
    }
}

impl From<Predicate> for MatchSpec {
    fn from(predicate: Predicate) -> Self {
        MatchSpec::Predicate(predicate)
    }
}

impl From<bool> for MatchSpec {
    fn from(b: bool) -> Self {
        MatchSpec::Literal(Literal::Bool(b))
    }
}

impl From<&str> for MatchSpec {
    fn from(s: &str) -> Self {
        MatchSpec::Literal(Literal::String(s.to_string()))
    }
}

impl From<String> for MatchSpec {
    fn from(s: String) -> Self {
        MatchSpec::Literal(Literal::String(s))
    }
}

impl From<f64> for MatchSpec {
    fn from(n: f64) -> Self {
        MatchSpec::Literal(Literal::Number(n))
    }
}

impl From<i32> for MatchSpec {
    fn from(n: i32) -> Self {
        MatchSpec::Literal(Literal::Number(f64::from(n)))
    }
}

impl From<i64> for MatchSpec {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        MatchSpec::Literal(Literal::Number(n as f64))
    }
}

impl From<u64> for MatchSpec {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: u64) -> Self {
        MatchSpec::Literal(Literal::Number(n as f64))
    }
}
