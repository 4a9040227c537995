//! Evaluation failure types
//!
//! Core failure values produced while resolving paths and comparing values.

use std::error::Error;
use std::fmt;

/// Outcome of a resolution or comparison step
pub type Outcome<T = ()> = Result<T, Mismatch>;

/// Failure taxonomy for evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MismatchKind {
    /// Literal key missing, or the subject is not an indexable object
    PathNotFound,
    /// Numeric segment beyond the end of an array
    IndexOutOfBounds,
    /// Non-numeric, non-wildcard segment applied to an array
    InvalidPathSegment,
    /// No recognized operator or shape for the value's type
    OperatorMismatch,
    /// Equality, range, regexp or date comparison did not hold
    ValueMismatch,
    /// Operator payload could not be used (bad pattern, unparseable date)
    InvalidOperand,
    /// Every branch of an any-must-succeed combinator failed
    AggregateFailure,
}

impl MismatchKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MismatchKind::PathNotFound => "path not found",
            MismatchKind::IndexOutOfBounds => "index out of bounds",
            MismatchKind::InvalidPathSegment => "invalid path segment",
            MismatchKind::OperatorMismatch => "operator mismatch",
            MismatchKind::ValueMismatch => "value mismatch",
            MismatchKind::InvalidOperand => "invalid operand",
            MismatchKind::AggregateFailure => "aggregate failure",
        }
    }
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed resolution or comparison
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub kind: MismatchKind,
    pub message: String,
    /// Operator that produced the failure, when one applies (`$gt`, `$or`, ...)
    pub operator: Option<String>,
    /// Sub-failures of an aggregate, in evaluation order
    pub causes: Vec<Mismatch>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operator {
            Some(op) => write!(f, "{} ({}): {}", self.kind, op, self.message)?,
            None => write!(f, "{}: {}", self.kind, self.message)?,
        }
        if !self.causes.is_empty() {
            f.write_str(" [")?;
            for (i, cause) in self.causes.iter().enumerate() {
                if i > 0 {
                    f.write_str("; ")?;
                }
                write!(f, "{cause}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl Error for Mismatch {}

/// A single failed path of a `match` call
#[derive(Debug, Clone, PartialEq)]
pub struct PathFailure {
    /// Declaration index of the path within the query
    pub index: usize,
    pub path: String,
    pub mismatch: Mismatch,
}

impl fmt::Display for PathFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {}", self.path, self.mismatch)
    }
}

/// Failure of a whole `match` call
///
/// Holds at least one path failure, ordered by declaration index. The first
/// one is the reported failure.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchFailure {
    failures: Vec<PathFailure>,
}

impl MatchFailure {
    pub(crate) fn new(failures: Vec<PathFailure>) -> Self {
        debug_assert!(!failures.is_empty());
        Self { failures }
    }

    /// The first failed path in declaration order
    #[must_use]
    pub fn first(&self) -> &PathFailure {
        &self.failures[0]
    }

    #[must_use]
    pub fn failures(&self) -> &[PathFailure] {
        &self.failures
    }

    /// Failure for the given path, if that path failed
    #[must_use]
    pub fn for_path(&self, path: &str) -> Option<&PathFailure> {
        self.failures.iter().find(|failure| failure.path == path)
    }

    #[must_use]
    pub fn into_failures(self) -> Vec<PathFailure> {
        self.failures
    }
}

impl fmt::Display for MatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "query did not match at {}", self.first())?;
        if self.failures.len() > 1 {
            write!(f, " (and {} more failed paths)", self.failures.len() - 1)?;
        }
        Ok(())
    }
}

impl Error for MatchFailure {}
