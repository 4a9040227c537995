//! fltr prelude
//!
//! The types needed to build and run matchers.

pub use crate::config::{DateLocale, FailurePolicy, MatcherConfig};
pub use crate::error::{MatchFailure, Mismatch, MismatchKind, QueryError};
pub use crate::matcher::{MatchReport, Matcher};
pub use crate::query::Query;
pub use crate::spec::{DateOperand, MatchSpec, Operators};
