//! Error handling for query construction and evaluation
//!
//! Two families live here. `Mismatch` is the value every failed evaluation
//! produces (path lookups, operator comparisons, aggregates); it is never a
//! fault. `QueryError` is returned when a query cannot be turned into a
//! matcher in the first place.

mod constructors;
mod query;
mod types;

pub use query::{QueryError, QueryResult};
pub use types::{MatchFailure, Mismatch, MismatchKind, Outcome, PathFailure};
