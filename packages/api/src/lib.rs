//! # fltr
//!
//! Structural query matching for in-memory JSON records. Queries map dotted
//! paths to match specifications and are compiled once into a reusable
//! [`Matcher`].
//!
//! ```rust
//! use fltr::Operators;
//! use serde_json::json;
//!
//! let matcher = fltr::query()
//!     .path("user.name", "ada")
//!     .path("orders.*.total", Operators::new().gte(100))
//!     .build()
//!     .expect("valid query");
//!
//! assert!(matcher.matches(&json!({
//!     "user": { "name": "ada" },
//!     "orders": [{ "total": 20 }, { "total": 150 }]
//! })));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use serde_json::Value;

pub mod builder;

pub use builder::QueryBuilder;

// Re-export the engine's public surface
pub use fltr_engine::{
    DateLocale, DateOperand, FailurePolicy, Literal, MatchFailure, MatchReport, MatchSpec, Matcher,
    MatcherConfig, Mismatch, MismatchKind, Operators, OrBranch, PathFailure, PathMatch, Predicate,
    Query, QueryError, QueryResult,
};
pub use fltr_engine::prelude;

/// Main entry point providing static constructors
pub struct Fltr;

impl Fltr {
    /// Start a fluent query
    #[must_use]
    pub fn query() -> QueryBuilder {
        QueryBuilder::new()
    }

    /// Compile a JSON query with the default configuration
    pub fn compile(query: &Value) -> QueryResult<Matcher> {
        compile(query)
    }
}

/// Start a fluent query
///
/// Shorthand for `QueryBuilder::new()`
#[must_use]
pub fn query() -> QueryBuilder {
    QueryBuilder::new()
}

/// Compile a JSON query object into a matcher
pub fn compile(query: &Value) -> QueryResult<Matcher> {
    Matcher::from_json(query)
}

/// One-shot match of a JSON query against a subject
///
/// Compiles the query on every call; keep a [`Matcher`] around when the same
/// query is applied to many subjects.
pub fn matches(query: &Value, subject: &Value) -> QueryResult<bool> {
    Ok(compile(query)?.matches(subject))
}
