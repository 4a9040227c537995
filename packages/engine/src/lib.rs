//! # fltr engine
//!
//! Structural query matching for in-memory JSON records. A query maps dotted
//! paths (`"user.address.city"`, `"items.*.price"`) to match specifications:
//! literals, predicates, or Mongo-style operator objects (`$gt`, `$in`,
//! `$regexp`, `$after`, `$not`, `$or`, ...). A subject matches when every
//! path resolves and its spec evaluates to success.
//!
//! ## Usage
//!
//! ```rust
//! use fltr_engine::prelude::*;
//! use serde_json::json;
//!
//! let matcher = Matcher::from_json(&json!({
//!     "age": { "$gte": 18 },
//!     "tags": { "$contains": "admin" },
//! }))
//! .expect("valid query");
//!
//! assert!(matcher.matches(&json!({ "age": 30, "tags": ["admin", "ops"] })));
//! assert!(!matcher.matches(&json!({ "age": 12, "tags": ["admin"] })));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod combinators;
pub mod config;
pub mod datetime;
pub mod error;
pub mod evaluator;
pub mod matcher;
pub mod prelude;
pub mod query;
pub mod regex_cache;
pub mod resolver;
pub mod spec;

pub use config::{DateLocale, FailurePolicy, MatcherConfig};
pub use error::{MatchFailure, Mismatch, MismatchKind, Outcome, PathFailure, QueryError, QueryResult};
pub use evaluator::Evaluator;
pub use matcher::{MatchReport, Matcher, PathMatch};
pub use query::{CompiledPath, CompiledQuery, Query, QueryCompiler, Segment};
pub use resolver::PathResolver;
pub use spec::{DateOperand, Literal, MatchSpec, OperatorSet, Operators, OrBranch, Predicate};
