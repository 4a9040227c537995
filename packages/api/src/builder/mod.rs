//! Fluent query builder

pub mod core;

pub use core::QueryBuilder;
