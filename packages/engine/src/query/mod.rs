//! Queries: ordered mappings from dotted paths to match specs
//!
//! A `Query` is the user-facing value; `compiler` turns it into the segment
//! lists the resolver walks.

pub mod compiler;
pub mod segments;

use serde_json::Value;

use crate::error::{QueryError, QueryResult};
use crate::spec::MatchSpec;

pub use compiler::{CompiledPath, CompiledQuery, QueryCompiler};
pub use segments::Segment;

/// Conjunction of path → spec entries
///
/// Paths are unique: inserting an existing path replaces its spec and keeps
/// its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    entries: Vec<(String, MatchSpec)>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `insert`
    #[must_use]
    pub fn with(mut self, path: impl Into<String>, spec: impl Into<MatchSpec>) -> Self {
        self.insert(path, spec);
        self
    }

    /// Insert or replace the spec for `path`
    pub fn insert(&mut self, path: impl Into<String>, spec: impl Into<MatchSpec>) {
        let path = path.into();
        let spec = spec.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == path) {
            Some(entry) => entry.1 = spec,
            None => self.entries.push((path, spec)),
        }
    }

    /// Build a query from a JSON object of path → spec
    ///
    /// `null` is the empty query. Every spec is validated.
    pub fn from_json(value: &Value) -> QueryResult<Self> {
        let map = match value {
            Value::Object(map) => map,
            Value::Null => return Ok(Self::new()),
            other => {
                return Err(QueryError::InvalidQuery(format!(
                    "query must be an object, got {}",
                    crate::evaluator::type_name(other)
                )));
            }
        };

        let mut query = Self::new();
        for (path, spec) in map {
            query.insert(path.clone(), MatchSpec::from_json_at(path, spec)?);
        }
        Ok(query)
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&MatchSpec> {
        self.entries
            .iter()
            .find_map(|(existing, spec)| (existing == path).then_some(spec))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MatchSpec)> {
        self.entries.iter().map(|(path, spec)| (path.as_str(), spec))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<(String, MatchSpec)> {
        self.entries
    }
}

impl TryFrom<Value> for Query {
    type Error = QueryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Query::from_json(&value)
    }
}

impl<P, S> FromIterator<(P, S)> for Query
where
    P: Into<String>,
    S: Into<MatchSpec>,
{
    fn from_iter<I: IntoIterator<Item = (P, S)>>(iter: I) -> Self {
        let mut query = Query::new();
        for (path, spec) in iter {
            query.insert(path, spec);
        }
        query
    }
}
