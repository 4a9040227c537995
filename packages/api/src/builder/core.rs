//! Core `QueryBuilder` structure and methods
//!
//! Collects paths, specs and configuration, and produces a `Matcher` in one
//! `build` call. Spec construction errors are held until `build`, so the
//! chain itself never fails.

use fltr_engine::{DateLocale, FailurePolicy, MatchSpec, Matcher, MatcherConfig, Query, QueryError, QueryResult};
use serde_json::Value;

/// Fluent builder for matchers
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    query: Query,
    config: MatcherConfig,
    /// First spec conversion error, reported by `build`
    error: Option<QueryError>,
    debug_enabled: bool,
}

impl QueryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Match `path` against a typed spec
    ///
    /// Declaring the same path twice replaces the earlier spec in place.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>, spec: impl Into<MatchSpec>) -> Self {
        self.query.insert(path, spec);
        self
    }

    /// Match `path` against a JSON-shaped spec (`{"$gte": 5}`, `"ada"`, ...)
    #[must_use]
    pub fn json_path(mut self, path: impl Into<String>, spec: &Value) -> Self {
        let path = path.into();
        match MatchSpec::from_json_at(&path, spec) {
            Ok(spec) => self.query.insert(path, spec),
            Err(error) => self.record_error(error),
        }
        self
    }

    /// Add every entry of a JSON query object
    #[must_use]
    pub fn json(mut self, query: &Value) -> Self {
        match Query::from_json(query) {
            Ok(parsed) => {
                for (path, spec) in parsed.iter() {
                    self.query.insert(path, spec.clone());
                }
            }
            Err(error) => self.record_error(error),
        }
        self
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn config(mut self, config: MatcherConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn fail_fast(mut self) -> Self {
        self.config = self.config.failure_policy(FailurePolicy::FailFast);
        self
    }

    #[must_use]
    pub fn parallel(mut self) -> Self {
        self.config = self.config.parallel(true);
        self
    }

    #[must_use]
    pub fn locale(mut self, locale: DateLocale) -> Self {
        self.config = self.config.locale(locale);
        self
    }

    /// Log the compiled paths at build time
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    fn record_error(&mut self, error: QueryError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Compile the collected query
    pub fn build(self) -> QueryResult<Matcher> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let matcher = Matcher::with_config(self.query, self.config)?;
        if self.debug_enabled {
            for path in matcher.paths() {
                tracing::debug!(
                    target: "fltr::builder",
                    path = %path.source,
                    spec = %path.spec.describe(),
                    "compiled path"
                );
            }
        }
        Ok(matcher)
    }
}
