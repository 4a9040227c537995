//! Compiled matchers
//!
//! A `Matcher` owns a compiled query and its configuration. Each path is
//! resolved against the subject with its spec as the resolver continuation,
//! and the per-path outcomes are joined with `all_succeed`.

use std::borrow::Borrow;

use serde::Serialize;
use serde_json::Value;

use crate::combinators::all_succeed;
use crate::config::{MatcherConfig, Validator};
use crate::error::{MatchFailure, Mismatch, MismatchKind, Outcome, PathFailure, QueryError, QueryResult};
use crate::evaluator::Evaluator;
use crate::query::{CompiledPath, CompiledQuery, Query, QueryCompiler};
use crate::regex_cache::REGEX_CACHE;
use crate::resolver::PathResolver;

/// Values reached by one matched path
#[derive(Debug, Clone, PartialEq)]
pub struct PathMatch<'s> {
    pub index: usize,
    pub path: String,
    /// Resolved values in resolution order; several when the path has a wildcard
    pub values: Vec<&'s Value>,
}

/// Successful match of a whole query
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchReport<'s> {
    paths: Vec<PathMatch<'s>>,
}

impl<'s> MatchReport<'s> {
    #[must_use]
    pub fn paths(&self) -> &[PathMatch<'s>] {
        &self.paths
    }

    /// Values resolved for `path`
    #[must_use]
    pub fn values(&self, path: &str) -> Option<&[&'s Value]> {
        self.paths
            .iter()
            .find(|matched| matched.path == path)
            .map(|matched| matched.values.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<'s> IntoIterator for MatchReport<'s> {
    type Item = PathMatch<'s>;
    type IntoIter = std::vec::IntoIter<PathMatch<'s>>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

/// Immutable, reusable matcher for one query
#[derive(Debug, Clone)]
pub struct Matcher {
    compiled: CompiledQuery,
    config: MatcherConfig,
}

impl Matcher {
    /// Matcher with the default configuration
    #[must_use]
    pub fn new(query: Query) -> Self {
        Self {
            compiled: QueryCompiler::compile(query),
            config: MatcherConfig::default(),
        }
    }

    /// Matcher with an explicit configuration
    ///
    /// The configuration is validated first. With `eager_patterns` every
    /// `$regexp` pattern is compiled here, so a malformed one is reported as
    /// `QueryError::InvalidPattern`.
    pub fn with_config(query: Query, config: MatcherConfig) -> QueryResult<Self> {
        config.validate()?;
        let compiled = QueryCompiler::compile(query);

        if config.eager_patterns {
            for path in compiled.paths() {
                for pattern in path.spec.patterns() {
                    REGEX_CACHE
                        .get_or_compile(pattern)
                        .map_err(|e| QueryError::InvalidPattern {
                            path: path.source.clone(),
                            reason: e.to_string(),
                        })?;
                }
            }
        }

        Ok(Self { compiled, config })
    }

    /// Matcher for a JSON query object
    pub fn from_json(query: &Value) -> QueryResult<Self> {
        Ok(Self::new(Query::from_json(query)?))
    }

    pub fn from_json_with_config(query: &Value, config: MatcherConfig) -> QueryResult<Self> {
        Self::with_config(Query::from_json(query)?, config)
    }

    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Compiled paths in declaration order
    #[must_use]
    pub fn paths(&self) -> &[CompiledPath] {
        self.compiled.paths()
    }

    /// Match `subject` against every path of the query
    pub fn match_subject<'s>(&self, subject: &'s Value) -> Result<MatchReport<'s>, MatchFailure> {
        let paths = self.compiled.paths();
        let outcome = if self.config.parallel && paths.len() > 1 {
            all_succeed(self.evaluate_parallel(subject), self.config.failure_policy)
        } else {
            all_succeed(
                paths.iter().map(|path| self.evaluate_path(path, subject)),
                self.config.failure_policy,
            )
        };

        match outcome {
            Ok(resolved) => {
                tracing::debug!(target: "fltr::matcher", paths = paths.len(), "subject matched");
                Ok(MatchReport {
                    paths: paths
                        .iter()
                        .zip(resolved)
                        .enumerate()
                        .map(|(index, (path, values))| PathMatch {
                            index,
                            path: path.source.clone(),
                            values,
                        })
                        .collect(),
                })
            }
            Err(failed) => {
                tracing::debug!(
                    target: "fltr::matcher",
                    paths = paths.len(),
                    failed = failed.len(),
                    "subject did not match"
                );
                Err(MatchFailure::new(
                    failed
                        .into_iter()
                        .map(|(index, mismatch)| PathFailure {
                            index,
                            path: paths[index].source.clone(),
                            mismatch,
                        })
                        .collect(),
                ))
            }
        }
    }

    #[must_use]
    pub fn matches(&self, subject: &Value) -> bool {
        self.match_subject(subject).is_ok()
    }

    /// Match any serializable record by converting it to JSON first
    pub fn match_record<T: Serialize + ?Sized>(&self, record: &T) -> Result<(), MatchFailure> {
        let subject = serde_json::to_value(record).map_err(|e| {
            MatchFailure::new(vec![PathFailure {
                index: 0,
                path: String::new(),
                mismatch: Mismatch::new(
                    MismatchKind::InvalidOperand,
                    format!("record is not representable as JSON: {e}"),
                ),
            }])
        })?;
        self.match_subject(&subject).map(|_| ())
    }

    #[must_use]
    pub fn matches_record<T: Serialize + ?Sized>(&self, record: &T) -> bool {
        self.match_record(record).is_ok()
    }

    /// Lazily keep the subjects that match
    pub fn filter<'m, I>(&'m self, subjects: I) -> impl Iterator<Item = I::Item> + 'm
    where
        I: IntoIterator,
        I::IntoIter: 'm,
        I::Item: Borrow<Value>,
    {
        subjects
            .into_iter()
            .filter(move |subject| self.matches(subject.borrow()))
    }

    fn evaluate_path<'s>(&self, path: &CompiledPath, subject: &'s Value) -> Outcome<Vec<&'s Value>> {
        let evaluator = Evaluator::new(&self.config);
        PathResolver::resolve_with(&path.segments, subject, &|value: &'s Value| {
            evaluator.evaluate(&path.spec, value)
        })
    }

    /// Every path on its own scoped thread, collected in declaration order
    fn evaluate_parallel<'s>(&self, subject: &'s Value) -> Vec<Outcome<Vec<&'s Value>>> {
        let joined = crossbeam_utils::thread::scope(|scope| {
            let handles: Vec<_> = self
                .compiled
                .paths()
                .iter()
                .map(|path| scope.spawn(move |_| self.evaluate_path(path, subject)))
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect::<Vec<_>>()
        });

        joined.unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    }
}
