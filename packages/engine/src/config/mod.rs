//! Matcher configuration
//!
//! Controls how a `Matcher` aggregates per-path failures, whether it fans
//! paths out to worker threads, how permissive the numeric comparator is, and
//! which locale the date comparator parses with. Configuration is always
//! passed explicitly; nothing here reads or writes process-wide state after
//! construction.

pub mod locale;
pub mod validation;

use serde::Deserialize;

pub use locale::DateLocale;
pub use validation::{ConfigResult, ConfigurationError, Validator};

/// How the all-must-succeed combinator reacts to a failed path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Evaluate every path, then report all failures in declaration order
    #[default]
    EvaluateAll,
    /// Stop at the first failing path in declaration order
    FailFast,
}

/// Configuration for a `Matcher`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub failure_policy: FailurePolicy,
    /// Evaluate top-level paths on scoped worker threads
    pub parallel: bool,
    /// A numeric value checked against a spec without `$eq`, `$in` or range
    /// keys succeeds when this is set
    pub permissive_numeric: bool,
    /// Compile every `$regexp` pattern when the matcher is built
    pub eager_patterns: bool,
    pub locale: DateLocale,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::EvaluateAll,
            parallel: false,
            permissive_numeric: true,
            eager_patterns: false,
            locale: DateLocale::default(),
        }
    }
}

impl MatcherConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    #[must_use]
    pub fn fail_fast(self) -> Self {
        self.failure_policy(FailurePolicy::FailFast)
    }

    #[must_use]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    #[must_use]
    pub fn permissive_numeric(mut self, enabled: bool) -> Self {
        self.permissive_numeric = enabled;
        self
    }

    #[must_use]
    pub fn eager_patterns(mut self, enabled: bool) -> Self {
        self.eager_patterns = enabled;
        self
    }

    #[must_use]
    pub fn locale(mut self, locale: DateLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Default configuration with the locale taken from `LANG`
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().locale(DateLocale::from_env())
    }

    /// Parse a configuration from JSON, filling omitted fields with defaults
    pub fn from_json(value: serde_json::Value) -> ConfigResult<Self> {
        let config: Self = serde_json::from_value(value)
            .map_err(|e| ConfigurationError::InvalidParameter(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Validator for MatcherConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.locale.validate()
    }
}
