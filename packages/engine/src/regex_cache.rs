//! Regex compilation cache for `$regexp`
//!
//! Patterns are compiled in multi-line mode and memoised process-wide. The
//! cache only ever holds successfully compiled patterns, so it has no effect
//! on match results.

use std::sync::RwLock;

use hashbrown::HashMap;
use regex::{Regex, RegexBuilder};

/// Upper bound on cached patterns
const MAX_CACHED_PATTERNS: usize = 256;

pub struct RegexCache {
    cache: RwLock<HashMap<String, Regex>>,
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get compiled regex from cache or compile and cache if not present
    pub fn get_or_compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        if let Ok(cache) = self.cache.read() {
            if let Some(regex) = cache.get(pattern) {
                return Ok(regex.clone());
            }
        }

        let regex = RegexBuilder::new(pattern).multi_line(true).build()?;
        log::debug!("compiled $regexp pattern {pattern:?}");

        if let Ok(mut cache) = self.cache.write() {
            if cache.len() < MAX_CACHED_PATTERNS {
                cache.insert(pattern.to_string(), regex.clone());
            }
        }

        Ok(regex)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.read().map_or(0, |cache| cache.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

lazy_static::lazy_static! {
    pub static ref REGEX_CACHE: RegexCache = RegexCache::new();
}
