//! Path segments

use std::fmt;

/// One dot-separated token of a path
///
/// Every segment keeps its raw text: against an object, index and wildcard
/// segments are looked up as ordinary keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    /// All-digit token; `index` is `None` when it does not fit in `usize`
    Index { raw: String, index: Option<usize> },
    /// Token containing `*`
    Wildcard(String),
}

impl Segment {
    /// Classify a raw token: wildcard first, then numeric, then key
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.contains('*') {
            Segment::Wildcard(raw.to_string())
        } else if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Segment::Index {
                raw: raw.to_string(),
                index: raw.parse().ok(),
            }
        } else {
            Segment::Key(raw.to_string())
        }
    }

    /// Split a dotted path
    #[must_use]
    pub fn split(path: &str) -> Vec<Self> {
        path.split('.').map(Self::parse).collect()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Key(raw) | Segment::Wildcard(raw) | Segment::Index { raw, .. } => raw,
        }
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
