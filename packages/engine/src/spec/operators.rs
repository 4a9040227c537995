//! Operator objects
//!
//! An `OperatorSet` holds the recognised operator keys of one spec object.
//! Key presence is what drives evaluation, so every operator is an `Option`.

use serde_json::Value;

/// Builder-flavoured alias: `Operators::new().gte(1).lt(10)`
pub type Operators = OperatorSet;

/// Payload of `$after` / `$before`
#[derive(Debug, Clone, PartialEq)]
pub enum DateOperand {
    /// Date text parsed with the locale's default formats
    Text(String),
    /// Epoch timestamp in milliseconds
    Timestamp(f64),
    /// `{ date, format? }`
    Formatted { date: String, format: Option<String> },
}

impl DateOperand {
    pub fn formatted(date: impl Into<String>, format: impl Into<String>) -> Self {
        DateOperand::Formatted {
            date: date.into(),
            format: Some(format.into()),
        }
    }
}

impl From<&str> for DateOperand {
    fn from(s: &str) -> Self {
        DateOperand::Text(s.to_string())
    }
}

impl From<String> for DateOperand {
    fn from(s: String) -> Self {
        DateOperand::Text(s)
    }
}

impl From<f64> for DateOperand {
    fn from(millis: f64) -> Self {
        DateOperand::Timestamp(millis)
    }
}

impl From<i64> for DateOperand {
    #[allow(clippy::cast_precision_loss)]
    fn from(millis: i64) -> Self {
        DateOperand::Timestamp(millis as f64)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperatorSet {
    pub eq: Option<Value>,
    pub one_of: Option<Vec<Value>>,
    pub gte: Option<f64>,
    pub gt: Option<f64>,
    pub lte: Option<f64>,
    pub lt: Option<f64>,
    pub after: Option<DateOperand>,
    pub before: Option<DateOperand>,
    /// `$date`: marks the spec as a date comparison
    pub date: Option<Value>,
    pub format: Option<String>,
    pub regexp: Option<String>,
    pub contains: Option<Value>,
}

impl OperatorSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `$eq`
    #[must_use]
    pub fn equals(mut self, value: impl Into<Value>) -> Self {
        self.eq = Some(value.into());
        self
    }

    /// `$in`
    #[must_use]
    pub fn one_of<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.one_of = Some(values.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn gte(mut self, bound: impl Into<f64>) -> Self {
        self.gte = Some(bound.into());
        self
    }

    #[must_use]
    pub fn gt(mut self, bound: impl Into<f64>) -> Self {
        self.gt = Some(bound.into());
        self
    }

    #[must_use]
    pub fn lte(mut self, bound: impl Into<f64>) -> Self {
        self.lte = Some(bound.into());
        self
    }

    #[must_use]
    pub fn lt(mut self, bound: impl Into<f64>) -> Self {
        self.lt = Some(bound.into());
        self
    }

    #[must_use]
    pub fn after(mut self, date: impl Into<DateOperand>) -> Self {
        self.after = Some(date.into());
        self
    }

    #[must_use]
    pub fn before(mut self, date: impl Into<DateOperand>) -> Self {
        self.before = Some(date.into());
        self
    }

    #[must_use]
    pub fn date(mut self, marker: impl Into<Value>) -> Self {
        self.date = Some(marker.into());
        self
    }

    /// `$format` used to parse the subject value
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn regexp(mut self, pattern: impl Into<String>) -> Self {
        self.regexp = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn contains(mut self, value: impl Into<Value>) -> Self {
        self.contains = Some(value.into());
        self
    }

    /// Any of `$after`, `$before`, `$date`
    #[must_use]
    pub fn has_date_keys(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.date.is_some()
    }

    #[must_use]
    pub fn has_range(&self) -> bool {
        self.gte.is_some() || self.gt.is_some() || self.lte.is_some() || self.lt.is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operator_names().is_empty()
    }

    /// Names of the operators present, in canonical order
    #[must_use]
    pub fn operator_names(&self) -> Vec<&'static str> {
        let present = [
            ("$eq", self.eq.is_some()),
            ("$in", self.one_of.is_some()),
            ("$gte", self.gte.is_some()),
            ("$gt", self.gt.is_some()),
            ("$lte", self.lte.is_some()),
            ("$lt", self.lt.is_some()),
            ("$after", self.after.is_some()),
            ("$before", self.before.is_some()),
            ("$date", self.date.is_some()),
            ("$format", self.format.is_some()),
            ("$regexp", self.regexp.is_some()),
            ("$contains", self.contains.is_some()),
        ];
        present
            .into_iter()
            .filter_map(|(name, is_present)| is_present.then_some(name))
            .collect()
    }
}
