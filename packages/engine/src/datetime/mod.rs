//! Date parsing collaborator
//!
//! Turns subject values and `$after`/`$before` operands into comparable
//! instants. Instants are naive UTC date-times: inputs carrying an explicit
//! offset are converted to UTC, inputs without one are taken as UTC.

mod tokens;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::config::DateLocale;

pub use tokens::to_strftime;

/// Comparable point in time
pub type Instant = NaiveDateTime;

/// ISO-8601 shapes tried before the locale formats
const ISO_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
];

/// Parses date text with an explicit locale
#[derive(Debug, Clone, Copy)]
pub struct DateParser<'a> {
    locale: &'a DateLocale,
}

impl<'a> DateParser<'a> {
    #[must_use]
    pub fn new(locale: &'a DateLocale) -> Self {
        Self { locale }
    }

    /// Parse `text`, with `format` when one is given
    ///
    /// A format containing `%` is used as strftime; anything else is read as
    /// moment-style tokens (`YYYY-MM-DD HH:mm`).
    #[must_use]
    pub fn parse(&self, text: &str, format: Option<&str>) -> Option<Instant> {
        let text = text.trim();
        match format {
            Some(format) => parse_with_format(text, &to_strftime(format, self.locale)),
            None => self.parse_default(text),
        }
    }

    /// Instant for an epoch timestamp in milliseconds
    #[must_use]
    pub fn from_timestamp(millis: f64) -> Option<Instant> {
        if !millis.is_finite() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        DateTime::<Utc>::from_timestamp_millis(millis as i64).map(|dt| dt.naive_utc())
    }

    fn parse_default(&self, text: &str) -> Option<Instant> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt.naive_utc());
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
            return Some(dt.naive_utc());
        }
        ISO_FORMATS
            .iter()
            .find_map(|format| parse_with_format(text, format))
            .or_else(|| parse_with_format(text, &self.locale.date_time_format()))
            .or_else(|| parse_with_format(text, &self.locale.date_format))
    }
}

/// Parse with a single strftime format
///
/// Offsets in the format are honoured; a date-only format yields midnight.
#[must_use]
pub fn parse_with_format(text: &str, format: &str) -> Option<Instant> {
    if let Ok(dt) = DateTime::parse_from_str(text, format) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(text, format)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .expect("valid date")
    }

    #[test]
    fn default_parsing_accepts_iso_dates() {
        let locale = DateLocale::en_us();
        let parser = DateParser::new(&locale);
        assert_eq!(parser.parse("2024-06-01", None), Some(instant(2024, 6, 1, 0, 0, 0)));
        assert_eq!(
            parser.parse("2024-06-01T10:30:00Z", None),
            Some(instant(2024, 6, 1, 10, 30, 0))
        );
        assert_eq!(
            parser.parse("2024-06-01T12:30:00+02:00", None),
            Some(instant(2024, 6, 1, 10, 30, 0))
        );
    }

    #[test]
    fn default_parsing_falls_back_to_locale() {
        let us = DateLocale::en_us();
        assert_eq!(
            DateParser::new(&us).parse("06/01/2024 03:04:05 PM", None),
            Some(instant(2024, 6, 1, 15, 4, 5))
        );
        assert_eq!(
            DateParser::new(&us).parse("06/01/2024", None),
            Some(instant(2024, 6, 1, 0, 0, 0))
        );

        let de = DateLocale::de_de();
        assert_eq!(
            DateParser::new(&de).parse("01.06.2024", None),
            Some(instant(2024, 6, 1, 0, 0, 0))
        );
    }

    #[test]
    fn explicit_formats() {
        let locale = DateLocale::en_us();
        let parser = DateParser::new(&locale);
        assert_eq!(
            parser.parse("01-06-2024 08:15", Some("DD-MM-YYYY HH:mm")),
            Some(instant(2024, 6, 1, 8, 15, 0))
        );
        assert_eq!(
            parser.parse("2024/06/01", Some("%Y/%m/%d")),
            Some(instant(2024, 6, 1, 0, 0, 0))
        );
        assert_eq!(parser.parse("garbage", Some("YYYY")), None);
    }

    #[test]
    fn timestamps_are_milliseconds() {
        assert_eq!(
            DateParser::from_timestamp(1_717_200_000_000.0),
            Some(instant(2024, 6, 1, 0, 0, 0))
        );
        assert_eq!(DateParser::from_timestamp(f64::NAN), None);
    }
}
