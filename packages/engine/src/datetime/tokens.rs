//! moment-style format tokens
//!
//! Queries written against moment formats (`DD.MM.YYYY`, `L LTS`) are
//! translated to strftime before parsing. Formats that already contain `%`
//! pass through unchanged.

use crate::config::DateLocale;

/// Token table, longest tokens first so `YYYY` wins over `YY`
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("MMMM", "%B"),
    ("dddd", "%A"),
    ("DDDD", "%j"),
    ("MMM", "%b"),
    ("ddd", "%a"),
    ("SSS", "%3f"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("ZZ", "%z"),
    ("M", "%m"),
    ("D", "%d"),
    ("H", "%H"),
    ("h", "%I"),
    ("m", "%M"),
    ("s", "%S"),
    ("A", "%p"),
    ("a", "%p"),
    ("Z", "%:z"),
    ("X", "%s"),
];

/// Translate a moment-style format into strftime
///
/// `L` and `LTS` expand to the locale's date and time formats. Text inside
/// `[...]` is copied literally.
#[must_use]
pub fn to_strftime(format: &str, locale: &DateLocale) -> String {
    if format.contains('%') {
        return format.to_string();
    }

    let mut out = String::with_capacity(format.len() * 2);
    let mut rest = format;

    while let Some(ch) = rest.chars().next() {
        if ch == '[' {
            let literal_end = rest.find(']').unwrap_or(rest.len());
            out.push_str(&rest[1..literal_end]);
            rest = rest.get(literal_end + 1..).unwrap_or("");
            continue;
        }
        if let Some(tail) = rest.strip_prefix("LTS") {
            out.push_str(&locale.time_format);
            rest = tail;
            continue;
        }
        if let Some(tail) = rest.strip_prefix('L') {
            out.push_str(&locale.date_format);
            rest = tail;
            continue;
        }
        if let Some((token, replacement)) = TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
            out.push_str(replacement);
            rest = &rest[token.len()..];
            continue;
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_common_tokens() {
        let locale = DateLocale::en_us();
        assert_eq!(to_strftime("YYYY-MM-DD", &locale), "%Y-%m-%d");
        assert_eq!(to_strftime("DD.MM.YY HH:mm:ss", &locale), "%d.%m.%y %H:%M:%S");
        assert_eq!(to_strftime("h:mm A", &locale), "%I:%M %p");
    }

    #[test]
    fn expands_locale_tokens() {
        let locale = DateLocale::en_gb();
        assert_eq!(to_strftime("L LTS", &locale), "%d/%m/%Y %H:%M:%S");
    }

    #[test]
    fn keeps_bracketed_text_and_strftime() {
        let locale = DateLocale::en_us();
        assert_eq!(to_strftime("YYYY[T]HH", &locale), "%YT%H");
        assert_eq!(to_strftime("%Y/%m/%d", &locale), "%Y/%m/%d");
    }
}
