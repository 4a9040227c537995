//! Date locales
//!
//! A locale is the pair of strftime formats the date comparator falls back to
//! when a spec gives no `$format`: the short date (`L`) and the long time
//! (`LTS`).

use serde::Deserialize;

use super::validation::{ConfigResult, ConfigurationError, Validator, validate_format};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DateLocale {
    pub name: String,
    pub date_format: String,
    pub time_format: String,
}

impl Default for DateLocale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl DateLocale {
    pub fn new(
        name: impl Into<String>,
        date_format: impl Into<String>,
        time_format: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date_format: date_format.into(),
            time_format: time_format.into(),
        }
    }

    #[must_use]
    pub fn en_us() -> Self {
        Self::new("en-US", "%m/%d/%Y", "%I:%M:%S %p")
    }

    #[must_use]
    pub fn en_gb() -> Self {
        Self::new("en-GB", "%d/%m/%Y", "%H:%M:%S")
    }

    #[must_use]
    pub fn de_de() -> Self {
        Self::new("de-DE", "%d.%m.%Y", "%H:%M:%S")
    }

    #[must_use]
    pub fn fr_fr() -> Self {
        Self::new("fr-FR", "%d/%m/%Y", "%H:%M:%S")
    }

    #[must_use]
    pub fn iso() -> Self {
        Self::new("iso", "%Y-%m-%d", "%H:%M:%S")
    }

    /// Look up a preset by language tag
    ///
    /// Accepts BCP 47 tags (`en-GB`) as well as POSIX locale names
    /// (`de_DE.UTF-8`). A bare language picks its primary region.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let base = tag.split(['.', '@']).next().unwrap_or("");
        let normalized = base.replace('_', "-").to_ascii_lowercase();
        let locale = match normalized.as_str() {
            "en-us" | "en" | "c" | "posix" => Self::en_us(),
            "en-gb" | "en-ie" | "en-au" | "en-nz" => Self::en_gb(),
            "de" | "de-de" | "de-at" | "de-ch" => Self::de_de(),
            "fr" | "fr-fr" | "fr-be" | "fr-ch" => Self::fr_fr(),
            "iso" => Self::iso(),
            _ => return None,
        };
        Some(locale)
    }

    /// Like `from_tag`, but an unknown tag is an error
    pub fn try_from_tag(tag: &str) -> ConfigResult<Self> {
        Self::from_tag(tag).ok_or_else(|| ConfigurationError::UnknownLocale(tag.to_string()))
    }

    /// Locale named by `LANG`, falling back to `en-US`
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var("LANG")
            .ok()
            .and_then(|lang| Self::from_tag(&lang))
            .unwrap_or_default()
    }

    /// The combined `date time` format
    #[must_use]
    pub fn date_time_format(&self) -> String {
        format!("{} {}", self.date_format, self.time_format)
    }
}

impl Validator for DateLocale {
    fn validate(&self) -> ConfigResult<()> {
        validate_format(&self.date_format, "date_format")?;
        validate_format(&self.time_format, "time_format")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_names_resolve_to_presets() {
        assert_eq!(DateLocale::from_tag("de_DE.UTF-8"), Some(DateLocale::de_de()));
        assert_eq!(DateLocale::from_tag("en_GB"), Some(DateLocale::en_gb()));
        assert_eq!(DateLocale::from_tag("C"), Some(DateLocale::en_us()));
        assert_eq!(DateLocale::from_tag("tlh"), None);
    }

    #[test]
    fn unknown_tag_is_an_error() {
        assert_eq!(
            DateLocale::try_from_tag("xx-YY"),
            Err(ConfigurationError::UnknownLocale("xx-YY".to_string()))
        );
    }

    #[test]
    fn presets_validate() {
        for locale in [
            DateLocale::en_us(),
            DateLocale::en_gb(),
            DateLocale::de_de(),
            DateLocale::fr_fr(),
            DateLocale::iso(),
        ] {
            assert!(locale.validate().is_ok(), "{} should validate", locale.name);
        }
    }
}
