//! Configuration validation

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidFormat` - if a locale format string is empty or has no field specifier
    /// - `InvalidParameter` - if a value cannot be used at all
    fn validate(&self) -> ConfigResult<()>;
}

/// Validate a strftime format string used for date parsing
///
/// # Errors
///
/// Returns `ConfigurationError::InvalidFormat` if the format is empty or
/// contains no `%` specifier.
pub fn validate_format(format: &str, name: &str) -> ConfigResult<()> {
    if format.trim().is_empty() {
        return Err(ConfigurationError::InvalidFormat(format!(
            "{name} cannot be empty"
        )));
    }
    if !format.contains('%') {
        return Err(ConfigurationError::InvalidFormat(format!(
            "{name} '{format}' has no field specifier"
        )));
    }
    Ok(())
}
