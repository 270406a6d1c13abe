//! Cascade configuration.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Environment variable selecting [`MissingBookingPolicy`].
pub const ON_MISSING_BOOKING_ENV: &str = "WITHDRAWAL_ON_MISSING_BOOKING";

/// Errors raised while reading cascade configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting has a value outside its allowed set.
    #[error("invalid value {value:?} for {key}: expected one of {expected}")]
    InvalidValue {
        /// The setting name.
        key: &'static str,
        /// The rejected value.
        value: String,
        /// The accepted values.
        expected: &'static str,
    },
}

/// What the cascade does when a booking in the tree cannot be loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingBookingPolicy {
    /// Stop the cascade and return `DomainError::EntityNotFound`.
    #[default]
    Abort,
    /// Report the booking as `NotFound` and carry on.
    Skip,
}

impl FromStr for MissingBookingPolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            _ => Err(ConfigError::InvalidValue {
                key: ON_MISSING_BOOKING_ENV,
                value: value.to_owned(),
                expected: "abort, skip",
            }),
        }
    }
}

/// Settings for the withdrawal cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    /// Handling of bookings that no longer exist.
    pub on_missing_booking: MissingBookingPolicy,
}

impl CascadeConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to an
    /// unrecognised value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`; unset keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value is unrecognised.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let on_missing_booking = match lookup(ON_MISSING_BOOKING_ENV) {
            Some(value) => value.parse()?,
            None => MissingBookingPolicy::default(),
        };
        Ok(Self { on_missing_booking })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_abort_when_unset() {
        let config = CascadeConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.on_missing_booking, MissingBookingPolicy::Abort);
    }

    #[test]
    fn test_reads_skip_case_insensitively() {
        let config = CascadeConfig::from_lookup(|key| {
            (key == ON_MISSING_BOOKING_ENV).then(|| " Skip ".to_owned())
        })
        .unwrap();

        assert_eq!(config.on_missing_booking, MissingBookingPolicy::Skip);
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let result = CascadeConfig::from_lookup(|_| Some("retry".to_owned()));

        match result {
            Err(ConfigError::InvalidValue { key, value, .. }) => {
                assert_eq!(key, ON_MISSING_BOOKING_ENV);
                assert_eq!(value, "retry");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_deserializes_from_json_with_defaults() {
        let config: CascadeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CascadeConfig::default());

        let config: CascadeConfig =
            serde_json::from_str(r#"{"on_missing_booking":"skip"}"#).unwrap();
        assert_eq!(config.on_missing_booking, MissingBookingPolicy::Skip);
    }
}
