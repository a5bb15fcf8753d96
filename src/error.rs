//! Error types for numerology calculations.
//!
//! The calculation itself never fails. Errors come from the edges:
//! validating a request payload, parsing a birth date, or loading an
//! engine configuration.

use std::collections::BTreeMap;
use thiserror::Error;

/// Format a field-level detail map as `field: message` pairs.
fn format_details(details: &BTreeMap<String, String>) -> String {
    if details.is_empty() {
        return String::from("(no details)");
    }
    details
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur around a numerology calculation.
///
/// # Examples
///
/// ```rust
/// use numerology_engine::NumerologyError;
///
/// let err = NumerologyError::InvalidBirthDate("31/02/1990".to_string());
/// assert!(err.to_string().contains("31/02/1990"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NumerologyError {
    /// One or more required fields are missing or blank.
    ///
    /// `details` maps the offending field name (`lastName`, `firstName`,
    /// `birthDate`) to a human-readable message.
    #[error("Missing required fields: {}", format_details(.details))]
    Validation { details: BTreeMap<String, String> },

    /// The birth date is not a valid `DD/MM/YYYY` Gregorian date with a
    /// year in 1900-2099.
    #[error("Invalid birth date: {0} (expected DD/MM/YYYY)")]
    InvalidBirthDate(String),

    /// The engine configuration could not be loaded or is inconsistent.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A broken precondition inside the engine. Not retryable.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NumerologyError {
    /// Build a `Validation` error from `(field, message)` pairs.
    pub fn validation<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        NumerologyError::Validation {
            details: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NumerologyError::Config("special number 7 is below 10".into());
        assert!(err.to_string().contains("special number 7"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = NumerologyError::validation([
            ("lastName", "Last name is required"),
            ("birthDate", "Birth date is required"),
        ]);
        let display = err.to_string();
        assert!(display.contains("Missing required fields"));
        assert!(display.contains("lastName: Last name is required"));
        assert!(display.contains("birthDate: Birth date is required"));
        assert!(display.contains(", "));
    }

    #[test]
    fn test_validation_details_are_sorted() {
        let err = NumerologyError::validation([("lastName", "a"), ("firstName", "b")]);
        match err {
            NumerologyError::Validation { details } => {
                let keys: Vec<_> = details.keys().cloned().collect();
                assert_eq!(keys, vec!["firstName", "lastName"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
