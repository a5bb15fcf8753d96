//! Calculation input and its validation.
//!
//! [`NumerologyInput`] is the raw request payload. Validating it yields a
//! [`ValidatedInput`], the only thing the engine computes from.

use crate::error::NumerologyError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Earliest accepted birth year.
pub const MIN_YEAR: u32 = 1900;
/// Latest accepted birth year.
pub const MAX_YEAR: u32 = 2099;

/// A Gregorian birth date in day/month/year form.
///
/// # Examples
///
/// ```rust
/// use numerology_engine::BirthDate;
///
/// let date = BirthDate::parse("15/03/1985").unwrap();
/// assert_eq!((date.day(), date.month(), date.year()), (15, 3, 1985));
/// assert_eq!(date.to_string(), "15/03/1985");
///
/// assert!(BirthDate::parse("31/02/1985").is_err());
/// assert!(BirthDate::parse("15/3/1985").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Build a date from its components.
    pub fn new(day: u32, month: u32, year: u32) -> Result<Self, NumerologyError> {
        let invalid = || {
            NumerologyError::InvalidBirthDate(format!("{:02}/{:02}/{}", day, month, year))
        };
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(invalid());
        }
        NaiveDate::from_ymd_opt(year as i32, month, day)
            .map(BirthDate)
            .ok_or_else(invalid)
    }

    /// Parse a strict `DD/MM/YYYY` string.
    pub fn parse(s: &str) -> Result<Self, NumerologyError> {
        let invalid = || NumerologyError::InvalidBirthDate(s.to_string());
        let parts: Vec<&str> = s.split('/').collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(invalid());
        };
        let widths_ok = day.len() == 2 && month.len() == 2 && year.len() == 4;
        let digits_ok = [day, month, year]
            .iter()
            .all(|part| part.bytes().all(|b| b.is_ascii_digit()));
        if !widths_ok || !digits_ok {
            return Err(invalid());
        }
        let component = |part: &str| part.parse::<u32>().map_err(|_| invalid());
        Self::new(component(*day)?, component(*month)?, component(*year)?).map_err(|_| invalid())
    }

    /// Day of month, 1..=31.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Month, 1..=12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Four-digit year.
    pub fn year(&self) -> u32 {
        self.0.year() as u32
    }

    /// The underlying calendar date.
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for BirthDate {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day(), self.month(), self.year())
    }
}

impl Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthDate::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Raw calculation request.
///
/// # Examples
///
/// ```rust
/// use numerology_engine::NumerologyInput;
///
/// let input: NumerologyInput = serde_json::from_str(
///     r#"{ "lastName": "Martin", "firstName": "Sophie", "birthDate": "15/03/1985" }"#,
/// ).unwrap();
/// assert!(input.middle_names.is_empty());
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyInput {
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_names: Vec<String>,
    /// `DD/MM/YYYY`.
    #[serde(default)]
    pub birth_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_name: Option<String>,
}

impl NumerologyInput {
    /// Create an input with no middle or marital names.
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            birth_date: birth_date.into(),
            ..Self::default()
        }
    }

    /// Set the middle names.
    pub fn with_middle_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.middle_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the marital name.
    pub fn with_marital_name(mut self, name: impl Into<String>) -> Self {
        self.marital_name = Some(name.into());
        self
    }

    /// Check required fields and parse the birth date.
    ///
    /// All missing fields are reported together. The date format is only
    /// checked once every required field is present.
    pub fn validate(&self) -> Result<ValidatedInput, NumerologyError> {
        let mut details = BTreeMap::new();
        if self.last_name.trim().is_empty() {
            details.insert("lastName".to_string(), "Last name is required".to_string());
        }
        if self.first_name.trim().is_empty() {
            details.insert("firstName".to_string(), "First name is required".to_string());
        }
        if self.birth_date.trim().is_empty() {
            details.insert("birthDate".to_string(), "Birth date is required".to_string());
        }
        if !details.is_empty() {
            return Err(NumerologyError::Validation { details });
        }

        let birth_date = BirthDate::parse(&self.birth_date)?;
        Ok(ValidatedInput {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            middle_names: self.middle_names.clone(),
            marital_name: self
                .marital_name
                .as_ref()
                .filter(|name| !name.trim().is_empty())
                .cloned(),
            birth_date,
        })
    }
}

/// Input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedInput {
    pub last_name: String,
    pub first_name: String,
    pub middle_names: Vec<String>,
    pub marital_name: Option<String>,
    pub birth_date: BirthDate,
}

impl ValidatedInput {
    /// Build directly from already-checked parts.
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        birth_date: BirthDate,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            middle_names: Vec::new(),
            marital_name: None,
            birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_dates() {
        assert!(BirthDate::parse("01/01/1900").is_ok());
        assert!(BirthDate::parse("31/12/2099").is_ok());
        assert!(BirthDate::parse("29/02/2000").is_ok());
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for bad in [
            "",
            "15-03-1985",
            "1985/03/15",
            "15/03/85",
            "5/03/1985",
            "15/03/1985/",
            "aa/bb/cccc",
            "+1/03/1985",
            "15/03/ 985",
        ] {
            assert!(
                matches!(BirthDate::parse(bad), Err(NumerologyError::InvalidBirthDate(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        for bad in [
            "00/01/1990",
            "32/01/1990",
            "10/13/1990",
            "10/00/1990",
            "01/01/1899",
            "01/01/2100",
            "29/02/1900",
            "31/04/2001",
        ] {
            assert!(BirthDate::parse(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_display_round_trip() {
        let date = BirthDate::new(5, 7, 1999).unwrap();
        assert_eq!(date.to_string(), "05/07/1999");
        assert_eq!(date.to_string().parse::<BirthDate>().unwrap(), date);
    }

    #[test]
    fn test_validate_collects_missing_fields() {
        let input = NumerologyInput::new("", "  ", "");
        match input.validate() {
            Err(NumerologyError::Validation { details }) => {
                assert_eq!(details.len(), 3);
                assert_eq!(details["firstName"], "First name is required");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_validate_bad_date() {
        let input = NumerologyInput::new("Martin", "Sophie", "1985-03-15");
        assert_eq!(
            input.validate(),
            Err(NumerologyError::InvalidBirthDate("1985-03-15".into()))
        );
    }

    #[test]
    fn test_validate_blank_marital_name_is_absent() {
        let input = NumerologyInput::new("Martin", "Sophie", "15/03/1985").with_marital_name(" ");
        assert_eq!(input.validate().unwrap().marital_name, None);
    }

    #[test]
    fn test_validate_keeps_names() {
        let input = NumerologyInput::new("Martin", "Sophie", "15/03/1985")
            .with_middle_names(["Anne", "Claire"])
            .with_marital_name("Dubois");
        let validated = input.validate().unwrap();
        assert_eq!(validated.middle_names, vec!["Anne", "Claire"]);
        assert_eq!(validated.marital_name.as_deref(), Some("Dubois"));
        assert_eq!(validated.birth_date, BirthDate::new(15, 3, 1985).unwrap());
    }

    #[test]
    fn test_birth_date_serde() {
        let date = BirthDate::new(15, 3, 1985).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"15/03/1985\"");
        let back: BirthDate = serde_json::from_str("\"15/03/1985\"").unwrap();
        assert_eq!(back, date);
        assert!(serde_json::from_str::<BirthDate>("\"31/02/1985\"").is_err());
    }
}
