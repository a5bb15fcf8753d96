//! Engine configuration.
//!
//! Historical versions of the rules disagree on the special-number set,
//! the karmic debt filter and the period labels. Each of those is a named
//! setting here; [`EngineConfig::standard`] is the canonical choice and
//! [`EngineConfig::extended`] reproduces the alternative rule set.

use crate::error::NumerologyError;
use crate::reducer::Reducer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};

/// How the karmic debt candidates are filtered after the absence check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KarmicDebtFilter {
    /// Report every absent debt number (minus the excluded ones).
    Unconditional,
    /// Report only absent debt numbers that are in this list.
    AllowList(BTreeSet<u32>),
}

impl KarmicDebtFilter {
    /// Whether `number` passes the filter.
    pub fn allows(&self, number: u32) -> bool {
        match self {
            KarmicDebtFilter::Unconditional => true,
            KarmicDebtFilter::AllowList(allowed) => allowed.contains(&number),
        }
    }
}

/// Labels attached to cycle and realization periods in a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodLabels {
    /// Formative, productive and harvest cycle labels.
    pub cycles: [String; 3],
    /// First to fourth realization labels.
    pub realizations: [String; 4],
}

impl PeriodLabels {
    /// English labels.
    pub fn english() -> Self {
        Self {
            cycles: ["formative".into(), "productive".into(), "harvest".into()],
            realizations: [
                "first".into(),
                "second".into(),
                "third".into(),
                "fourth".into(),
            ],
        }
    }

    /// French labels.
    pub fn french() -> Self {
        Self {
            cycles: ["formatif".into(), "productif".into(), "moisson".into()],
            realizations: [
                "premier".into(),
                "deuxième".into(),
                "troisième".into(),
                "quatrième".into(),
            ],
        }
    }
}

impl Default for PeriodLabels {
    fn default() -> Self {
        Self::english()
    }
}

/// Engine configuration.
///
/// # Examples
///
/// ```rust
/// use numerology_engine::EngineConfig;
///
/// let config = EngineConfig::from_json_str(r#"{ "specialNumbers": [11, 22] }"#).unwrap();
/// assert!(config.special_numbers.contains(&22));
/// assert!(!config.special_numbers.contains(&33));
/// // Unspecified settings keep their standard values.
/// assert!(config.excluded_karmic_debts.contains(&7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Numbers exempt from general digit reduction.
    pub special_numbers: BTreeSet<u32>,
    /// Numbers preserved when reducing personal numbers.
    pub master_numbers: BTreeSet<u32>,
    /// Numbers preserved when reducing realization ages.
    pub realization_terminals: BTreeSet<u32>,
    /// Filter applied to absent karmic debt numbers.
    pub karmic_debt_filter: KarmicDebtFilter,
    /// Debt numbers never reported.
    pub excluded_karmic_debts: BTreeSet<u32>,
    /// Period labels.
    pub labels: PeriodLabels,
}

impl EngineConfig {
    /// Canonical rules: special numbers `{11, 22, 33}`, every absent debt
    /// reported except 3, 5 and 7, English labels.
    pub fn standard() -> Self {
        Self {
            special_numbers: [11, 22, 33].into_iter().collect(),
            master_numbers: [11, 22, 33].into_iter().collect(),
            realization_terminals: [11, 22].into_iter().collect(),
            karmic_debt_filter: KarmicDebtFilter::Unconditional,
            excluded_karmic_debts: [3, 5, 7].into_iter().collect(),
            labels: PeriodLabels::english(),
        }
    }

    /// Alternative rules: special numbers `{11, 13, 20, 22, 33}`, debts
    /// restricted to `{13, 14, 16, 19}`, French labels.
    ///
    /// No debt table key is in the allow-list, so this variant never
    /// reports a karmic debt.
    pub fn extended() -> Self {
        Self {
            special_numbers: [11, 13, 20, 22, 33].into_iter().collect(),
            karmic_debt_filter: KarmicDebtFilter::AllowList([13, 14, 16, 19].into_iter().collect()),
            labels: PeriodLabels::french(),
            ..Self::standard()
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, NumerologyError> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| NumerologyError::Config(e.to_string()))?;
        config.validate()?;
        debug!(special_numbers = ?config.special_numbers, "loaded engine configuration");
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, NumerologyError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| NumerologyError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Check the configuration is usable.
    ///
    /// Exempt numbers must be above 9, otherwise they would collide with
    /// ordinary digits.
    pub fn validate(&self) -> Result<(), NumerologyError> {
        let sets = [
            ("specialNumbers", &self.special_numbers),
            ("masterNumbers", &self.master_numbers),
            ("realizationTerminals", &self.realization_terminals),
        ];
        for (name, set) in sets {
            if let Some(n) = set.iter().find(|&&n| n <= 9) {
                return Err(NumerologyError::Config(format!(
                    "{} contains {}, exempt numbers must be greater than 9",
                    name, n
                )));
            }
        }
        if let KarmicDebtFilter::AllowList(allowed) = &self.karmic_debt_filter {
            if allowed.iter().all(|n| !(1..=9).contains(n)) {
                warn!(allow_list = ?allowed, "karmic debt allow-list matches no debt number");
            }
        }
        Ok(())
    }

    /// Build the reducer described by this configuration.
    pub fn reducer(&self) -> Reducer {
        Reducer::new(
            self.special_numbers.iter().copied(),
            self.master_numbers.iter().copied(),
            self.realization_terminals.iter().copied(),
        )
    }

    /// Whether `number` may be reported as a karmic debt.
    pub fn reports_karmic_debt(&self, number: u32) -> bool {
        !self.excluded_karmic_debts.contains(&number) && self.karmic_debt_filter.allows(number)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_reducer() {
        assert_eq!(EngineConfig::standard().reducer(), Reducer::standard());
    }

    #[test]
    fn test_extended_differs_only_where_documented() {
        let standard = EngineConfig::standard();
        let extended = EngineConfig::extended();
        assert_eq!(standard.master_numbers, extended.master_numbers);
        assert_eq!(standard.realization_terminals, extended.realization_terminals);
        assert_eq!(standard.excluded_karmic_debts, extended.excluded_karmic_debts);
        assert!(extended.special_numbers.contains(&13));
        assert_eq!(extended.labels.cycles[2], "moisson");
    }

    #[test]
    fn test_reports_karmic_debt() {
        let standard = EngineConfig::standard();
        assert!(standard.reports_karmic_debt(1));
        assert!(!standard.reports_karmic_debt(5));

        let extended = EngineConfig::extended();
        assert!((1..=9).all(|n| !extended.reports_karmic_debt(n)));
        assert!(extended.reports_karmic_debt(13));
    }

    #[test]
    fn test_json_allow_list() {
        let config =
            EngineConfig::from_json_str(r#"{ "karmicDebtFilter": { "allowList": [1, 2] } }"#)
                .unwrap();
        assert!(config.reports_karmic_debt(2));
        assert!(!config.reports_karmic_debt(4));
    }

    #[test]
    fn test_json_round_trip() {
        let json = serde_json::to_string(&EngineConfig::extended()).unwrap();
        assert_eq!(EngineConfig::from_json_str(&json).unwrap(), EngineConfig::extended());
    }

    #[test]
    fn test_rejects_digit_special_number() {
        let err = EngineConfig::from_json_str(r#"{ "specialNumbers": [7, 11] }"#).unwrap_err();
        assert!(matches!(err, NumerologyError::Config(msg) if msg.contains("specialNumbers")));
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = EngineConfig::from_json_str(r#"{ "specialNumberz": [11] }"#).unwrap_err();
        assert!(matches!(err, NumerologyError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_json_file("/nonexistent/numerology.json").unwrap_err();
        assert!(matches!(err, NumerologyError::Config(msg) if msg.contains("/nonexistent")));
    }
}
