//! The calculation result record.
//!
//! A `NumerologyResult` is produced whole by one engine call and never
//! modified afterwards. It has no identity of its own; storing and
//! rendering it is up to the caller.

use crate::analysis::LetterAnalysis;
use crate::error::NumerologyError;
use crate::inclusion::{CountIntensity, InclusionGrid, PillarReading};
use crate::name::NameCalculation;
use crate::reduction::ReductionTrace;
use serde::{Deserialize, Serialize};

/// One of the three life cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclePeriod {
    pub label: String,
    pub number: u32,
    /// Age range, e.g. `0-32`, `33-59`, `60+`.
    pub years: String,
}

/// Formative, productive and harvest cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycles {
    pub formative: CyclePeriod,
    pub productive: CyclePeriod,
    pub harvest: CyclePeriod,
}

/// One of the four realization periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealizationPeriod {
    pub label: String,
    pub number: u32,
}

/// Minor and major challenge numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenges {
    /// `|month - day|` of the reduced components.
    pub first_minor: u32,
    /// `|year - day|` of the reduced components.
    pub second_minor: u32,
    /// `|first_minor - second_minor|`.
    pub major: u32,
}

/// First letters of the first and last names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityTraits {
    /// First letter of the first name, empty if none.
    pub intimate: String,
    /// First letter of the last name, empty if none.
    pub social: String,
}

/// Every per-name breakdown computed for the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameAnalysis {
    pub last_name: NameCalculation,
    pub first_name: NameCalculation,
    pub middle_names: Vec<NameCalculation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_name: Option<NameCalculation>,
}

impl NameAnalysis {
    /// All names in order: last, first, middles, marital.
    pub fn all(&self) -> impl Iterator<Item = &NameCalculation> {
        std::iter::once(&self.last_name)
            .chain(std::iter::once(&self.first_name))
            .chain(self.middle_names.iter())
            .chain(self.marital_name.iter())
    }
}

/// Reading of one digit of the inclusion grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundamentalNumber {
    pub value: u32,
    pub count: u32,
    pub intensity: CountIntensity,
    pub description: String,
}

/// How the life path was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifePathBreakdown {
    pub day: ReductionTrace,
    pub month: ReductionTrace,
    pub year: ReductionTrace,
    /// Reduction of the sum of the three reduced components.
    pub total: ReductionTrace,
}

/// Full numerology profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyResult {
    pub life_path: u32,
    pub expression: u32,
    pub intimate: u32,
    pub realization: u32,
    pub health: u32,
    pub sentiment: u32,
    pub heredity: u32,
    /// Ascending.
    pub karmic_debts: Vec<u32>,
    pub inclusion_grid: InclusionGrid,
    pub pillars: Vec<PillarReading>,
    pub cycles: Cycles,
    pub realizations: [RealizationPeriod; 4],
    pub challenges: Challenges,
    pub letter_analysis: LetterAnalysis,
    pub personality_traits: PersonalityTraits,
    pub name_analysis: NameAnalysis,
    pub vibration: Vec<u32>,
    pub fundamental_numbers: Vec<FundamentalNumber>,
    pub life_path_breakdown: LifePathBreakdown,
}

impl NumerologyResult {
    /// Serialize to a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value, NumerologyError> {
        serde_json::to_value(self).map_err(|e| NumerologyError::Internal(e.to_string()))
    }
}
