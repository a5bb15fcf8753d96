//! Inclusion grid and pillar grouping.
//!
//! Counts how often each digit 1..=9 appears among the raw letter values
//! of every analyzed name, then summarises the counts per elemental
//! pillar.

use crate::name::NameCalculation;
use crate::tables::Pillar;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Intensity band of a pillar's summed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PillarIntensity {
    Absent,
    Weak,
    Moderate,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl PillarIntensity {
    /// Classify a summed count: 0, 1-2, 3-4, 5-6, 7+.
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => PillarIntensity::Absent,
            1..=2 => PillarIntensity::Weak,
            3..=4 => PillarIntensity::Moderate,
            5..=6 => PillarIntensity::Strong,
            _ => PillarIntensity::VeryStrong,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            PillarIntensity::Absent => "Absent",
            PillarIntensity::Weak => "Weak",
            PillarIntensity::Moderate => "Moderate",
            PillarIntensity::Strong => "Strong",
            PillarIntensity::VeryStrong => "Very Strong",
        }
    }
}

/// Intensity of a single digit's count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CountIntensity {
    Absent,
    Normal,
    Reinforced,
    Intensified,
    Excessive,
}

impl CountIntensity {
    /// Classify a count: 0, 1, 2, 3, 4+.
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => CountIntensity::Absent,
            1 => CountIntensity::Normal,
            2 => CountIntensity::Reinforced,
            3 => CountIntensity::Intensified,
            _ => CountIntensity::Excessive,
        }
    }
}

/// Summed count and band of one pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarReading {
    pub pillar: Pillar,
    pub count: u32,
    pub intensity: PillarIntensity,
}

/// Frequency of each digit 1..=9 across all name letters.
///
/// # Examples
///
/// ```rust
/// use numerology_engine::{InclusionGrid, LetterTable, NameCalculation, Reducer};
///
/// let name = NameCalculation::analyze("Anna", &LetterTable::default(), &Reducer::standard());
/// let grid = InclusionGrid::from_names([&name]);
/// assert_eq!(grid.count(1), 2); // A, A
/// assert_eq!(grid.count(5), 2); // N, N
/// assert_eq!(grid.total(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionGrid {
    counts: BTreeMap<u32, u32>,
}

impl InclusionGrid {
    /// Count the raw letter values of `names`. Unmapped letters (value 0)
    /// are not counted.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a NameCalculation>) -> Self {
        let mut counts: BTreeMap<u32, u32> = (1..=9).map(|digit| (digit, 0)).collect();
        for name in names {
            for value in &name.values {
                if let Some(count) = counts.get_mut(value) {
                    *count += 1;
                }
            }
        }
        Self { counts }
    }

    /// Count of one digit (0 outside 1..=9).
    pub fn count(&self, digit: u32) -> u32 {
        self.counts.get(&digit).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// `(digit, count)` pairs in digit order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts.iter().map(|(d, c)| (*d, *c))
    }

    /// Digits that never appear.
    pub fn missing_digits(&self) -> Vec<u32> {
        self.iter().filter(|&(_, c)| c == 0).map(|(d, _)| d).collect()
    }

    /// Summed count and band of one pillar.
    pub fn pillar(&self, pillar: Pillar) -> PillarReading {
        let count = pillar.digits().iter().map(|&d| self.count(d)).sum();
        PillarReading {
            pillar,
            count,
            intensity: PillarIntensity::from_count(count),
        }
    }

    /// Readings for all four pillars.
    pub fn pillars(&self) -> Vec<PillarReading> {
        Pillar::ALL.iter().map(|&p| self.pillar(p)).collect()
    }
}
