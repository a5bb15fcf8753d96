//! Static lookup tables.
//!
//! Everything the engine reads but never writes: the letter table, cycle
//! boundaries and realization ages keyed by life path, karmic debt labels,
//! pillar groupings and the inclusion meanings. Tables are plain values
//! injected into the engine; [`NumerologyTables::shared`] hands out a
//! process-wide default built on first use.

use crate::letter::LetterTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

/// Age boundaries of the three life cycles for one life path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleBoundaries {
    /// Last age of the formative cycle.
    pub formative: u32,
    /// Last age of the productive cycle.
    pub productive: u32,
    /// Nominal start of the harvest cycle. Ranges are derived from
    /// `productive + 1`, not from this field.
    pub harvest: u32,
}

impl CycleBoundaries {
    pub const fn new(formative: u32, productive: u32, harvest: u32) -> Self {
        Self {
            formative,
            productive,
            harvest,
        }
    }
}

/// The four raw realization ages for one life path.
pub type RealizationAges = [u32; 4];

/// The four elemental pillars of the inclusion grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pillar {
    Physical,
    Emotional,
    Mental,
    Intuitive,
}

impl Pillar {
    /// All pillars in reporting order.
    pub const ALL: [Pillar; 4] = [
        Pillar::Physical,
        Pillar::Emotional,
        Pillar::Mental,
        Pillar::Intuitive,
    ];

    /// Digits grouped under this pillar. Groups overlap.
    pub fn digits(self) -> &'static [u32] {
        match self {
            Pillar::Physical => &[4, 5, 6],
            Pillar::Emotional => &[2, 3, 6],
            Pillar::Mental => &[1, 7, 8],
            Pillar::Intuitive => &[3, 7, 9],
        }
    }

    /// Lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Pillar::Physical => "physical",
            Pillar::Emotional => "emotional",
            Pillar::Mental => "mental",
            Pillar::Intuitive => "intuitive",
        }
    }
}

const CYCLE_YEARS: [(u32, CycleBoundaries); 9] = [
    (1, CycleBoundaries::new(27, 54, 55)),
    (2, CycleBoundaries::new(26, 53, 55)),
    (3, CycleBoundaries::new(25, 52, 55)),
    (4, CycleBoundaries::new(24, 60, 55)),
    (5, CycleBoundaries::new(32, 59, 55)),
    (6, CycleBoundaries::new(31, 58, 55)),
    (7, CycleBoundaries::new(30, 57, 55)),
    (8, CycleBoundaries::new(29, 56, 55)),
    (9, CycleBoundaries::new(28, 55, 55)),
];

const REALIZATION_AGES: [(u32, RealizationAges); 9] = [
    (1, [35, 44, 53, 62]),
    (2, [34, 43, 52, 61]),
    (3, [33, 42, 51, 60]),
    (4, [32, 41, 50, 59]),
    (5, [31, 40, 49, 58]),
    (6, [30, 39, 48, 57]),
    (7, [29, 38, 47, 56]),
    (8, [28, 37, 46, 55]),
    (9, [27, 36, 45, 54]),
];

const KARMIC_DEBTS: [(u32, &str); 9] = [
    (1, "Orgueil et besoin de pouvoir"),
    (2, "Relations et dépendance affective"),
    (3, "Expression et communication"),
    (4, "Travail et organisation"),
    (5, "Liberté et impulsivité"),
    (6, "Responsabilités familiales"),
    (7, "Évolution spirituelle"),
    (8, "Gestion matérielle"),
    (9, "Générosité et altruisme"),
];

const INCLUSION_MEANINGS: [(u32, &str); 9] = [
    (1, "Force et individualité"),
    (2, "Sensibilité et relations"),
    (3, "Créativité et expression"),
    (4, "Travail et stabilité"),
    (5, "Liberté et changement"),
    (6, "Responsabilités familiales"),
    (7, "Spiritualité et réflexion"),
    (8, "Pouvoir matériel"),
    (9, "Altruisme et humanisme"),
];

/// Read-only lookup tables used by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyTables {
    pub letters: LetterTable,
    pub cycle_years: BTreeMap<u32, CycleBoundaries>,
    pub realization_ages: BTreeMap<u32, RealizationAges>,
    pub karmic_debts: BTreeMap<u32, String>,
    pub inclusion_meanings: BTreeMap<u32, String>,
}

impl NumerologyTables {
    /// Process-wide default tables, built once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numerology_engine::NumerologyTables;
    ///
    /// let tables = NumerologyTables::shared();
    /// assert_eq!(tables.cycle_boundaries(5).unwrap().formative, 32);
    /// assert!(tables.cycle_boundaries(11).is_none());
    /// ```
    pub fn shared() -> Arc<NumerologyTables> {
        static TABLES: OnceLock<Arc<NumerologyTables>> = OnceLock::new();
        Arc::clone(TABLES.get_or_init(|| Arc::new(NumerologyTables::default())))
    }

    /// Cycle boundaries for a life path, if the table has an entry.
    pub fn cycle_boundaries(&self, life_path: u32) -> Option<CycleBoundaries> {
        self.cycle_years.get(&life_path).copied()
    }

    /// Raw realization ages for a life path, if the table has an entry.
    pub fn realization_ages(&self, life_path: u32) -> Option<RealizationAges> {
        self.realization_ages.get(&life_path).copied()
    }

    /// Label of a karmic debt number.
    pub fn karmic_debt_label(&self, number: u32) -> Option<&str> {
        self.karmic_debts.get(&number).map(String::as_str)
    }

    /// Karmic debt numbers in ascending order.
    pub fn karmic_debt_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.karmic_debts.keys().copied()
    }

    /// Meaning of a digit in the inclusion grid.
    pub fn inclusion_meaning(&self, digit: u32) -> Option<&str> {
        self.inclusion_meanings.get(&digit).map(String::as_str)
    }
}

impl Default for NumerologyTables {
    fn default() -> Self {
        Self {
            letters: LetterTable::default(),
            cycle_years: CYCLE_YEARS.into_iter().collect(),
            realization_ages: REALIZATION_AGES.into_iter().collect(),
            karmic_debts: KARMIC_DEBTS
                .into_iter()
                .map(|(n, label)| (n, label.to_string()))
                .collect(),
            inclusion_meanings: INCLUSION_MEANINGS
                .into_iter()
                .map(|(n, meaning)| (n, meaning.to_string()))
                .collect(),
        }
    }
}
