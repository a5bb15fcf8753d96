//! Letter and vowel/consonant analysis.

use crate::letter::{LetterKind, LetterLookup, LetterTable};
use crate::name::NameCalculation;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Above this vowel/consonant ratio the profile is emotionally dominant.
pub const EMOTIONAL_RATIO: f64 = 1.5;
/// Below this vowel/consonant ratio the profile is rationally dominant.
pub const RATIONAL_RATIO: f64 = 0.5;

/// Occurrences of one letter across all names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCount {
    pub value: u32,
    #[serde(rename = "type")]
    pub kind: LetterKind,
    pub count: u32,
}

/// Qualitative reading of the vowel/consonant ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RatioBalance {
    EmotionallyDominant,
    Balanced,
    RationallyDominant,
}

impl RatioBalance {
    /// Classify a ratio. `None` means there were no consonants.
    pub fn classify(ratio: Option<f64>, vowels: u32) -> Self {
        match ratio {
            Some(r) if r > EMOTIONAL_RATIO => RatioBalance::EmotionallyDominant,
            Some(r) if r < RATIONAL_RATIO => RatioBalance::RationallyDominant,
            Some(_) => RatioBalance::Balanced,
            None if vowels > 0 => RatioBalance::EmotionallyDominant,
            None => RatioBalance::Balanced,
        }
    }
}

/// Aggregate letter statistics over every analyzed name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterAnalysis {
    /// Mapped letters and how often each occurs.
    pub letters: BTreeMap<char, LetterCount>,
    /// Characters that were not in the letter table.
    pub unmapped: BTreeSet<char>,
    pub vowel_count: u32,
    pub consonant_count: u32,
    /// `vowel_count / consonant_count`, absent when there are no consonants.
    pub ratio: Option<f64>,
    pub balance: RatioBalance,
}

impl LetterAnalysis {
    /// Aggregate `names`, classifying letters with `table`.
    pub fn from_names<'a>(
        names: impl IntoIterator<Item = &'a NameCalculation>,
        table: &LetterTable,
    ) -> Self {
        let mut letters: BTreeMap<char, LetterCount> = BTreeMap::new();
        let mut unmapped = BTreeSet::new();
        let mut vowel_count = 0;
        let mut consonant_count = 0;

        for name in names {
            for &letter in &name.letters {
                match table.lookup(letter) {
                    LetterLookup::Mapped(entry) => {
                        letters
                            .entry(letter)
                            .or_insert(LetterCount {
                                value: entry.value,
                                kind: entry.kind,
                                count: 0,
                            })
                            .count += 1;
                        match entry.kind {
                            LetterKind::Vowel => vowel_count += 1,
                            LetterKind::Consonant => consonant_count += 1,
                        }
                    }
                    LetterLookup::Unmapped(c) => {
                        unmapped.insert(c);
                    }
                }
            }
        }

        let ratio = (consonant_count > 0).then(|| vowel_count as f64 / consonant_count as f64);
        Self {
            letters,
            unmapped,
            vowel_count,
            consonant_count,
            ratio,
            balance: RatioBalance::classify(ratio, vowel_count),
        }
    }

    /// Total mapped letters.
    pub fn letter_count(&self) -> u32 {
        self.vowel_count + self.consonant_count
    }
}
