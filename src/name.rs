//! Per-name analysis.
//!
//! Turns one name string into a [`NameCalculation`]: the letter sequence,
//! the value of each letter, the same values routed into parallel vowel
//! and consonant arrays, and the three reduced totals.

use crate::letter::{LetterKind, LetterLookup, LetterTable};
use crate::reducer::Reducer;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Breakdown of a single name.
///
/// `letters`, `values`, `consonants` and `vowels` always have the same
/// length. A position holds 0 in the array of the other letter kind, and
/// 0 in both arrays for characters missing from the letter table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameCalculation {
    /// Upper-cased characters with spaces removed.
    pub letters: Vec<char>,
    /// Value of each letter (0 when unmapped).
    pub values: Vec<u32>,
    /// Consonant values, 0 at vowel and unmapped positions.
    pub consonants: Vec<u32>,
    /// Vowel values, 0 at consonant and unmapped positions.
    pub vowels: Vec<u32>,
    /// Reduced sum of `values`.
    pub total: u32,
    /// Reduced sum of `consonants`.
    pub consonant_sum: u32,
    /// Reduced sum of `vowels`.
    pub vowel_sum: u32,
}

impl NameCalculation {
    /// Analyze `name` against `table`, reducing totals with `reducer`.
    ///
    /// Only the space character is stripped. Other whitespace, digits and
    /// punctuation keep their position and score 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numerology_engine::{LetterTable, NameCalculation, Reducer};
    ///
    /// let table = LetterTable::default();
    /// let calc = NameCalculation::analyze("Anne Marie", &table, &Reducer::standard());
    /// assert_eq!(calc.letters.len(), 9);
    /// assert_eq!(calc.letters[0], 'A');
    /// ```
    pub fn analyze(name: &str, table: &LetterTable, reducer: &Reducer) -> Self {
        let letters: Vec<char> = name.to_uppercase().chars().filter(|&c| c != ' ').collect();

        let mut values = Vec::with_capacity(letters.len());
        let mut consonants = Vec::with_capacity(letters.len());
        let mut vowels = Vec::with_capacity(letters.len());

        for (position, &letter) in letters.iter().enumerate() {
            match table.lookup(letter) {
                LetterLookup::Mapped(entry) => {
                    values.push(entry.value);
                    match entry.kind {
                        LetterKind::Consonant => {
                            consonants.push(entry.value);
                            vowels.push(0);
                        }
                        LetterKind::Vowel => {
                            consonants.push(0);
                            vowels.push(entry.value);
                        }
                    }
                }
                LetterLookup::Unmapped(c) => {
                    debug!(character = %c, position, "character not in letter table, scoring 0");
                    values.push(0);
                    consonants.push(0);
                    vowels.push(0);
                }
            }
        }

        let total = reducer.reduce(values.iter().sum());
        let consonant_sum = reducer.reduce(consonants.iter().sum());
        let vowel_sum = reducer.reduce(vowels.iter().sum());

        Self {
            letters,
            values,
            consonants,
            vowels,
            total,
            consonant_sum,
            vowel_sum,
        }
    }

    /// First letter of the name, if any.
    pub fn initial(&self) -> Option<char> {
        self.letters.first().copied()
    }

    /// Whether the name produced no letters at all.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
