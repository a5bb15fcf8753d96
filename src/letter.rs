//! Letter value table.
//!
//! Maps each supported upper-case character (Latin letters plus the
//! accented variants found in French names) to a value in 1..=9 and a
//! vowel/consonant classification. Anything not in the table is a
//! lookup miss: it scores 0 and belongs to neither sum.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vowel or consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LetterKind {
    Vowel,
    Consonant,
}

/// The value and classification of one table character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterEntry {
    /// Numeric value, always in 1..=9.
    pub value: u32,
    /// Vowel or consonant.
    #[serde(rename = "type")]
    pub kind: LetterKind,
}

impl LetterEntry {
    /// Create a vowel entry.
    pub const fn vowel(value: u32) -> Self {
        Self {
            value,
            kind: LetterKind::Vowel,
        }
    }

    /// Create a consonant entry.
    pub const fn consonant(value: u32) -> Self {
        Self {
            value,
            kind: LetterKind::Consonant,
        }
    }

    /// Whether this entry is a vowel.
    pub fn is_vowel(&self) -> bool {
        self.kind == LetterKind::Vowel
    }
}

/// Result of looking a character up in the table.
///
/// Misses are explicit so callers decide how to score them instead of
/// relying on a silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterLookup {
    /// The character is in the table.
    Mapped(LetterEntry),
    /// The character is not in the table (digit, punctuation, other script).
    Unmapped(char),
}

impl LetterLookup {
    /// The value this lookup contributes to a name total (0 for a miss).
    pub fn value(&self) -> u32 {
        match self {
            LetterLookup::Mapped(entry) => entry.value,
            LetterLookup::Unmapped(_) => 0,
        }
    }

    /// The entry, if the character was mapped.
    pub fn entry(&self) -> Option<LetterEntry> {
        match self {
            LetterLookup::Mapped(entry) => Some(*entry),
            LetterLookup::Unmapped(_) => None,
        }
    }
}

const DEFAULT_LETTERS: [(char, LetterEntry); 43] = [
    ('A', LetterEntry::vowel(1)),
    ('À', LetterEntry::vowel(9)),
    ('Â', LetterEntry::vowel(9)),
    ('Ä', LetterEntry::vowel(6)),
    ('B', LetterEntry::consonant(2)),
    ('C', LetterEntry::consonant(3)),
    ('Ç', LetterEntry::consonant(1)),
    ('D', LetterEntry::consonant(4)),
    ('E', LetterEntry::vowel(5)),
    ('É', LetterEntry::vowel(1)),
    ('È', LetterEntry::vowel(1)),
    ('Ê', LetterEntry::vowel(1)),
    ('Ë', LetterEntry::vowel(5)),
    ('F', LetterEntry::consonant(6)),
    ('G', LetterEntry::consonant(7)),
    ('H', LetterEntry::consonant(8)),
    ('I', LetterEntry::vowel(9)),
    ('Î', LetterEntry::vowel(5)),
    ('Ï', LetterEntry::vowel(9)),
    ('J', LetterEntry::consonant(1)),
    ('K', LetterEntry::consonant(2)),
    ('L', LetterEntry::consonant(3)),
    ('M', LetterEntry::consonant(4)),
    ('N', LetterEntry::consonant(5)),
    ('Ñ', LetterEntry::consonant(5)),
    ('O', LetterEntry::vowel(6)),
    ('Ô', LetterEntry::vowel(6)),
    ('Ö', LetterEntry::vowel(2)),
    ('P', LetterEntry::consonant(7)),
    ('Q', LetterEntry::consonant(8)),
    ('R', LetterEntry::consonant(9)),
    ('S', LetterEntry::consonant(1)),
    ('T', LetterEntry::consonant(2)),
    ('U', LetterEntry::vowel(3)),
    ('Ú', LetterEntry::vowel(3)),
    ('Ù', LetterEntry::vowel(3)),
    ('Û', LetterEntry::vowel(3)),
    ('Ü', LetterEntry::vowel(8)),
    ('V', LetterEntry::consonant(4)),
    ('W', LetterEntry::consonant(5)),
    ('X', LetterEntry::consonant(6)),
    ('Y', LetterEntry::vowel(7)),
    ('Z', LetterEntry::consonant(8)),
];

/// Immutable character → entry table.
///
/// Keys are upper-case characters. Lookups are exact: callers upper-case
/// their input first.
///
/// # Examples
///
/// ```rust
/// use numerology_engine::letter::{LetterKind, LetterLookup, LetterTable};
///
/// let table = LetterTable::default();
/// let a = table.lookup('A').entry().unwrap();
/// assert_eq!(a.value, 1);
/// assert_eq!(a.kind, LetterKind::Vowel);
///
/// assert_eq!(table.lookup('7'), LetterLookup::Unmapped('7'));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterTable {
    entries: BTreeMap<char, LetterEntry>,
}

impl LetterTable {
    /// Build a table from `(character, entry)` pairs.
    pub fn new(entries: impl IntoIterator<Item = (char, LetterEntry)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up one character.
    pub fn lookup(&self, c: char) -> LetterLookup {
        match self.entries.get(&c) {
            Some(entry) => LetterLookup::Mapped(*entry),
            None => LetterLookup::Unmapped(c),
        }
    }

    /// Number of characters in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the table in character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterEntry)> + '_ {
        self.entries.iter().map(|(c, e)| (*c, *e))
    }
}

impl Default for LetterTable {
    fn default() -> Self {
        Self::new(DEFAULT_LETTERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_values_in_range() {
        let table = LetterTable::default();
        assert_eq!(table.len(), 43);
        for (c, entry) in table.iter() {
            assert!((1..=9).contains(&entry.value), "{c} has value {}", entry.value);
        }
    }

    #[test]
    fn test_plain_alphabet_is_complete() {
        let table = LetterTable::default();
        for c in 'A'..='Z' {
            assert!(table.lookup(c).entry().is_some(), "{c} missing");
        }
    }

    #[test]
    fn test_vowel_classification() {
        let table = LetterTable::default();
        for c in ['A', 'E', 'I', 'O', 'U', 'Y', 'É', 'Ü'] {
            assert!(table.lookup(c).entry().unwrap().is_vowel(), "{c}");
        }
        for c in ['B', 'R', 'Ç', 'Ñ', 'Z'] {
            assert!(!table.lookup(c).entry().unwrap().is_vowel(), "{c}");
        }
    }

    #[test]
    fn test_accented_values() {
        let table = LetterTable::default();
        assert_eq!(table.lookup('À').value(), 9);
        assert_eq!(table.lookup('É').value(), 1);
        assert_eq!(table.lookup('Ç').value(), 1);
        assert_eq!(table.lookup('Ü').value(), 8);
    }

    #[test]
    fn test_misses_are_explicit() {
        let table = LetterTable::default();
        for c in ['1', '-', '\'', 'a', 'Ж', '\t'] {
            assert_eq!(table.lookup(c), LetterLookup::Unmapped(c));
            assert_eq!(table.lookup(c).value(), 0);
        }
    }
}
