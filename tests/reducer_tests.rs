//! Tests for digit reduction and name analysis.
//!
//! These tests verify:
//! - Reducer range and idempotence over a wide input range
//! - Special numbers pass through untouched
//! - The three reduction behaviors stay distinct
//! - Name analysis edge cases

use numerology_engine::*;

// ============================================================================
// Reducer properties
// ============================================================================

#[test]
fn test_reduce_range_and_idempotence() {
    for reducer in [Reducer::standard(), EngineConfig::extended().reducer()] {
        for n in 0..100_000 {
            let reduced = reducer.reduce(n);
            if reducer.is_special(n) {
                assert_eq!(reduced, n);
                continue;
            }
            assert!(reduced <= 9, "{n} -> {reduced}");
            assert_eq!(reducer.reduce(reduced), reduced, "{n}");
        }
    }
}

#[test]
fn test_special_numbers_unchanged() {
    let reducer = EngineConfig::extended().reducer();
    for &special in reducer.special_numbers() {
        assert_eq!(reducer.reduce(special), special);
        assert!(reducer.trace(special).preserved);
    }
}

#[test]
fn test_trace_matches_reduce() {
    let reducer = Reducer::standard();
    for n in 0..10_000 {
        let trace = reducer.trace(n);
        assert_eq!(trace.value, reducer.reduce(n), "{n}");
        assert_eq!(trace.steps.first(), Some(&n));
        assert_eq!(trace.steps.last(), Some(&trace.value));
    }
}

#[test]
fn test_reduction_behaviors_are_distinct() {
    // Only 11 is special for the general reducer here
    let reducer = Reducer::new([11], [11, 22, 33], [11, 22]);

    assert_eq!(reducer.reduce(33), 6);
    assert_eq!(reducer.reduce_personal(33), 33);
    assert_eq!(reducer.reduce_realization(33), 6);

    assert_eq!(reducer.reduce(22), 4);
    assert_eq!(reducer.reduce_personal(22), 22);
    assert_eq!(reducer.reduce_realization(22), 22);
}

#[test]
fn test_realization_output_set() {
    for reducer in [Reducer::standard(), EngineConfig::extended().reducer()] {
        for n in 0..10_000 {
            let r = reducer.reduce_realization(n);
            assert!(r <= 9 || r == 11 || r == 22, "{n} -> {r}");
        }
    }
}

// ============================================================================
// Name analysis
// ============================================================================

#[test]
fn test_analyze_empty() {
    let engine = NumerologyEngine::new();
    let calc = engine.analyze_name("");
    assert!(calc.letters.is_empty());
    assert_eq!(calc.total, 0);
    assert_eq!(calc.consonant_sum, 0);
    assert_eq!(calc.vowel_sum, 0);
}

#[test]
fn test_analyze_only_spaces() {
    let engine = NumerologyEngine::new();
    assert!(engine.analyze_name("   ").letters.is_empty());
}

#[test]
fn test_analyze_with_custom_table() {
    let mut tables = NumerologyTables::default();
    tables.letters = LetterTable::new([('A', LetterEntry::consonant(7))]);
    let engine =
        NumerologyEngine::with_tables(EngineConfig::standard(), std::sync::Arc::new(tables));

    let calc = engine.analyze_name("Ab");
    assert_eq!(calc.values, vec![7, 0]);
    assert_eq!(calc.consonants, vec![7, 0]);
    assert_eq!(calc.vowels, vec![0, 0]);
    assert_eq!(calc.total, 7);
}

#[test]
fn test_analyze_master_total() {
    let engine = NumerologyEngine::new();
    // R9 A1 Y7 M4 O6 N5 D4 = 36 -> 9; consonants R9 M4 N5 D4 = 22 (kept)
    let calc = engine.analyze_name("Raymond");
    assert_eq!(calc.total, 9);
    assert_eq!(calc.consonant_sum, 22);
    assert_eq!(calc.vowel_sum, 5); // A1 Y7 O6 = 14 -> 5
}
