//! # numerology-engine - Deterministic Numerology Calculation Engine
//!
//! Derives a structured numerological profile from a person's names and
//! birth date:
//! - **Deterministic** digit-reduction arithmetic (same input → same output)
//! - **Table-driven** letter values, cycles and realization periods
//! - **Configurable** special numbers, karmic debt filter and labels
//! - **Pure** computation: no I/O, no shared mutable state
//!
//! ## Core Concepts
//!
//! ### Calculation Pipeline
//!
//! ```text
//! [NumerologyInput] → validate → [ValidatedInput]
//!        names → [NameCalculation] ┐
//!   birth date → life path         ├→ [NumerologyResult]
//!                                  ┘
//! ```
//!
//! 1. **Letter table** maps each character to a value 1-9 and a kind
//! 2. **Reducer** collapses numbers to one digit, sparing special numbers
//! 3. **Name analysis** scores each name string
//! 4. **Engine** combines name scores and the birth date into the profile
//!
//! ## Example
//!
//! ```rust
//! use numerology_engine::*;
//!
//! let engine = NumerologyEngine::new();
//! let input = NumerologyInput::new("Martin", "Sophie", "15/03/1985")
//!     .with_middle_names(["Claire"]);
//!
//! let result = engine.calculate_input(&input).unwrap();
//! assert_eq!(result.life_path, 5);
//! assert_eq!(result.cycles.formative.years, "0-32");
//! assert!(!result.karmic_debts.contains(&3));
//! ```
//!
//! ## Modules
//!
//! - [`letter`] - Letter value table
//! - [`reducer`] - Digit reduction
//! - [`reduction`] - Reduction traces
//! - [`name`] - Per-name analysis
//! - [`inclusion`] - Inclusion grid and pillars
//! - [`analysis`] - Letter and vowel/consonant analysis
//! - [`tables`] - Static lookup tables
//! - [`config`] - Engine configuration
//! - [`input`] - Input and validation
//! - [`result`] - Result record
//! - [`engine`] - Calculation engine
//! - [`error`] - Error types

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod inclusion;
pub mod input;
pub mod letter;
pub mod name;
pub mod reducer;
pub mod reduction;
pub mod result;
pub mod tables;

// Re-export main types for convenience
pub use config::{EngineConfig, KarmicDebtFilter, PeriodLabels};
pub use engine::NumerologyEngine;
pub use error::NumerologyError;
pub use input::{BirthDate, NumerologyInput, ValidatedInput};
pub use name::NameCalculation;
pub use reducer::Reducer;
pub use reduction::ReductionTrace;
pub use result::NumerologyResult;
pub use tables::{NumerologyTables, Pillar};

// Re-export letter and grid types
pub use analysis::{LetterAnalysis, LetterCount, RatioBalance};
pub use inclusion::{CountIntensity, InclusionGrid, PillarIntensity, PillarReading};
pub use letter::{LetterEntry, LetterKind, LetterLookup, LetterTable};
pub use result::{
    Challenges, CyclePeriod, Cycles, FundamentalNumber, LifePathBreakdown, NameAnalysis,
    PersonalityTraits, RealizationPeriod,
};
