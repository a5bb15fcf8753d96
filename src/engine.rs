//! Calculation engine.
//!
//! Provides the `NumerologyEngine` type, the main entry point. It turns
//! a validated input (names and a birth date) into a complete
//! [`NumerologyResult`]. The computation is pure: no I/O, no shared
//! mutable state, and the same input always yields the same result.

use crate::analysis::LetterAnalysis;
use crate::config::EngineConfig;
use crate::error::NumerologyError;
use crate::inclusion::{CountIntensity, InclusionGrid};
use crate::input::{BirthDate, NumerologyInput, ValidatedInput};
use crate::name::NameCalculation;
use crate::reducer::Reducer;
use crate::result::{
    Challenges, CyclePeriod, Cycles, FundamentalNumber, LifePathBreakdown, NameAnalysis,
    NumerologyResult, PersonalityTraits, RealizationPeriod,
};
use crate::tables::NumerologyTables;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, trace};

/// Year ranges used when the life path has no cycle table entry.
const DEFAULT_CYCLE_YEARS: [&str; 3] = ["0-27", "28-54", "55+"];

/// The numerology calculation engine.
///
/// Holds a configuration, the reducer built from it, and the read-only
/// lookup tables. Engines are cheap to clone and safe to share between
/// threads; every call works on its own data.
///
/// # Examples
///
/// ```rust
/// use numerology_engine::{NumerologyEngine, NumerologyInput};
///
/// let engine = NumerologyEngine::new();
/// let input = NumerologyInput::new("Martin", "Sophie", "15/03/1985");
///
/// let result = engine.calculate_input(&input).unwrap();
/// assert_eq!(result.life_path, 5);
/// assert_eq!(result.expression, 3);
/// assert_eq!(result.challenges.major, 2);
/// ```
#[derive(Debug, Clone)]
pub struct NumerologyEngine {
    config: EngineConfig,
    reducer: Reducer,
    tables: Arc<NumerologyTables>,
}

impl NumerologyEngine {
    /// Create an engine with the standard configuration and the shared
    /// default tables.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::standard())
    }

    /// Create an engine with a custom configuration and the shared
    /// default tables.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numerology_engine::{EngineConfig, NumerologyEngine};
    ///
    /// let engine = NumerologyEngine::with_config(EngineConfig::extended());
    /// assert!(engine.reducer().is_special(13));
    /// ```
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_tables(config, NumerologyTables::shared())
    }

    /// Create an engine with explicit configuration and tables.
    pub fn with_tables(config: EngineConfig, tables: Arc<NumerologyTables>) -> Self {
        let reducer = config.reducer();
        Self {
            config,
            reducer,
            tables,
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The reducer built from the configuration.
    pub fn reducer(&self) -> &Reducer {
        &self.reducer
    }

    /// The lookup tables.
    pub fn tables(&self) -> &NumerologyTables {
        &self.tables
    }

    /// Analyze a single name with this engine's tables and reducer.
    pub fn analyze_name(&self, name: &str) -> NameCalculation {
        NameCalculation::analyze(name, &self.tables.letters, &self.reducer)
    }

    /// Life path with its reduction breakdown.
    ///
    /// Day, month and year are reduced individually, summed, and the sum
    /// reduced again. A special number can survive at either step.
    pub fn life_path_breakdown(&self, date: &BirthDate) -> LifePathBreakdown {
        let day = self.reducer.trace(date.day());
        let month = self.reducer.trace(date.month());
        let year = self.reducer.trace(date.year());
        let total = self.reducer.trace(day.value + month.value + year.value);
        LifePathBreakdown {
            day,
            month,
            year,
            total,
        }
    }

    /// Life path number of a birth date.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numerology_engine::{BirthDate, NumerologyEngine};
    ///
    /// let engine = NumerologyEngine::new();
    /// // 15 -> 6, 3, 1985 -> 23 -> 5; 6 + 3 + 5 = 14 -> 5
    /// assert_eq!(engine.life_path(&BirthDate::new(15, 3, 1985).unwrap()), 5);
    /// ```
    pub fn life_path(&self, date: &BirthDate) -> u32 {
        self.life_path_breakdown(date).total.value
    }

    /// Minor and major challenges.
    ///
    /// Components go through the general reducer, so a special day such as
    /// 22 stays 22. The personal-number rule does not apply.
    pub fn challenges(&self, date: &BirthDate) -> Challenges {
        let day = self.reducer.reduce(date.day());
        let month = self.reducer.reduce(date.month());
        let year = self.reducer.reduce(date.year());

        let first_minor = month.abs_diff(day);
        let second_minor = year.abs_diff(day);
        Challenges {
            first_minor,
            second_minor,
            major: first_minor.abs_diff(second_minor),
        }
    }

    /// Formative, productive and harvest cycles.
    ///
    /// Cycle numbers come from the reduced month, day and year; only the
    /// age ranges depend on the life path.
    pub fn cycles(&self, date: &BirthDate, life_path: u32) -> Cycles {
        let [formative_label, productive_label, harvest_label] = &self.config.labels.cycles;
        let period = |label: &String, number: u32, years: String| CyclePeriod {
            label: label.clone(),
            number,
            years,
        };

        match self.tables.cycle_boundaries(life_path) {
            Some(bounds) => Cycles {
                formative: period(
                    formative_label,
                    self.reducer.reduce(date.month()),
                    format!("0-{}", bounds.formative),
                ),
                productive: period(
                    productive_label,
                    self.reducer.reduce(date.day()),
                    format!("{}-{}", bounds.formative + 1, bounds.productive),
                ),
                harvest: period(
                    harvest_label,
                    self.reducer.reduce(date.year()),
                    format!("{}+", bounds.productive + 1),
                ),
            },
            None => {
                debug!(life_path, "no cycle table entry, using default cycles");
                let [formative, productive, harvest] = DEFAULT_CYCLE_YEARS;
                Cycles {
                    formative: period(formative_label, 0, formative.to_string()),
                    productive: period(productive_label, 0, productive.to_string()),
                    harvest: period(harvest_label, 0, harvest.to_string()),
                }
            }
        }
    }

    /// The four realization periods of a life path.
    pub fn realizations(&self, life_path: u32) -> [RealizationPeriod; 4] {
        let ages = self.tables.realization_ages(life_path).unwrap_or_else(|| {
            debug!(life_path, "no realization table entry, using zeros");
            [0; 4]
        });
        let labels = &self.config.labels.realizations;
        std::array::from_fn(|i| RealizationPeriod {
            label: labels[i].clone(),
            number: self.reducer.reduce_realization(ages[i]),
        })
    }

    /// Karmic debts: debt table numbers absent from every raw letter value,
    /// minus the excluded numbers and anything the filter rejects.
    pub fn karmic_debts<'a>(
        &self,
        names: impl IntoIterator<Item = &'a NameCalculation>,
    ) -> Vec<u32> {
        let present: BTreeSet<u32> = names
            .into_iter()
            .flat_map(|name| name.values.iter().copied())
            .collect();
        self.tables
            .karmic_debt_numbers()
            .filter(|n| !present.contains(n))
            .filter(|&n| self.config.reports_karmic_debt(n))
            .collect()
    }

    fn fundamental_numbers(&self, grid: &InclusionGrid) -> Vec<FundamentalNumber> {
        grid.iter()
            .map(|(digit, count)| FundamentalNumber {
                value: digit,
                count,
                intensity: CountIntensity::from_count(count),
                description: self
                    .tables
                    .inclusion_meaning(digit)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect()
    }

    /// Compute the full profile of a validated input.
    pub fn calculate(&self, input: &ValidatedInput) -> NumerologyResult {
        let names = NameAnalysis {
            last_name: self.analyze_name(&input.last_name),
            first_name: self.analyze_name(&input.first_name),
            middle_names: input
                .middle_names
                .iter()
                .map(|name| self.analyze_name(name))
                .collect(),
            marital_name: input.marital_name.as_deref().map(|name| self.analyze_name(name)),
        };
        trace!(?names, "analyzed names");

        let last = &names.last_name;
        let first = &names.first_name;
        let date = &input.birth_date;

        let life_path_breakdown = self.life_path_breakdown(date);
        let life_path = life_path_breakdown.total.value;

        let expression = self.reducer.reduce_personal(last.total + first.total);
        let intimate = self.reducer.reduce_personal(last.vowel_sum + first.vowel_sum);
        let realization = self
            .reducer
            .reduce_personal(last.consonant_sum + first.consonant_sum);
        let health = self.reducer.reduce_personal(first.total);
        let sentiment = self
            .reducer
            .reduce_personal(names.middle_names.iter().map(|m| m.total).sum());
        let heredity = self.reducer.reduce_personal(last.total);

        let karmic_debts = self.karmic_debts(names.all());
        let inclusion_grid = InclusionGrid::from_names(names.all());
        let pillars = inclusion_grid.pillars();
        let letter_analysis = LetterAnalysis::from_names(names.all(), &self.tables.letters);

        debug!(
            life_path,
            expression,
            intimate,
            realization,
            health,
            sentiment,
            heredity,
            ?karmic_debts,
            "calculated core numbers"
        );

        let personality_traits = PersonalityTraits {
            intimate: first.initial().map(String::from).unwrap_or_default(),
            social: last.initial().map(String::from).unwrap_or_default(),
        };

        NumerologyResult {
            life_path,
            expression,
            intimate,
            realization,
            health,
            sentiment,
            heredity,
            karmic_debts,
            pillars,
            cycles: self.cycles(date, life_path),
            realizations: self.realizations(life_path),
            challenges: self.challenges(date),
            letter_analysis,
            personality_traits,
            vibration: self.reducer.vibration_scale(),
            fundamental_numbers: self.fundamental_numbers(&inclusion_grid),
            inclusion_grid,
            name_analysis: names,
            life_path_breakdown,
        }
    }

    /// Validate a raw input, then compute its profile.
    pub fn calculate_input(
        &self,
        input: &NumerologyInput,
    ) -> Result<NumerologyResult, NumerologyError> {
        let validated = input.validate()?;
        Ok(self.calculate(&validated))
    }
}

impl Default for NumerologyEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: u32) -> BirthDate {
        BirthDate::new(d, m, y).unwrap()
    }

    #[test]
    fn test_life_path_double_reduction() {
        let engine = NumerologyEngine::new();
        // 29 -> 2 (special check only on input), 11 stays, 1999 -> 28 -> 10 -> 1
        // 2 + 11 + 1 = 14 -> 5
        assert_eq!(engine.life_path(&date(29, 11, 1999)), 5);
        // 19 -> 1, 9, 1999 -> 1; 1 + 9 + 1 = 11 is kept. A single pass over
        // 19 + 9 + 1999 = 2027 would give 11 -> 2.
        assert_eq!(engine.life_path(&date(19, 9, 1999)), 11);
    }

    #[test]
    fn test_life_path_master_number_component() {
        let engine = NumerologyEngine::new();
        let breakdown = engine.life_path_breakdown(&date(22, 1, 2000));
        assert!(breakdown.day.preserved);
        assert_eq!(breakdown.day.value, 22);
        // 22 + 1 + 2 = 25 -> 7
        assert_eq!(breakdown.total.value, 7);
        assert_eq!(breakdown.total.steps, vec![25, 7]);
    }

    #[test]
    fn test_cycles_use_date_components() {
        let engine = NumerologyEngine::new();
        let cycles = engine.cycles(&date(15, 3, 1985), 5);
        assert_eq!(cycles.formative.number, 3);
        assert_eq!(cycles.formative.years, "0-32");
        assert_eq!(cycles.productive.number, 6);
        assert_eq!(cycles.productive.years, "33-59");
        assert_eq!(cycles.harvest.number, 5);
        assert_eq!(cycles.harvest.years, "60+");
        assert_eq!(cycles.harvest.label, "harvest");
    }

    #[test]
    fn test_cycles_without_table_entry() {
        let engine = NumerologyEngine::new();
        let cycles = engine.cycles(&date(15, 3, 1985), 11);
        assert_eq!(cycles.formative.number, 0);
        assert_eq!(cycles.formative.years, "0-27");
        assert_eq!(cycles.productive.years, "28-54");
        assert_eq!(cycles.harvest.years, "55+");
    }

    #[test]
    fn test_realizations() {
        let engine = NumerologyEngine::new();
        let numbers: Vec<u32> = engine.realizations(3).iter().map(|r| r.number).collect();
        // 33 -> 6 (not terminal here), 42 -> 6, 51 -> 6, 60 -> 6
        assert_eq!(numbers, vec![6, 6, 6, 6]);
        assert!(engine.realizations(22).iter().all(|r| r.number == 0));
        assert_eq!(engine.realizations(1)[3].label, "fourth");
    }

    #[test]
    fn test_challenges() {
        let engine = NumerologyEngine::new();
        let c = engine.challenges(&date(15, 3, 1985));
        assert_eq!((c.first_minor, c.second_minor, c.major), (3, 1, 2));
    }

    #[test]
    fn test_challenges_keep_special_components() {
        let engine = NumerologyEngine::new();
        // day 22 is special and stays 22 under the general reducer
        let c = engine.challenges(&date(22, 1, 2000));
        assert_eq!(c.first_minor, 21);
        assert_eq!(c.second_minor, 20);
        assert_eq!(c.major, 1);
    }

    #[test]
    fn test_karmic_debts() {
        let engine = NumerologyEngine::new();
        // A = 1 only: every other debt number is absent
        let name = engine.analyze_name("Aaa");
        assert_eq!(engine.karmic_debts([&name]), vec![2, 4, 6, 8, 9]);
    }

    #[test]
    fn test_extended_config_reports_no_karmic_debts() {
        let engine = NumerologyEngine::with_config(EngineConfig::extended());
        let name = engine.analyze_name("Aaa");
        assert!(engine.karmic_debts([&name]).is_empty());
    }

    #[test]
    fn test_personal_numbers_preserve_masters() {
        let engine = NumerologyEngine::new();
        // K = 2, I = 9 -> 11, kept as master
        let input = ValidatedInput::new("Ki", "Ki", date(1, 1, 2000));
        let result = engine.calculate(&input);
        assert_eq!(result.heredity, 11);
        assert_eq!(result.health, 11);
        // 11 + 11 = 22
        assert_eq!(result.expression, 22);
    }

    #[test]
    fn test_sentiment_without_middle_names() {
        let engine = NumerologyEngine::new();
        let result = engine.calculate(&ValidatedInput::new("Martin", "Sophie", date(15, 3, 1985)));
        assert_eq!(result.sentiment, 0);
        assert!(result.name_analysis.middle_names.is_empty());
    }

    #[test]
    fn test_fundamental_numbers() {
        let engine = NumerologyEngine::new();
        let result = engine.calculate(&ValidatedInput::new("Martin", "Sophie", date(15, 3, 1985)));
        assert_eq!(result.fundamental_numbers.len(), 9);
        let nine = &result.fundamental_numbers[8];
        assert_eq!(nine.value, 9);
        assert_eq!(nine.count, 3);
        assert_eq!(nine.intensity, CountIntensity::Intensified);
        assert_eq!(nine.description, "Altruisme et humanisme");
    }
}
