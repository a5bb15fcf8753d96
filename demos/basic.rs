//! Basic example: a full profile from names and a birth date
//!
//! This example demonstrates:
//! - Building and validating an input
//! - Computing the profile
//! - Reading the core numbers and the life path breakdown

use numerology_engine::*;

fn main() -> Result<(), NumerologyError> {
    // Create an engine with the standard rules
    let engine = NumerologyEngine::new();

    let input = NumerologyInput::new("Martin", "Sophie", "15/03/1985")
        .with_middle_names(["Anne", "Claire"])
        .with_marital_name("Dubois");

    println!("Calculating profile for {} {}...", input.first_name, input.last_name);
    let result = engine.calculate_input(&input)?;

    println!("\n=== Core Numbers ===");
    println!("Life path:   {}", result.life_path);
    println!("Expression:  {}", result.expression);
    println!("Intimate:    {}", result.intimate);
    println!("Realization: {}", result.realization);
    println!("Health:      {}", result.health);
    println!("Sentiment:   {}", result.sentiment);
    println!("Heredity:    {}", result.heredity);

    println!("\nLife path breakdown:");
    let breakdown = &result.life_path_breakdown;
    for (label, trace) in [
        ("day", &breakdown.day),
        ("month", &breakdown.month),
        ("year", &breakdown.year),
        ("total", &breakdown.total),
    ] {
        println!("  {:<5} {:?} -> {}", label, trace.steps, trace.value);
    }

    println!("\nKarmic debts:");
    for debt in &result.karmic_debts {
        let label = engine.tables().karmic_debt_label(*debt).unwrap_or_default();
        println!("  {}: {}", debt, label);
    }

    println!("\nPillars:");
    for reading in &result.pillars {
        println!(
            "  {:<9} {} ({})",
            reading.pillar.as_str(),
            reading.count,
            reading.intensity.label()
        );
    }

    println!("\nCycles:");
    for period in [
        &result.cycles.formative,
        &result.cycles.productive,
        &result.cycles.harvest,
    ] {
        println!("  {:<10} {:>6}  {}", period.label, period.years, period.number);
    }

    println!(
        "\nChallenges: {} / {} (major {})",
        result.challenges.first_minor, result.challenges.second_minor, result.challenges.major
    );

    Ok(())
}
