//! Configuration example: comparing the standard and extended rule sets
//!
//! This example demonstrates:
//! - Loading a configuration from JSON
//! - Running the same input through two engines
//! - Serializing a result

use numerology_engine::*;

fn main() -> Result<(), NumerologyError> {
    let standard = NumerologyEngine::new();
    let extended = NumerologyEngine::with_config(EngineConfig::extended());

    // A config can also come from JSON; unspecified fields keep standard values
    let custom = NumerologyEngine::with_config(EngineConfig::from_json_str(
        r#"{ "specialNumbers": [11, 22], "excludedKarmicDebts": [] }"#,
    )?);

    let input = NumerologyInput::new("Raymond", "Élodie", "29/11/1979");

    for (name, engine) in [
        ("standard", &standard),
        ("extended", &extended),
        ("custom", &custom),
    ] {
        let result = engine.calculate_input(&input)?;
        println!("=== {} ===", name);
        println!("  special numbers: {:?}", engine.reducer().special_numbers());
        println!("  life path:       {}", result.life_path);
        println!("  expression:      {}", result.expression);
        println!("  realization:     {}", result.realization);
        println!("  karmic debts:    {:?}", result.karmic_debts);
        println!("  vibration:       {:?}", result.vibration);
    }

    let json = standard.calculate_input(&input)?.to_json()?;
    println!(
        "\n{}",
        serde_json::to_string_pretty(&json).map_err(|e| NumerologyError::Internal(e.to_string()))?
    );

    Ok(())
}
