//! Demo of factorial and remainder evaluation
//!
//! Usage: `proven-factorial [config.json]`

use proven_arith::{ArithConfig, Evaluator, Result, factorial, func};
use proven_value::Value;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => ArithConfig::from_file(&path).inspect_err(|e| {
            tracing::warn!("Failed to load config {}: {}", path, e);
        })?,
        None => ArithConfig::default(),
    };

    println!("=== Proven Factorial Demo ===\n");

    // Demo 1: native int semantics
    demo_native();

    // Demo 2: configured evaluation
    demo_evaluator(&Evaluator::new(config))?;

    println!("\n=== Done ===");
    Ok(())
}

fn demo_native() {
    println!("--- Demo 1: Native int ---");
    println!("  func() = {}", func());
    println!("  factorial(-1) = {}", factorial(-1));
    println!("  factorial(13) = {} (wrapped)", factorial(13));
}

fn demo_evaluator(evaluator: &Evaluator) -> Result<()> {
    let config = evaluator.config();
    println!(
        "\n--- Demo 2: {} factorials, {} overflow ---",
        config.width, config.overflow
    );

    println!("  3! % 4 = {}", evaluator.caller()?);

    for n in 0..=13 {
        let Some(operand) = Value::from_i128(config.width, n) else {
            break;
        };
        match evaluator.factorial(&operand) {
            Ok(result) => println!("  {:>2}! = {}", n, result),
            Err(e) => println!("  {:>2}! = error: {}", n, e),
        }
    }

    Ok(())
}
