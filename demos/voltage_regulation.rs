//! Voltage Regulation
//!
//! This example feeds a handful of typical supply voltages through a
//! corrector targeting 5 V and prints the regulated outputs together with
//! the recorded correction and error series.
//!
//! Key concepts:
//! - Proportional correction with a fixed gain
//! - Tolerance-band clamping
//! - Reading history series for reporting
//! - Exporting a snapshot for an external plotting tool
//!
//! Run with: cargo run --example voltage_regulation
//! Set RUST_LOG=powerwise=debug to see every regulation step.

use powerwise::VoltageCorrector;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Voltage Regulation Example ===\n");

    let mut regulator = VoltageCorrector::new(5.0, 0.5)?;

    let scenarios = [
        ("Battery input", 12.0),
        ("Solar panel input", 14.4),
        ("AC transformer input", 15.0),
        ("Fluctuating input", 16.5),
        ("Low voltage input", 11.8),
    ];
    let inputs: Vec<f64> = scenarios.iter().map(|(_, voltage)| *voltage).collect();

    let regulated = regulator.simulate(&inputs);

    let band = regulator.band();
    println!(
        "Target: {:.2} V, band [{:.2}, {:.2}] V\n",
        regulator.target_voltage(),
        band.lower,
        band.upper
    );

    for ((label, input), output) in scenarios.iter().zip(&regulated) {
        println!("  {label:<22} {input:>6.2} V -> {output:.3} V");
    }

    let history = regulator.history();
    println!("\nInput voltages: {:?}", history.series("input_voltage"));
    println!("Corrections:    {:?}", history.series("correction"));
    println!("Errors:         {:?}", history.series("error"));

    let snapshot = regulator.snapshot();
    println!(
        "\nSnapshot {} holds {} samples ({} bytes as JSON)",
        snapshot.id,
        snapshot.history.len(),
        snapshot.to_json()?.len()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
