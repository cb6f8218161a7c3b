//! Efficiency Optimization
//!
//! This example estimates conversion efficiency for three supply/load
//! scenarios and shows how each sub-factor contributes.
//!
//! Run with: cargo run --example efficiency_optimization

use powerwise::EfficiencyEstimator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Efficiency Optimization Example ===\n");

    let mut estimator = EfficiencyEstimator::new();

    let scenarios = [
        (12.0, 0.5), // Battery input, low current
        (14.4, 1.0), // Solar input, medium current
        (15.0, 2.0), // AC input, high current
    ];

    for &(voltage, current) in &scenarios {
        let estimate = estimator.breakdown(voltage, current);
        let efficiency = estimator.optimize(voltage, current);
        println!(
            "Input Voltage: {voltage}V, Load Current: {current}A, Efficiency: {:.2}%",
            efficiency * 100.0
        );
        println!(
            "  factors: voltage {:.2}, load {:.2}, thermal {:.2} (bonus {:.3})",
            estimate.voltage_match, estimate.load_match, estimate.thermal, estimate.additional
        );
    }

    let history = estimator.history();
    println!("\nEfficiency history: {:?}", history.series("efficiency"));
    println!("Voltage history:    {:?}", history.series("input_voltage"));
    println!("Current history:    {:?}", history.series("load_current"));

    println!("\n=== Example Complete ===");
}
