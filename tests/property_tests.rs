//! Property-based tests for the voltage corrector and efficiency estimator.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use powerwise::core::{load_match_factor, voltage_match_factor};
use powerwise::{EfficiencyEstimator, RegulationRecord, Snapshot, VoltageCorrector};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_regulator()(
        target in -48.0..48.0f64,
        tolerance in 0.0..5.0f64,
    ) -> VoltageCorrector {
        VoltageCorrector::new(target, tolerance).unwrap()
    }
}

fn voltage() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

proptest! {
    #[test]
    fn regulated_output_stays_in_band(
        regulator in arbitrary_regulator(),
        input in voltage(),
    ) {
        let mut regulator = regulator;
        let band = regulator.band();
        let output = regulator.regulate(input);
        prop_assert!(output >= band.lower && output <= band.upper);
    }

    #[test]
    fn default_regulated_output_stays_in_band(input in voltage()) {
        let mut regulator = VoltageCorrector::default();
        let output = regulator.regulate(input);
        prop_assert!((4.5..=5.5).contains(&output));
    }

    #[test]
    fn regulating_target_returns_target(regulator in arbitrary_regulator()) {
        let mut regulator = regulator;
        let target = regulator.target_voltage();
        prop_assert_eq!(regulator.regulate(target), target);
    }

    #[test]
    fn simulate_matches_individual_calls(
        inputs in prop::collection::vec(voltage(), 0..20),
        tolerance in 0.0..2.0f64,
    ) {
        let mut batch = VoltageCorrector::new(5.0, tolerance).unwrap();
        let mut single = VoltageCorrector::new(5.0, tolerance).unwrap();

        let batch_outputs = batch.simulate(&inputs);
        let single_outputs: Vec<f64> = inputs.iter().map(|&v| single.regulate(v)).collect();

        prop_assert_eq!(batch_outputs, single_outputs);
        prop_assert_eq!(batch.history(), single.history());
        prop_assert_eq!(batch.history().len(), inputs.len());
    }

    #[test]
    fn history_preserves_call_order(inputs in prop::collection::vec(voltage(), 1..20)) {
        let mut regulator = VoltageCorrector::default();
        for &input in &inputs {
            regulator.regulate(input);
        }

        let recorded = regulator.history().series("input_voltage").unwrap();
        prop_assert_eq!(recorded, inputs);
    }

    #[test]
    fn efficiency_is_bounded(voltage in 0.0..1000.0f64, current in 0.0..100.0f64) {
        let mut estimator = EfficiencyEstimator::new();
        let efficiency = estimator.optimize(voltage, current);
        prop_assert!(efficiency > 0.80);
        prop_assert!(efficiency <= 0.95);
    }

    #[test]
    fn efficiency_non_increasing_in_voltage_deviation(
        a in 0.0..50.0f64,
        b in 0.0..50.0f64,
        current in 0.0..10.0f64,
    ) {
        let estimator = EfficiencyEstimator::new();
        let (near, far) = if (a - 5.0).abs() <= (b - 5.0).abs() { (a, b) } else { (b, a) };

        let near_efficiency = estimator.breakdown(near, current).efficiency;
        let far_efficiency = estimator.breakdown(far, current).efficiency;
        prop_assert!(near_efficiency >= far_efficiency);
    }

    #[test]
    fn efficiency_non_increasing_in_load_deviation(
        a in 0.0..10.0f64,
        b in 0.0..10.0f64,
        voltage in 0.0..50.0f64,
    ) {
        let estimator = EfficiencyEstimator::new();
        let (near, far) = if (a - 1.0).abs() <= (b - 1.0).abs() { (a, b) } else { (b, a) };

        let near_efficiency = estimator.breakdown(voltage, near).efficiency;
        let far_efficiency = estimator.breakdown(voltage, far).efficiency;
        prop_assert!(near_efficiency >= far_efficiency);
    }

    #[test]
    fn factors_stay_in_range(voltage in -1.0e6..1.0e6f64, current in -1.0e6..1.0e6f64) {
        let voltage_factor = voltage_match_factor(voltage, 5.0);
        let load_factor = load_match_factor(current, 1.0);
        prop_assert!((0.8 - 1e-12..=1.0).contains(&voltage_factor));
        prop_assert!((0.7 - 1e-12..=1.0).contains(&load_factor));
    }

    #[test]
    fn thermal_factor_is_always_one(voltage in 0.0..100.0f64, current in 0.0..10.0f64) {
        let estimator = EfficiencyEstimator::new();
        prop_assert_eq!(estimator.breakdown(voltage, current).thermal, 1.0);
    }

    #[test]
    fn estimator_history_tracks_operating_points(
        points in prop::collection::vec((0.0..50.0f64, 0.0..5.0f64), 0..10)
    ) {
        let mut estimator = EfficiencyEstimator::new();
        let results = estimator.optimize_all(&points);

        let voltages: Vec<f64> = points.iter().map(|p| p.0).collect();
        let currents: Vec<f64> = points.iter().map(|p| p.1).collect();
        prop_assert_eq!(estimator.history().series("efficiency").unwrap(), results);
        prop_assert_eq!(estimator.history().series("input_voltage").unwrap(), voltages);
        prop_assert_eq!(estimator.history().series("load_current").unwrap(), currents);
    }

    #[test]
    fn snapshot_bincode_roundtrip(inputs in prop::collection::vec(voltage(), 0..10)) {
        let mut regulator = VoltageCorrector::default();
        regulator.simulate(&inputs);

        let snapshot = regulator.snapshot();
        let bytes = snapshot.to_bytes().unwrap();
        let restored: Snapshot<RegulationRecord> = Snapshot::from_bytes(&bytes).unwrap();

        prop_assert_eq!(&restored.history, regulator.history());
    }
}
