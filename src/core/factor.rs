//! Efficiency sub-factors.
//!
//! Each factor scores how close one operating condition is to its optimum:
//! `1 - min(|value - optimum| / optimum, cap)`. A factor therefore lies in
//! `[1 - cap, 1]` for finite inputs.

/// Largest penalty for a voltage mismatch.
pub const VOLTAGE_PENALTY_CAP: f64 = 0.2;

/// Largest penalty for running away from the optimal load current.
pub const LOAD_PENALTY_CAP: f64 = 0.3;

/// Largest penalty for a thermal deviation.
pub const THERMAL_PENALTY_CAP: f64 = 0.2;

/// `min(value, cap)` that keeps NaN instead of discarding it.
pub fn capped(value: f64, cap: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.min(cap)
    }
}

/// Score the relative deviation of `value` from `optimum`.
///
/// `optimum` must be non-zero; configurations are validated for that at
/// construction.
pub fn deviation_factor(value: f64, optimum: f64, cap: f64) -> f64 {
    let relative = (value - optimum).abs() / optimum;
    1.0 - capped(relative, cap)
}

/// How well the input voltage matches the target output voltage.
///
/// # Example
///
/// ```rust
/// use powerwise::core::voltage_match_factor;
///
/// assert_eq!(voltage_match_factor(5.0, 5.0), 1.0);
/// assert!((voltage_match_factor(12.0, 5.0) - 0.8).abs() < 1e-12);
/// ```
pub fn voltage_match_factor(input_voltage: f64, target_voltage: f64) -> f64 {
    deviation_factor(input_voltage, target_voltage, VOLTAGE_PENALTY_CAP)
}

/// How close the load current is to the optimal operating current.
pub fn load_match_factor(load_current: f64, optimal_current: f64) -> f64 {
    deviation_factor(load_current, optimal_current, LOAD_PENALTY_CAP)
}

/// Thermal performance at `temperature`.
pub fn thermal_factor(temperature: f64, optimal_temperature: f64) -> f64 {
    deviation_factor(temperature, optimal_temperature, THERMAL_PENALTY_CAP)
}
