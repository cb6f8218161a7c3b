//! Power conversion efficiency estimator.
//!
//! The estimate is a base efficiency plus a weighted bonus from three
//! sub-factors, capped at a ceiling:
//!
//! ```text
//! bonus      = voltage_match * w_v + load_match * w_l + thermal * w_t
//! efficiency = min(base + bonus, ceiling)
//! ```
//!
//! The thermal factor is evaluated at the configured operating temperature.
//! Nothing feeds a measured temperature in, so with the defaults it is
//! always 1.0.

mod config;
mod record;

pub use config::{EstimatorConfig, FactorWeights};
pub use record::EfficiencyRecord;

use crate::core::{capped, load_match_factor, thermal_factor, voltage_match_factor, History};
use crate::snapshot::Snapshot;
use crate::validation::ConfigError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

/// Source name recorded in estimator snapshots.
pub const SOURCE: &str = "efficiency_estimator";

/// Every intermediate of one efficiency estimate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyBreakdown {
    pub voltage_match: f64,
    pub load_match: f64,
    pub thermal: f64,
    /// Weighted sum of the three factors
    pub additional: f64,
    /// Final, ceiling-capped efficiency
    pub efficiency: f64,
}

/// Efficiency estimator with an append-only history.
///
/// # Example
///
/// ```rust
/// use powerwise::EfficiencyEstimator;
///
/// let mut estimator = EfficiencyEstimator::new();
/// let efficiency = estimator.optimize(12.0, 0.5);
///
/// assert!((efficiency - 0.919).abs() < 1e-12);
/// assert_eq!(estimator.history().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct EfficiencyEstimator {
    config: EstimatorConfig,
    history: History<EfficiencyRecord>,
}

impl Default for EfficiencyEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl EfficiencyEstimator {
    /// Create an estimator with the built-in base, weights and references.
    pub fn new() -> Self {
        Self::with_config(EstimatorConfig::default())
    }

    /// Create an estimator from a validated configuration.
    pub fn from_config(config: EstimatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: EstimatorConfig) -> Self {
        info!(
            base_efficiency = config.base_efficiency,
            efficiency_ceiling = config.efficiency_ceiling,
            "efficiency estimator created"
        );
        Self {
            config,
            history: History::new(),
        }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Compute the estimate for one operating point without recording it.
    pub fn breakdown(&self, input_voltage: f64, load_current: f64) -> EfficiencyBreakdown {
        let config = &self.config;
        let weights = &config.weights;

        let voltage_match = voltage_match_factor(input_voltage, config.target_voltage);
        let load_match = load_match_factor(load_current, config.optimal_current);
        let thermal = thermal_factor(config.operating_temperature, config.optimal_temperature);
        trace!(voltage_match, load_match, thermal, "efficiency factors");

        let additional = voltage_match * weights.voltage_match
            + load_match * weights.load_optimization
            + thermal * weights.thermal_management;
        let efficiency = capped(config.base_efficiency + additional, config.efficiency_ceiling);

        EfficiencyBreakdown {
            voltage_match,
            load_match,
            thermal,
            additional,
            efficiency,
        }
    }

    /// Estimate the efficiency at one operating point and record it.
    pub fn optimize(&mut self, input_voltage: f64, load_current: f64) -> f64 {
        if !input_voltage.is_finite() || !load_current.is_finite() {
            warn!(input_voltage, load_current, "non-finite operating point");
        }

        let estimate = self.breakdown(input_voltage, load_current);

        debug!(
            input_voltage,
            load_current,
            additional = estimate.additional,
            efficiency = estimate.efficiency,
            "efficiency estimated"
        );
        if estimate.efficiency == self.config.efficiency_ceiling {
            debug!(
                uncapped = self.config.base_efficiency + estimate.additional,
                "efficiency capped at ceiling"
            );
        }

        self.history.record(EfficiencyRecord {
            efficiency: estimate.efficiency,
            input_voltage,
            load_current,
        });

        estimate.efficiency
    }

    /// Estimate each `(input_voltage, load_current)` pair in order.
    pub fn optimize_all(&mut self, operating_points: &[(f64, f64)]) -> Vec<f64> {
        operating_points
            .iter()
            .map(|&(voltage, current)| self.optimize(voltage, current))
            .collect()
    }

    /// Read-only view of every recorded estimate.
    pub fn history(&self) -> &History<EfficiencyRecord> {
        &self.history
    }

    /// Serializable copy of the history.
    pub fn snapshot(&self) -> Snapshot<EfficiencyRecord> {
        self.history.snapshot(SOURCE)
    }
}
