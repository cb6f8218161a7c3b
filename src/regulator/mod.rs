//! Voltage corrector with a tolerance-band clamp.
//!
//! The corrector pulls an arbitrary input voltage towards its target with a
//! fixed proportional gain and never lets the output leave
//! `[target - tolerance, target + tolerance]`.

mod record;

pub use record::RegulationRecord;

use crate::core::{correct, Correction, History, ToleranceBand, CORRECTION_GAIN};
use crate::snapshot::Snapshot;
use crate::validation::{ConfigError, ConfigRules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Source name recorded in regulator snapshots.
pub const SOURCE: &str = "voltage_corrector";

/// Default target output voltage.
pub const DEFAULT_TARGET_VOLTAGE: f64 = 5.0;

/// Default allowed deviation from the target.
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Construction parameters for a [`VoltageCorrector`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegulatorConfig {
    pub target_voltage: f64,
    pub tolerance: f64,
}

impl Default for RegulatorConfig {
    fn default() -> Self {
        Self {
            target_voltage: DEFAULT_TARGET_VOLTAGE,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl RegulatorConfig {
    /// Check the parameters, reporting every violation at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigRules::new()
            .finite("target_voltage", self.target_voltage)
            .finite("tolerance", self.tolerance)
            .non_negative("tolerance", self.tolerance)
            .finish()
    }
}

/// Proportional voltage corrector.
///
/// Every call to [`regulate`](Self::regulate) appends one
/// [`RegulationRecord`] to the corrector's history.
///
/// # Example
///
/// ```rust
/// use powerwise::VoltageCorrector;
///
/// let mut regulator = VoltageCorrector::default();
/// let output = regulator.regulate(12.0);
///
/// assert!((output - 5.07).abs() < 1e-12);
/// assert_eq!(regulator.history().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct VoltageCorrector {
    target_voltage: f64,
    tolerance: f64,
    correction_gain: f64,
    history: History<RegulationRecord>,
}

impl Default for VoltageCorrector {
    fn default() -> Self {
        Self::with_config(RegulatorConfig::default())
    }
}

impl VoltageCorrector {
    /// Create a corrector around `target_voltage` with the given tolerance.
    ///
    /// Fails if either parameter is non-finite or the tolerance is negative.
    pub fn new(target_voltage: f64, tolerance: f64) -> Result<Self, ConfigError> {
        Self::from_config(RegulatorConfig {
            target_voltage,
            tolerance,
        })
    }

    /// Create a corrector from a validated configuration.
    pub fn from_config(config: RegulatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: RegulatorConfig) -> Self {
        info!(
            target_voltage = config.target_voltage,
            tolerance = config.tolerance,
            correction_gain = CORRECTION_GAIN,
            "voltage corrector created"
        );
        Self {
            target_voltage: config.target_voltage,
            tolerance: config.tolerance,
            correction_gain: CORRECTION_GAIN,
            history: History::new(),
        }
    }

    pub fn target_voltage(&self) -> f64 {
        self.target_voltage
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn correction_gain(&self) -> f64 {
        self.correction_gain
    }

    /// Allowed output range.
    pub fn band(&self) -> ToleranceBand {
        ToleranceBand::around(self.target_voltage, self.tolerance)
    }

    /// Compute one correction step without recording it.
    pub fn correct(&self, input_voltage: f64) -> Correction {
        correct(
            input_voltage,
            self.target_voltage,
            self.tolerance,
            self.correction_gain,
        )
    }

    /// Regulate `input_voltage` and record the step.
    pub fn regulate(&mut self, input_voltage: f64) -> f64 {
        if !input_voltage.is_finite() {
            warn!(input_voltage, "non-finite input voltage");
        }

        let step = self.correct(input_voltage);

        debug!(
            input_voltage,
            error = step.error,
            correction = step.correction,
            output = step.output,
            "voltage regulated"
        );
        if step.clamped {
            debug!(
                candidate = step.candidate,
                output = step.output,
                "correction clamped to tolerance band"
            );
        }

        self.history.record(RegulationRecord {
            input_voltage,
            correction: step.correction,
            error: step.error,
        });

        step.output
    }

    /// Regulate each input in order.
    ///
    /// Equivalent to calling [`regulate`](Self::regulate) once per element.
    pub fn simulate(&mut self, input_voltages: &[f64]) -> Vec<f64> {
        input_voltages
            .iter()
            .map(|&voltage| self.regulate(voltage))
            .collect()
    }

    /// Read-only view of every recorded step.
    pub fn history(&self) -> &History<RegulationRecord> {
        &self.history
    }

    /// Serializable copy of the history.
    pub fn snapshot(&self) -> Snapshot<RegulationRecord> {
        self.history.snapshot(SOURCE)
    }
}
