//! Proportional voltage correction clamped to a tolerance band.

use serde::{Deserialize, Serialize};

/// Gain applied to the voltage error to derive the correction term.
pub const CORRECTION_GAIN: f64 = 0.01;

/// Closed interval `[lower, upper]` around a target voltage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToleranceBand {
    pub lower: f64,
    pub upper: f64,
}

impl ToleranceBand {
    /// Band of `target ± tolerance`.
    pub fn around(target: f64, tolerance: f64) -> Self {
        Self {
            lower: target - tolerance,
            upper: target + tolerance,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Clamp `value` into the band. NaN passes through unchanged.
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.lower {
            self.lower
        } else if value > self.upper {
            self.upper
        } else {
            value
        }
    }
}

/// Every intermediate of one correction step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    /// `input - target`
    pub error: f64,
    /// `gain * error`
    pub correction: f64,
    /// `target + correction`, before clamping
    pub candidate: f64,
    /// `candidate` clamped into the tolerance band
    pub output: f64,
    /// Whether the band limited the candidate
    pub clamped: bool,
}

/// Compute the corrected output voltage for `input`.
///
/// This is a pure function of its arguments.
///
/// # Example
///
/// ```rust
/// use powerwise::core::{correct, CORRECTION_GAIN};
///
/// let step = correct(16.5, 5.0, 0.05, CORRECTION_GAIN);
/// assert!((step.error - 11.5).abs() < 1e-12);
/// assert!(step.clamped);
/// assert!((step.output - 5.05).abs() < 1e-12);
/// ```
pub fn correct(input: f64, target: f64, tolerance: f64, gain: f64) -> Correction {
    let error = input - target;
    let correction = gain * error;
    let candidate = target + correction;
    let band = ToleranceBand::around(target, tolerance);
    let output = band.clamp(candidate);

    Correction {
        error,
        correction,
        candidate,
        output,
        clamped: !band.contains(candidate) && !candidate.is_nan(),
    }
}
