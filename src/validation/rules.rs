//! Accumulating configuration checks using Validation.

use crate::validation::error::{ConfigError, Violation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of a single parameter check
pub type ParameterCheck = Validation<(), NonEmptyVec<Violation>>;

/// Collects parameter checks and reports ALL violations at once.
///
/// # Example
///
/// ```rust
/// use powerwise::validation::ConfigRules;
///
/// let result = ConfigRules::new()
///     .finite("target_voltage", 5.0)
///     .non_negative("tolerance", -1.0)
///     .non_zero("optimal_current", 0.0)
///     .finish();
///
/// assert_eq!(result.unwrap_err().violations().len(), 2);
/// ```
#[derive(Default)]
pub struct ConfigRules {
    checks: Vec<ParameterCheck>,
}

impl ConfigRules {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Require `value` to be neither NaN nor infinite.
    pub fn finite(mut self, name: &'static str, value: f64) -> Self {
        let check = if value.is_finite() {
            Validation::success(())
        } else {
            Validation::fail(Violation::NonFinite { name, value })
        };
        self.checks.push(check);
        self
    }

    /// Require `value >= 0`. NaN is reported by `finite`, not here.
    pub fn non_negative(mut self, name: &'static str, value: f64) -> Self {
        let check = if value < 0.0 {
            Validation::fail(Violation::NegativeTolerance { name, value })
        } else {
            Validation::success(())
        };
        self.checks.push(check);
        self
    }

    /// Require `value != 0` for parameters used as divisors.
    pub fn non_zero(mut self, name: &'static str, value: f64) -> Self {
        let check = if value == 0.0 {
            Validation::fail(Violation::ZeroReference { name })
        } else {
            Validation::success(())
        };
        self.checks.push(check);
        self
    }

    /// Run every check, accumulating ALL failures.
    pub fn finish(self) -> Result<(), ConfigError> {
        match Validation::all_vec(self.checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(ConfigError::InvalidConfiguration {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }
}
