//! Efficiency estimator configuration.

use crate::validation::{ConfigError, ConfigRules};
use serde::{Deserialize, Serialize};

/// Weight of each sub-factor in the efficiency bonus.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub voltage_match: f64,
    pub load_optimization: f64,
    pub thermal_management: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            voltage_match: 0.05,
            load_optimization: 0.07,
            thermal_management: 0.03,
        }
    }
}

/// Construction parameters for an
/// [`EfficiencyEstimator`](super::EfficiencyEstimator).
///
/// The reference values double as divisors in the sub-factor formulas and
/// must be non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Floor conversion efficiency before any bonus
    pub base_efficiency: f64,
    /// Upper bound on the reported efficiency
    pub efficiency_ceiling: f64,
    pub weights: FactorWeights,
    /// Voltage the input is matched against
    pub target_voltage: f64,
    /// Load current with the best conversion efficiency
    pub optimal_current: f64,
    /// Assumed operating temperature in °C. No call path measures it.
    pub operating_temperature: f64,
    /// Temperature in °C with the best thermal performance
    pub optimal_temperature: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            base_efficiency: 0.80,
            efficiency_ceiling: 0.95,
            weights: FactorWeights::default(),
            target_voltage: 5.0,
            optimal_current: 1.0,
            operating_temperature: 25.0,
            optimal_temperature: 25.0,
        }
    }
}

impl EstimatorConfig {
    /// Check the parameters, reporting every violation at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigRules::new()
            .finite("base_efficiency", self.base_efficiency)
            .finite("efficiency_ceiling", self.efficiency_ceiling)
            .finite("weights.voltage_match", self.weights.voltage_match)
            .finite("weights.load_optimization", self.weights.load_optimization)
            .finite("weights.thermal_management", self.weights.thermal_management)
            .finite("target_voltage", self.target_voltage)
            .non_zero("target_voltage", self.target_voltage)
            .finite("optimal_current", self.optimal_current)
            .non_zero("optimal_current", self.optimal_current)
            .finite("operating_temperature", self.operating_temperature)
            .finite("optimal_temperature", self.optimal_temperature)
            .non_zero("optimal_temperature", self.optimal_temperature)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Violation;

    #[test]
    fn default_config_is_valid() {
        assert!(EstimatorConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_divisors_are_all_reported() {
        let config = EstimatorConfig {
            target_voltage: 0.0,
            optimal_current: 0.0,
            optimal_temperature: 0.0,
            ..EstimatorConfig::default()
        };

        let error = config.validate().unwrap_err();
        assert_eq!(
            error.violations(),
            &[
                Violation::ZeroReference {
                    name: "target_voltage"
                },
                Violation::ZeroReference {
                    name: "optimal_current"
                },
                Violation::ZeroReference {
                    name: "optimal_temperature"
                },
            ]
        );
    }

    #[test]
    fn non_finite_weight_is_rejected() {
        let config = EstimatorConfig {
            weights: FactorWeights {
                thermal_management: f64::INFINITY,
                ..FactorWeights::default()
            },
            ..EstimatorConfig::default()
        };

        assert!(matches!(
            config.validate().unwrap_err().violations(),
            [Violation::NonFinite {
                name: "weights.thermal_management",
                ..
            }]
        ));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: EstimatorConfig =
            serde_json::from_str(r#"{"optimal_current": 2.0, "weights": {"voltage_match": 0.1}}"#)
                .unwrap();

        assert_eq!(config.optimal_current, 2.0);
        assert_eq!(config.weights.voltage_match, 0.1);
        assert_eq!(config.weights.load_optimization, 0.07);
        assert_eq!(config.base_efficiency, 0.80);
    }
}
