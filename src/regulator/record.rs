use crate::core::Sample;
use serde::{Deserialize, Serialize};

/// One regulation step as it appears in the history.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegulationRecord {
    /// Voltage fed into the corrector
    pub input_voltage: f64,
    /// Correction term before clamping
    pub correction: f64,
    /// Deviation of the input from the target
    pub error: f64,
}

impl Sample for RegulationRecord {
    const CHANNELS: &'static [&'static str] = &["input_voltage", "correction", "error"];

    fn value(&self, channel: &str) -> Option<f64> {
        match channel {
            "input_voltage" => Some(self.input_voltage),
            "correction" => Some(self.correction),
            "error" => Some(self.error),
            _ => None,
        }
    }
}
