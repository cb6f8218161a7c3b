use crate::core::Sample;
use serde::{Deserialize, Serialize};

/// One efficiency estimate as it appears in the history.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyRecord {
    pub efficiency: f64,
    pub input_voltage: f64,
    pub load_current: f64,
}

impl Sample for EfficiencyRecord {
    const CHANNELS: &'static [&'static str] = &["efficiency", "input_voltage", "load_current"];

    fn value(&self, channel: &str) -> Option<f64> {
        match channel {
            "efficiency" => Some(self.efficiency),
            "input_voltage" => Some(self.input_voltage),
            "load_current" => Some(self.load_current),
            _ => None,
        }
    }
}
