//! Core formulas and history types.
//!
//! This module contains the pure computational core:
//! - Proportional voltage correction clamped to a tolerance band
//! - Efficiency sub-factors scored against fixed optima
//! - The `Sample` trait and the append-only `History` log
//!
//! Formulas in this module are pure. Components wrap them and add the
//! history side effect.

mod correction;
mod factor;
mod history;
mod sample;

pub use correction::{correct, Correction, ToleranceBand, CORRECTION_GAIN};
pub use factor::{
    capped, deviation_factor, load_match_factor, thermal_factor, voltage_match_factor,
    LOAD_PENALTY_CAP, THERMAL_PENALTY_CAP, VOLTAGE_PENALTY_CAP,
};
pub use history::History;
pub use sample::Sample;
