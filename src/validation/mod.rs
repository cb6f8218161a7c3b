//! Construction-time configuration validation.
//!
//! Parameters are checked with Stillwater's `Validation` type so that a
//! broken configuration reports every violation in a single pass instead
//! of failing at the first one.
//!
//! Only construction is validated. Runtime inputs (voltages, currents) are
//! always accepted and flow through the formulas unchanged.

pub mod error;
pub mod rules;

pub use error::{ConfigError, Violation};
pub use rules::{ConfigRules, ParameterCheck};
