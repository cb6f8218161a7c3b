//! Powerwise: deterministic voltage correction and efficiency estimation
//!
//! Powerwise provides two independent components built on a pure core of
//! closed-form formulas. Each component adds one side effect: it appends
//! every computation to an append-only history that reporting and plotting
//! tools can read.
//!
//! # Core Concepts
//!
//! - **VoltageCorrector**: proportional correction of an input voltage,
//!   clamped to `target ± tolerance`
//! - **EfficiencyEstimator**: base efficiency plus a weighted bonus from
//!   voltage match, load match and thermal factors, capped at a ceiling
//! - **History**: append-only log of `Sample`s with per-channel series
//! - **Snapshot**: versioned, serializable copy of a history
//!
//! # Example
//!
//! ```rust
//! use powerwise::{EfficiencyEstimator, VoltageCorrector};
//!
//! let mut regulator = VoltageCorrector::new(5.0, 0.5)?;
//! let regulated = regulator.simulate(&[12.0, 14.4, 15.0, 16.5, 11.8]);
//! assert!(regulated.iter().all(|v| regulator.band().contains(*v)));
//!
//! let mut estimator = EfficiencyEstimator::new();
//! let efficiency = estimator.optimize(12.0, 0.5);
//! assert!(efficiency > 0.80 && efficiency <= 0.95);
//!
//! let corrections = regulator.history().series("correction").unwrap();
//! assert_eq!(corrections.len(), 5);
//! # Ok::<(), powerwise::validation::ConfigError>(())
//! ```

pub mod core;
pub mod efficiency;
pub mod regulator;
pub mod shared;
pub mod snapshot;
pub mod validation;

// Re-export commonly used types
pub use core::{Correction, History, Sample, ToleranceBand};
pub use efficiency::{
    EfficiencyBreakdown, EfficiencyEstimator, EfficiencyRecord, EstimatorConfig, FactorWeights,
};
pub use regulator::{RegulationRecord, RegulatorConfig, VoltageCorrector};
pub use shared::Shared;
pub use snapshot::{Snapshot, SnapshotError};
pub use validation::{ConfigError, Violation};
