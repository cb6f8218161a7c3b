//! Core Sample trait for history entries.
//!
//! Every record a component appends to its history implements this trait,
//! which names the scalar channels the record carries so that reporting
//! collaborators can pull one series at a time.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for history entries.
///
/// A sample is an immutable value record made of named scalar channels.
///
/// # Required Traits
///
/// - `Clone`: samples are copied into snapshots
/// - `PartialEq`: histories are comparable entry by entry
/// - `Debug`: samples are debuggable for diagnostics
/// - `Serialize` + `Deserialize`: samples travel inside snapshots
///
/// # Example
///
/// ```rust
/// use powerwise::core::Sample;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Reading {
///     volts: f64,
///     amps: f64,
/// }
///
/// impl Sample for Reading {
///     const CHANNELS: &'static [&'static str] = &["volts", "amps"];
///
///     fn value(&self, channel: &str) -> Option<f64> {
///         match channel {
///             "volts" => Some(self.volts),
///             "amps" => Some(self.amps),
///             _ => None,
///         }
///     }
/// }
///
/// let reading = Reading { volts: 12.0, amps: 0.5 };
/// assert_eq!(reading.value("amps"), Some(0.5));
/// assert_eq!(reading.value("watts"), None);
/// ```
pub trait Sample:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Channel names, in display order.
    const CHANNELS: &'static [&'static str];

    /// Value of the named channel, or `None` if the sample has no such channel.
    fn value(&self, channel: &str) -> Option<f64>;

    /// All channel values in `CHANNELS` order.
    fn values(&self) -> Vec<f64> {
        Self::CHANNELS
            .iter()
            .filter_map(|channel| self.value(channel))
            .collect()
    }
}
