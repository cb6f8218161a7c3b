//! Append-only history of computed samples.
//!
//! Each component owns one history and appends exactly one sample per
//! computation. Entries are never edited or removed; external collaborators
//! get read-only views through `entries`, `series` and snapshots.

use super::sample::Sample;
use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};

/// Ordered, append-only log of samples.
///
/// Entry order equals call order on the owning component.
///
/// # Example
///
/// ```rust
/// use powerwise::core::{History, Sample};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Reading { volts: f64 }
///
/// impl Sample for Reading {
///     const CHANNELS: &'static [&'static str] = &["volts"];
///     fn value(&self, channel: &str) -> Option<f64> {
///         (channel == "volts").then_some(self.volts)
///     }
/// }
///
/// let mut history = History::new();
/// history.record(Reading { volts: 12.0 });
/// history.record(Reading { volts: 14.4 });
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.series("volts"), Some(vec![12.0, 14.4]));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct History<E: Sample> {
    entries: Vec<E>,
}

impl<E: Sample> Default for History<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Sample> History<E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a sample to the end of the log.
    pub fn record(&mut self, entry: E) {
        self.entries.push(entry);
    }

    /// All recorded samples, oldest first.
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently recorded sample.
    pub fn last(&self) -> Option<&E> {
        self.entries.last()
    }

    /// Extract one channel as a sequence, ready for plotting.
    ///
    /// Returns `None` if `channel` is not one of `E::CHANNELS`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use powerwise::VoltageCorrector;
    ///
    /// let mut regulator = VoltageCorrector::default();
    /// regulator.simulate(&[12.0, 15.0]);
    ///
    /// let errors = regulator.history().series("error").unwrap();
    /// assert_eq!(errors, vec![7.0, 10.0]);
    /// assert!(regulator.history().series("ripple").is_none());
    /// ```
    pub fn series(&self, channel: &str) -> Option<Vec<f64>> {
        if !E::CHANNELS.contains(&channel) {
            return None;
        }
        Some(
            self.entries
                .iter()
                .filter_map(|entry| entry.value(channel))
                .collect(),
        )
    }

    /// Take a versioned, serializable copy of the log.
    ///
    /// `source` names the component the history belongs to.
    pub fn snapshot(&self, source: &str) -> Snapshot<E> {
        Snapshot::capture(source, self)
    }
}
