//! Read-only history snapshots for reporting and plotting collaborators.
//!
//! A snapshot freezes a component's history together with the metadata a
//! consumer needs to tell snapshots apart. Snapshots encode to JSON for
//! human-facing tools and to bincode for compact in-process hand-off.

use crate::core::{History, Sample};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of a component history.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<E: Sample> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Name of the component the history belongs to
    pub source: String,

    /// Frozen copy of the history
    pub history: History<E>,
}

impl<E: Sample> Snapshot<E> {
    /// Freeze `history` under a fresh identifier.
    pub fn capture(source: &str, history: &History<E>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            source: source.to_string(),
            history: history.clone(),
        }
    }

    /// Channel names carried by every entry.
    pub fn channels(&self) -> &'static [&'static str] {
        E::CHANNELS
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON, rejecting unsupported format versions.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from bincode, rejecting unsupported format versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::efficiency::{EfficiencyEstimator, EfficiencyRecord};
    use crate::regulator::{RegulationRecord, VoltageCorrector};

    fn regulated() -> VoltageCorrector {
        let mut regulator = VoltageCorrector::default();
        regulator.simulate(&[12.0, 14.4, 15.0, 16.5, 11.8]);
        regulator
    }

    #[test]
    fn capture_copies_history() {
        let regulator = regulated();
        let snapshot = regulator.snapshot();

        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.source, "voltage_corrector");
        assert_eq!(&snapshot.history, regulator.history());
        assert_eq!(snapshot.channels(), &["input_voltage", "correction", "error"]);
    }

    #[test]
    fn snapshot_is_detached_from_component() {
        let mut regulator = regulated();
        let snapshot = regulator.snapshot();

        regulator.regulate(5.0);

        assert_eq!(snapshot.history.len(), 5);
        assert_eq!(regulator.history().len(), 6);
    }

    #[test]
    fn snapshots_have_distinct_ids() {
        let regulator = regulated();
        assert_ne!(regulator.snapshot().id, regulator.snapshot().id);
    }

    #[test]
    fn json_roundtrip_preserves_history() {
        let snapshot = regulated().snapshot();
        let json = snapshot.to_json().unwrap();
        let restored: Snapshot<RegulationRecord> = Snapshot::from_json(&json).unwrap();

        assert_eq!(restored.id, snapshot.id);
        assert_eq!(restored.taken_at, snapshot.taken_at);
        assert_eq!(restored.history.len(), snapshot.history.len());
        for channel in snapshot.channels() {
            let expected = snapshot.history.series(channel).unwrap();
            let actual = restored.history.series(channel).unwrap();
            for (a, b) in actual.iter().zip(&expected) {
                assert!((a - b).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn bincode_roundtrip_preserves_history() {
        let mut estimator = EfficiencyEstimator::new();
        estimator.optimize_all(&[(12.0, 0.5), (14.4, 1.0), (15.0, 2.0)]);

        let snapshot = estimator.snapshot();
        let bytes = snapshot.to_bytes().unwrap();
        let restored: Snapshot<EfficiencyRecord> = Snapshot::from_bytes(&bytes).unwrap();

        assert_eq!(restored.source, "efficiency_estimator");
        assert_eq!(restored.history, snapshot.history);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut snapshot = regulated().snapshot();
        snapshot.version = SNAPSHOT_VERSION + 1;
        let json = serde_json::to_string(&snapshot).unwrap();

        let result = Snapshot::<RegulationRecord>::from_json(&json);
        assert!(matches!(
            result,
            Err(SnapshotError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = Snapshot::<RegulationRecord>::from_json("{\"version\": 1");
        assert!(matches!(result, Err(SnapshotError::DeserializationFailed(_))));
    }
}
