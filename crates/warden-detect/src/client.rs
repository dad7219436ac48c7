//! The detection-service boundary trait.

use crate::error::DetectError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use warden_types::Region;

/// The per-region handle identifying an active detector instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorId(pub String);

impl DetectorId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DetectorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wire-level statistics: raw severity score (as the service renders it,
/// e.g. `"8.0"`) mapped to a finding count. The aggregator classifies the
/// scores into bands.
pub type CountBySeverity = BTreeMap<String, u64>;

/// One finding as reported by the detection service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Numeric severity score in the 0.1 to 8.9 range.
    pub severity: f64,
    /// Finding description.
    pub title: String,
    /// Occurrence / affected-resource count.
    pub count: u64,
}

/// Client for the managed threat-detection service.
///
/// Object-safe so the server can hold `Arc<dyn DetectorClient>` and tests can
/// substitute a stub. All methods that take a detector expect one previously
/// returned by [`list_detector`](Self::list_detector) for the same region.
#[async_trait]
pub trait DetectorClient: Send + Sync {
    /// Returns the active detector for a region, or `None` when the service
    /// has no detector configured there. `None` is the zero-data signal —
    /// callers treat it as "nothing to report", never as a failure.
    async fn list_detector(&self, region: Region) -> Result<Option<DetectorId>, DetectError>;

    /// Returns the count-by-severity statistics for a detector.
    async fn findings_statistics(
        &self,
        region: Region,
        detector: &DetectorId,
    ) -> Result<CountBySeverity, DetectError>;

    /// Returns finding ids with severity at or above `min_severity`, in
    /// ascending severity order, capped at `max_results`.
    async fn list_finding_ids(
        &self,
        region: Region,
        detector: &DetectorId,
        min_severity: f64,
        max_results: usize,
    ) -> Result<Vec<String>, DetectError>;

    /// Returns finding details for the given ids, in ascending severity
    /// order.
    async fn get_findings(
        &self,
        region: Region,
        detector: &DetectorId,
        ids: &[String],
    ) -> Result<Vec<Finding>, DetectError>;
}
