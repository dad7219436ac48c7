//! Shared test fixtures: a stub detection service and app construction.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;
use warden_detect::{CountBySeverity, DetectError, DetectorClient, DetectorId, Finding};
use warden_server::config::SkillSettings;
use warden_server::{app, AppState};
use warden_types::Region;

/// Stub detection service with a fixed per-region answer table.
///
/// Records how the skill drives it: total detector lookups and the last
/// severity floor passed to a findings query.
#[derive(Default)]
pub struct StubDetector {
    stats: HashMap<Region, CountBySeverity>,
    findings: HashMap<Region, Vec<Finding>>,
    fail: bool,
    pub detector_lookups: AtomicUsize,
    pub last_min_severity: Mutex<Option<f64>>,
}

impl StubDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives `region` an active detector answering with these wire
    /// statistics.
    pub fn with_stats(mut self, region: Region, entries: &[(&str, u64)]) -> Self {
        let wire: CountBySeverity = entries
            .iter()
            .map(|(score, n)| (score.to_string(), *n))
            .collect();
        self.stats.insert(region, wire);
        self
    }

    /// Gives `region` an active detector answering with these findings.
    pub fn with_findings(mut self, region: Region, findings: Vec<Finding>) -> Self {
        self.findings.insert(region, findings);
        self
    }

    /// Makes every call fail with a service error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    fn has_detector(&self, region: Region) -> bool {
        self.stats.contains_key(&region) || self.findings.contains_key(&region)
    }
}

#[async_trait]
impl DetectorClient for StubDetector {
    async fn list_detector(&self, region: Region) -> Result<Option<DetectorId>, DetectError> {
        self.detector_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DetectError::Api {
                status: 500,
                message: "stub failure".to_string(),
            });
        }
        if self.has_detector(region) {
            Ok(Some(DetectorId(format!("det-{}", region.code()))))
        } else {
            Ok(None)
        }
    }

    async fn findings_statistics(
        &self,
        region: Region,
        _detector: &DetectorId,
    ) -> Result<CountBySeverity, DetectError> {
        Ok(self.stats.get(&region).cloned().unwrap_or_default())
    }

    async fn list_finding_ids(
        &self,
        region: Region,
        _detector: &DetectorId,
        min_severity: f64,
        max_results: usize,
    ) -> Result<Vec<String>, DetectError> {
        *self.last_min_severity.lock().expect("lock poisoned") = Some(min_severity);
        let ids = self
            .findings
            .get(&region)
            .map(|findings| {
                findings
                    .iter()
                    .enumerate()
                    .filter(|(_, f)| f.severity >= min_severity)
                    .take(max_results)
                    .map(|(i, _)| format!("finding-{i}"))
                    .collect()
            })
            .unwrap_or_default();
        Ok(ids)
    }

    async fn get_findings(
        &self,
        region: Region,
        _detector: &DetectorId,
        ids: &[String],
    ) -> Result<Vec<Finding>, DetectError> {
        let all = self.findings.get(&region).cloned().unwrap_or_default();
        let findings = ids
            .iter()
            .filter_map(|id| id.strip_prefix("finding-"))
            .filter_map(|index| index.parse::<usize>().ok())
            .filter_map(|index| all.get(index).cloned())
            .collect();
        Ok(findings)
    }
}

/// Builds a router over the stub with the given briefing regions.
pub fn test_app(stub: Arc<StubDetector>, briefing_regions: &[Region]) -> axum::Router {
    let state = AppState::new(
        stub,
        SkillSettings {
            max_results: 10,
            briefing_regions: briefing_regions.to_vec(),
            card_image: None,
        },
    );
    app(state)
}

/// Posts one turn to the skill webhook, returning status and parsed body.
pub async fn post_turn(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/skill")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("invalid JSON response")
    };
    (status, value)
}

/// The spoken SSML of a turn response.
pub fn speech_of(body: &Value) -> &str {
    body["response"]["outputSpeech"]["ssml"]
        .as_str()
        .expect("missing output speech")
}
