//! HTTP implementation of [`DetectorClient`].
//!
//! Talks to the detection service's regional REST endpoints. The endpoint
//! template carries a `{region}` placeholder that is substituted with the
//! canonical region code per call, so one client serves every region.
//! Credential injection and retries are the deployment's concern, not this
//! client's.

use crate::client::{CountBySeverity, DetectorClient, DetectorId, Finding};
use crate::error::DetectError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use warden_types::Region;

/// Statistic type requested from the service.
const COUNT_BY_SEVERITY: &str = "COUNT_BY_SEVERITY";

/// reqwest-backed detection-service client.
#[derive(Debug, Clone)]
pub struct HttpDetectorClient {
    http: reqwest::Client,
    endpoint_template: String,
}

impl HttpDetectorClient {
    /// Creates a client for the given endpoint template, e.g.
    /// `https://guardduty.{region}.amazonaws.com`. A template without the
    /// placeholder addresses every region at the same host (useful against a
    /// local stand-in service).
    pub fn new(endpoint_template: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint_template: endpoint_template.into(),
        }
    }

    fn base_url(&self, region: Region) -> String {
        self.endpoint_template.replace("{region}", region.code())
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, DetectError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(DetectError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl DetectorClient for HttpDetectorClient {
    async fn list_detector(&self, region: Region) -> Result<Option<DetectorId>, DetectError> {
        let url = format!("{}/detector", self.base_url(region));
        let response = Self::check(self.http.get(&url).send().await?).await?;
        let body: ListDetectorsResponse = response.json().await?;

        Ok(body.detector_ids.into_iter().next().map(DetectorId))
    }

    async fn findings_statistics(
        &self,
        region: Region,
        detector: &DetectorId,
    ) -> Result<CountBySeverity, DetectError> {
        let url = format!(
            "{}/detector/{}/findings/statistics",
            self.base_url(region),
            detector
        );
        let request = StatisticsRequest {
            finding_statistic_types: vec![COUNT_BY_SEVERITY.to_string()],
            finding_criteria: FindingCriteria::min_severity(0.0),
        };
        let response = Self::check(self.http.post(&url).json(&request).send().await?).await?;
        let body: StatisticsResponse = response.json().await?;

        Ok(body.finding_statistics.count_by_severity)
    }

    async fn list_finding_ids(
        &self,
        region: Region,
        detector: &DetectorId,
        min_severity: f64,
        max_results: usize,
    ) -> Result<Vec<String>, DetectError> {
        let url = format!("{}/detector/{}/findings", self.base_url(region), detector);
        let request = ListFindingsRequest {
            finding_criteria: FindingCriteria::min_severity(min_severity),
            max_results,
            sort_criteria: SortCriteria::severity_ascending(),
        };
        let response = Self::check(self.http.post(&url).json(&request).send().await?).await?;
        let body: ListFindingsResponse = response.json().await?;

        Ok(body.finding_ids)
    }

    async fn get_findings(
        &self,
        region: Region,
        detector: &DetectorId,
        ids: &[String],
    ) -> Result<Vec<Finding>, DetectError> {
        let url = format!(
            "{}/detector/{}/findings/get",
            self.base_url(region),
            detector
        );
        let request = GetFindingsRequest {
            finding_ids: ids.to_vec(),
            sort_criteria: SortCriteria::severity_ascending(),
        };
        let response = Self::check(self.http.post(&url).json(&request).send().await?).await?;
        let body: GetFindingsResponse = response.json().await?;

        Ok(body
            .findings
            .into_iter()
            .map(|finding| Finding {
                severity: finding.severity,
                title: finding.title,
                count: finding.service.count,
            })
            .collect())
    }
}

// Wire types, camelCase per the service's REST format.

#[derive(Debug, Deserialize)]
struct ListDetectorsResponse {
    #[serde(rename = "detectorIds", default)]
    detector_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
struct StatisticsRequest {
    #[serde(rename = "findingStatisticTypes")]
    finding_statistic_types: Vec<String>,
    #[serde(rename = "findingCriteria")]
    finding_criteria: FindingCriteria,
}

#[derive(Debug, Deserialize)]
struct StatisticsResponse {
    #[serde(rename = "findingStatistics")]
    finding_statistics: FindingStatistics,
}

#[derive(Debug, Deserialize)]
struct FindingStatistics {
    #[serde(rename = "countBySeverity", default)]
    count_by_severity: CountBySeverity,
}

#[derive(Debug, Serialize)]
struct ListFindingsRequest {
    #[serde(rename = "findingCriteria")]
    finding_criteria: FindingCriteria,
    #[serde(rename = "maxResults")]
    max_results: usize,
    #[serde(rename = "sortCriteria")]
    sort_criteria: SortCriteria,
}

#[derive(Debug, Deserialize)]
struct ListFindingsResponse {
    #[serde(rename = "findingIds", default)]
    finding_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GetFindingsRequest {
    #[serde(rename = "findingIds")]
    finding_ids: Vec<String>,
    #[serde(rename = "sortCriteria")]
    sort_criteria: SortCriteria,
}

#[derive(Debug, Deserialize)]
struct GetFindingsResponse {
    #[serde(default)]
    findings: Vec<WireFinding>,
}

#[derive(Debug, Deserialize)]
struct WireFinding {
    severity: f64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    service: WireService,
}

#[derive(Debug, Default, Deserialize)]
struct WireService {
    #[serde(default)]
    count: u64,
}

#[derive(Debug, Serialize)]
struct FindingCriteria {
    criterion: Criterion,
}

impl FindingCriteria {
    /// Criterion selecting findings at or above a severity floor. The
    /// service compares severity as an integer, so the floor is truncated.
    fn min_severity(floor: f64) -> Self {
        Self {
            criterion: Criterion {
                severity: SeverityCriterion { gte: floor as i64 },
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Criterion {
    severity: SeverityCriterion,
}

#[derive(Debug, Serialize)]
struct SeverityCriterion {
    gte: i64,
}

#[derive(Debug, Serialize)]
struct SortCriteria {
    #[serde(rename = "attributeName")]
    attribute_name: String,
    #[serde(rename = "orderBy")]
    order_by: String,
}

impl SortCriteria {
    fn severity_ascending() -> Self {
        Self {
            attribute_name: "severity".to_string(),
            order_by: "ASC".to_string(),
        }
    }
}
