//! Findings aggregation for the Warden skill.
//!
//! Drives the detection-service collaborator and turns its wire-level
//! answers into the statistics the speech layer renders: per-region
//! count-by-band statistics, the multi-region briefing with its global
//! tally, and capped per-finding detail lists.
//!
//! A region without a configured detector yields empty statistics — the
//! aggregator does not distinguish "detector present with zero findings"
//! from "no detector at all"; both read as "nothing to report" downstream.

use tracing::warn;
use warden_detect::{CountBySeverity, DetectError, DetectorClient};
use warden_types::{
    Briefing, FindingSummary, GlobalStatistics, Region, RegionReport, RegionStatistics,
    SeverityBand, SeverityCounts,
};

/// Fetches the count-by-band statistics for one region.
///
/// No detector in the region means empty statistics, not an error.
pub async fn region_statistics(
    client: &dyn DetectorClient,
    region: Region,
) -> Result<RegionStatistics, DetectError> {
    let Some(detector) = client.list_detector(region).await? else {
        return Ok(RegionStatistics::new());
    };

    let wire = client.findings_statistics(region, &detector).await?;
    Ok(fold_counts(region, &wire))
}

/// Builds the multi-region briefing.
///
/// Regions are queried sequentially in the given order. The global tally is
/// an associative pointwise sum, so the order affects only the order of the
/// per-region reports, never the totals.
pub async fn briefing(
    client: &dyn DetectorClient,
    regions: &[Region],
) -> Result<Briefing, DetectError> {
    let mut global = GlobalStatistics::new();
    let mut reports = Vec::with_capacity(regions.len());

    for &region in regions {
        let stats = region_statistics(client, region).await?;
        if !stats.is_empty() {
            global.merge(&stats);
        }
        reports.push(RegionReport { region, stats });
    }

    Ok(Briefing {
        global,
        regions: reports,
    })
}

/// Fetches finding details for one region, at or above a severity floor,
/// in ascending severity order, capped at `max_results`.
///
/// No detector in the region means an empty list, not an error.
pub async fn finding_details(
    client: &dyn DetectorClient,
    region: Region,
    min_severity: f64,
    max_results: usize,
) -> Result<Vec<FindingSummary>, DetectError> {
    let Some(detector) = client.list_detector(region).await? else {
        return Ok(Vec::new());
    };

    let ids = client
        .list_finding_ids(region, &detector, min_severity, max_results)
        .await?;
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let findings = client.get_findings(region, &detector, &ids).await?;
    Ok(findings
        .into_iter()
        .map(|finding| FindingSummary {
            band: SeverityBand::from_score(finding.severity),
            count: finding.count,
            title: finding.title,
        })
        .collect())
}

/// Folds wire statistics (raw score string → count) into band counts.
fn fold_counts(region: Region, wire: &CountBySeverity) -> SeverityCounts {
    let mut stats = SeverityCounts::new();
    for (score, n) in wire {
        match score.parse::<f64>() {
            Ok(value) => stats.add_score(value, *n),
            Err(_) => warn!(
                region = region.code(),
                score = score.as_str(),
                "skipping unparseable severity key in statistics"
            ),
        }
    }
    stats
}
