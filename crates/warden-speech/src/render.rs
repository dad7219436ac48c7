//! Render-time assembly of spoken lines.
//!
//! Statistics and finding lists become speech fragments here, joined with a
//! plain string-join. The fragments still carry SSML pause markup; the
//! response builder scrubs and de-markups them per surface.

use crate::ssml::pause;
use warden_types::{FindingSummary, Region, RegionReport, SeverityCounts};

/// Renders one region's statistics as spoken band counts.
///
/// `3 High severity, 1 Low severity` with a short pause before each count.
pub fn region_stats(stats: &SeverityCounts) -> String {
    stats
        .iter()
        .map(|(band, n)| format!("{} {n} {band} severity", pause(".3s")))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the briefing's global tally.
pub fn global_tally(global: &SeverityCounts) -> String {
    global
        .iter()
        .map(|(band, n)| format!("{}{n} {band} severity", pause(".2s")))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the per-region briefing blocks in report order.
///
/// A region with nothing to report gets a "no current findings" line instead
/// of a numeric block.
pub fn region_blocks(regions: &[RegionReport]) -> String {
    let mut lines = Vec::new();
    for report in regions {
        if report.stats.is_empty() {
            lines.push(format!(
                "{} There are no current findings in the {} region.",
                pause(".5s"),
                report.region.spoken_name()
            ));
        } else {
            lines.push(format!(
                "{}Findings for {} region",
                pause(".5s"),
                report.region.spoken_name()
            ));
            for (band, n) in report.stats.iter() {
                lines.push(format!("{}{n} {band} severity", pause(".2s")));
            }
        }
    }
    lines.join(", ")
}

/// Renders finding detail lines: severity band, count, description.
pub fn findings(findings: &[FindingSummary]) -> String {
    findings
        .iter()
        .map(|finding| {
            format!(
                "Severity, {}, {}Count, {}, {}{}",
                finding.band,
                pause(".2s"),
                finding.count,
                pause(".2s"),
                finding.title
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders a spoken list of region names.
pub fn region_list(regions: &[Region]) -> String {
    regions
        .iter()
        .map(|region| region.spoken_name().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
