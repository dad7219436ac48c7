//! Severity band classification.
//!
//! The detection service scores findings in the closed range 0.1 to 8.9.
//! Speech output groups scores into three named bands: Low covers 0.1 to
//! 3.9, Medium 4.0 to 6.9, and High 7.0 to 8.9. Band boundaries are
//! inclusive on the upper band: a score of exactly 4.0 is Medium and a
//! score of exactly 7.0 is High.

use serde::{Deserialize, Serialize};

/// Named severity band derived from a numeric finding score.
///
/// Ordering follows increasing severity, so `SeverityBand` sorts Low before
/// Medium before High when used as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityBand {
    Low,
    Medium,
    High,
}

impl SeverityBand {
    /// Classifies a numeric severity score into a band.
    ///
    /// Total over all finite scores: anything below 4.0 is Low, anything at
    /// or above 7.0 is High, everything between is Medium.
    pub fn from_score(score: f64) -> Self {
        if score < 4.0 {
            Self::Low
        } else if score < 7.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Parses a spoken band name ("low", "Medium", "HIGH").
    pub fn from_spoken(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Returns the minimum score a finding in this band can carry.
    pub fn floor(self) -> f64 {
        match self {
            Self::Low => 0.0,
            Self::Medium => 4.0,
            Self::High => 7.0,
        }
    }

    /// Returns the spoken label for this band.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves an optional spoken band name to a minimum severity floor.
///
/// A missing or unrecognized name degrades to 0.0, the most permissive
/// floor, so a malformed severity slot widens the query instead of failing
/// it.
pub fn minimum_severity(spoken: Option<&str>) -> f64 {
    spoken
        .and_then(SeverityBand::from_spoken)
        .map(SeverityBand::floor)
        .unwrap_or(0.0)
}
