//! The catalog of detection regions the skill can query.
//!
//! Users name regions by their spoken names ("Oregon", "Northern Virginia");
//! the detection service addresses them by canonical code ("us-west-2",
//! "us-east-1"). The catalog is the bidirectional mapping between the two.

use serde::{Deserialize, Serialize};

/// A detection region supported by the skill.
///
/// The alias lookup is many-to-one: several spoken forms resolve to the same
/// region. An unrecognized alias resolves to `None` — the caller turns that
/// into a clarification prompt, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "us-east-1")]
    UsEast1,
    #[serde(rename = "us-east-2")]
    UsEast2,
    #[serde(rename = "us-west-1")]
    UsWest1,
    #[serde(rename = "us-west-2")]
    UsWest2,
    #[serde(rename = "eu-west-1")]
    EuWest1,
    #[serde(rename = "eu-west-2")]
    EuWest2,
    #[serde(rename = "eu-central-1")]
    EuCentral1,
    #[serde(rename = "ap-southeast-1")]
    ApSoutheast1,
    #[serde(rename = "ap-southeast-2")]
    ApSoutheast2,
    #[serde(rename = "ap-northeast-1")]
    ApNortheast1,
    #[serde(rename = "ap-northeast-2")]
    ApNortheast2,
    #[serde(rename = "ap-south-1")]
    ApSouth1,
    #[serde(rename = "ca-central-1")]
    CaCentral1,
    #[serde(rename = "sa-east-1")]
    SaEast1,
}

impl Region {
    /// Every supported region, in briefing display order.
    pub const ALL: [Region; 14] = [
        Region::UsEast1,
        Region::UsEast2,
        Region::UsWest1,
        Region::UsWest2,
        Region::EuWest1,
        Region::EuWest2,
        Region::EuCentral1,
        Region::ApSoutheast1,
        Region::ApSoutheast2,
        Region::ApNortheast1,
        Region::ApNortheast2,
        Region::ApSouth1,
        Region::CaCentral1,
        Region::SaEast1,
    ];

    /// Resolves a spoken region name to a region.
    ///
    /// Matching is case-insensitive and tolerates surrounding whitespace.
    /// Returns `None` for anything outside the supported alias set.
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias.trim().to_lowercase().as_str() {
            "virginia" | "northern virginia" => Some(Self::UsEast1),
            "ohio" => Some(Self::UsEast2),
            "california" | "northern california" => Some(Self::UsWest1),
            "oregon" => Some(Self::UsWest2),
            "ireland" => Some(Self::EuWest1),
            "london" => Some(Self::EuWest2),
            "frankfurt" => Some(Self::EuCentral1),
            "singapore" => Some(Self::ApSoutheast1),
            "sydney" => Some(Self::ApSoutheast2),
            "tokyo" => Some(Self::ApNortheast1),
            "seoul" => Some(Self::ApNortheast2),
            "mumbai" => Some(Self::ApSouth1),
            "canada" | "central" => Some(Self::CaCentral1),
            "sao paulo" => Some(Self::SaEast1),
            _ => None,
        }
    }

    /// Resolves a canonical region code ("us-west-2") to a region.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.code() == code)
    }

    /// Returns the canonical region code used by the detection service.
    pub fn code(self) -> &'static str {
        match self {
            Self::UsEast1 => "us-east-1",
            Self::UsEast2 => "us-east-2",
            Self::UsWest1 => "us-west-1",
            Self::UsWest2 => "us-west-2",
            Self::EuWest1 => "eu-west-1",
            Self::EuWest2 => "eu-west-2",
            Self::EuCentral1 => "eu-central-1",
            Self::ApSoutheast1 => "ap-southeast-1",
            Self::ApSoutheast2 => "ap-southeast-2",
            Self::ApNortheast1 => "ap-northeast-1",
            Self::ApNortheast2 => "ap-northeast-2",
            Self::ApSouth1 => "ap-south-1",
            Self::CaCentral1 => "ca-central-1",
            Self::SaEast1 => "sa-east-1",
        }
    }

    /// Returns the primary spoken name used in speech output.
    pub fn spoken_name(self) -> &'static str {
        match self {
            Self::UsEast1 => "Virginia",
            Self::UsEast2 => "Ohio",
            Self::UsWest1 => "California",
            Self::UsWest2 => "Oregon",
            Self::EuWest1 => "Ireland",
            Self::EuWest2 => "London",
            Self::EuCentral1 => "Frankfurt",
            Self::ApSoutheast1 => "Singapore",
            Self::ApSoutheast2 => "Sydney",
            Self::ApNortheast1 => "Tokyo",
            Self::ApNortheast2 => "Seoul",
            Self::ApSouth1 => "Mumbai",
            Self::CaCentral1 => "Canada",
            Self::SaEast1 => "Sao Paulo",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_resolution_is_case_insensitive() {
        assert_eq!(Region::from_alias("Oregon"), Some(Region::UsWest2));
        assert_eq!(Region::from_alias("oregon"), Some(Region::UsWest2));
        assert_eq!(Region::from_alias("OREGON"), Some(Region::UsWest2));
        assert_eq!(Region::from_alias("  oregon "), Some(Region::UsWest2));
    }

    #[test]
    fn multiple_aliases_resolve_to_one_region() {
        assert_eq!(Region::from_alias("Virginia"), Some(Region::UsEast1));
        assert_eq!(Region::from_alias("Northern Virginia"), Some(Region::UsEast1));
        assert_eq!(Region::from_alias("northern Virginia"), Some(Region::UsEast1));
        assert_eq!(Region::from_alias("Canada"), Some(Region::CaCentral1));
        assert_eq!(Region::from_alias("Central"), Some(Region::CaCentral1));
    }

    #[test]
    fn unknown_alias_is_none_not_error() {
        assert_eq!(Region::from_alias("Atlantis"), None);
        assert_eq!(Region::from_alias(""), None);
    }

    #[test]
    fn alias_and_code_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_code(region.code()), Some(region));
            assert_eq!(Region::from_alias(region.spoken_name()), Some(region));
        }
    }

    #[test]
    fn serde_uses_canonical_codes() {
        let json = serde_json::to_string(&Region::UsWest2).unwrap();
        assert_eq!(json, "\"us-west-2\"");
        let back: Region = serde_json::from_str("\"eu-central-1\"").unwrap();
        assert_eq!(back, Region::EuCentral1);
    }
}
