//! Shared types and constants for the Warden voice skill.
//!
//! This crate provides the foundational types used across all Warden crates:
//! the supported region catalog, severity band classification, finding
//! statistics containers, and the voice-platform turn envelope.
//!
//! No crate in the workspace depends on anything *except* `warden-types` for
//! cross-cutting type definitions. This keeps the dependency graph clean and
//! prevents circular dependencies.

mod region;
mod severity;
mod stats;
pub mod turn;

pub use region::Region;
pub use severity::{minimum_severity, SeverityBand};
pub use stats::{
    Briefing, FindingSummary, GlobalStatistics, RegionReport, RegionStatistics, SeverityCounts,
};
