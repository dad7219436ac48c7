//! Detection-service collaborator for the Warden skill.
//!
//! The skill consumes a managed threat-detection service with a small REST
//! surface: list the per-region detector, fetch count-by-severity finding
//! statistics, list finding ids above a severity floor, and fetch finding
//! details. This crate defines that boundary as the [`DetectorClient`] trait
//! and provides the HTTP implementation.
//!
//! The service signals "nothing configured in this region" by returning an
//! empty detector list. That is zero-data, not a failure: `list_detector`
//! answers `Ok(None)` and callers degrade to an empty result. Only genuine
//! transport or contract failures surface as [`DetectError`].

pub mod client;
pub mod error;
pub mod http;

pub use client::{CountBySeverity, DetectorClient, DetectorId, Finding};
pub use error::DetectError;
pub use http::HttpDetectorClient;
