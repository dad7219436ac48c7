//! Speech output for the Warden skill.
//!
//! Everything the user hears or sees passes through this crate: statistics
//! and finding lists are rendered to spoken lines with a plain string-join,
//! the sanitizer redacts resource identifiers and strips stray structural
//! punctuation, and the response builder assembles the two-surface envelope
//! (SSML speech plus markup-free card text).

pub mod render;
pub mod response;
pub mod sanitizer;
pub mod ssml;

pub use response::SpeechResponseBuilder;
pub use sanitizer::scrub;
