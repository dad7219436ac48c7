//! Server configuration loading from file and environment variables.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;
use warden_types::turn::CardImage;
use warden_types::Region;

/// Platform response-size limits make more than 15 findings per answer
/// impractical; the configured maximum is clamped to this ceiling.
const MAX_RESULTS_CEILING: usize = 15;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Detection-service endpoint settings.
    #[serde(default)]
    pub detector: DetectorConfig,

    /// Skill behavior settings.
    #[serde(default)]
    pub skill: SkillConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Detection-service endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectorConfig {
    /// Regional endpoint template; `{region}` is replaced with the canonical
    /// region code per call.
    #[serde(default = "default_endpoint_template")]
    pub endpoint_template: String,
}

/// Skill behavior configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillConfig {
    /// Maximum findings to return per query (clamped to 1..=15).
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Region codes aggregated by the flash briefing, in spoken order.
    #[serde(default = "default_briefing_regions")]
    pub briefing_regions: Vec<String>,

    /// Optional card image URLs for the visual surface.
    #[serde(default)]
    pub card_image_small_url: Option<String>,
    #[serde(default)]
    pub card_image_large_url: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "warden_server=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

/// Skill settings resolved from [`SkillConfig`]: validated regions, clamped
/// limits, assembled card image. Immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct SkillSettings {
    pub max_results: usize,
    pub briefing_regions: Vec<Region>,
    pub card_image: Option<CardImage>,
}

impl SkillConfig {
    /// Validates and resolves the raw skill configuration.
    ///
    /// Unknown region codes fail here, at startup, rather than on the first
    /// briefing turn.
    pub fn resolve(&self) -> Result<SkillSettings, ConfigError> {
        let mut briefing_regions = Vec::with_capacity(self.briefing_regions.len());
        for code in &self.briefing_regions {
            let region = Region::from_code(code)
                .ok_or_else(|| ConfigError::UnknownRegion(code.clone()))?;
            briefing_regions.push(region);
        }

        let max_results = self.max_results.clamp(1, MAX_RESULTS_CEILING);
        if max_results != self.max_results {
            tracing::warn!(
                configured = self.max_results,
                effective = max_results,
                "skill.max_results clamped to platform limits"
            );
        }

        let card_image = if self.card_image_small_url.is_none() && self.card_image_large_url.is_none()
        {
            None
        } else {
            Some(CardImage {
                small_image_url: self.card_image_small_url.clone(),
                large_image_url: self.card_image_large_url.clone(),
            })
        };

        Ok(SkillSettings {
            max_results,
            briefing_regions,
            card_image,
        })
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
}

fn default_port() -> u16 {
    3000
}

fn default_endpoint_template() -> String {
    "https://guardduty.{region}.amazonaws.com".to_string()
}

fn default_max_results() -> usize {
    10
}

fn default_briefing_regions() -> Vec<String> {
    vec!["us-east-1".to_string(), "us-west-2".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            endpoint_template: default_endpoint_template(),
        }
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            briefing_regions: default_briefing_regions(),
            card_image_small_url: None,
            card_image_large_url: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A briefing region code is not in the supported catalog.
    #[error("unknown briefing region code: {0}")]
    UnknownRegion(String),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `WARDEN_HOST` overrides `server.host`
/// - `WARDEN_PORT` overrides `server.port`
/// - `WARDEN_ENDPOINT_TEMPLATE` overrides `detector.endpoint_template`
/// - `WARDEN_MAX_RESULTS` overrides `skill.max_results`
/// - `WARDEN_BRIEFING_REGIONS` overrides `skill.briefing_regions`
///   (comma-separated region codes)
/// - `WARDEN_LOG_LEVEL` overrides `logging.level`
/// - `WARDEN_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(host) = std::env::var("WARDEN_HOST") {
        if let Ok(parsed) = host.parse() {
            config.server.host = parsed;
        }
    }
    if let Ok(port) = std::env::var("WARDEN_PORT") {
        if let Ok(parsed) = port.parse() {
            config.server.port = parsed;
        }
    }
    if let Ok(template) = std::env::var("WARDEN_ENDPOINT_TEMPLATE") {
        config.detector.endpoint_template = template;
    }
    if let Ok(max_results) = std::env::var("WARDEN_MAX_RESULTS") {
        if let Ok(parsed) = max_results.parse() {
            config.skill.max_results = parsed;
        }
    }
    if let Ok(regions) = std::env::var("WARDEN_BRIEFING_REGIONS") {
        config.skill.briefing_regions = regions
            .split(',')
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect();
    }
    if let Ok(level) = std::env::var("WARDEN_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("WARDEN_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    Ok(config)
}
