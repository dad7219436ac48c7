//! Configuration loading and skill-settings resolution tests.

use std::io::Write;
use warden_server::config::{load_config, SkillConfig};
use warden_types::Region;

#[test]
fn defaults_apply_without_a_config_file() {
    let config = load_config(None).expect("defaults must load");

    assert_eq!(config.server.port, 3000);
    assert_eq!(
        config.detector.endpoint_template,
        "https://guardduty.{region}.amazonaws.com"
    );
    assert_eq!(config.skill.max_results, 10);
    assert_eq!(config.logging.level, "info");

    let skill = config.skill.resolve().expect("defaults must resolve");
    assert_eq!(skill.briefing_regions, vec![Region::UsEast1, Region::UsWest2]);
    assert!(skill.card_image.is_none());
}

#[test]
fn toml_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    writeln!(
        file,
        r#"
[server]
port = 8080

[detector]
endpoint_template = "http://127.0.0.1:9090"

[skill]
max_results = 5
briefing_regions = ["eu-west-2", "ap-south-1"]
card_image_small_url = "https://example.com/small.png"

[logging]
level = "debug"
"#
    )
    .expect("failed to write temp config");

    let config = load_config(file.path().to_str()).expect("config must load");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.detector.endpoint_template, "http://127.0.0.1:9090");
    assert_eq!(config.logging.level, "debug");

    let skill = config.skill.resolve().expect("config must resolve");
    assert_eq!(skill.max_results, 5);
    assert_eq!(skill.briefing_regions, vec![Region::EuWest2, Region::ApSouth1]);
    let image = skill.card_image.expect("card image configured");
    assert_eq!(image.small_image_url.as_deref(), Some("https://example.com/small.png"));
    assert!(image.large_image_url.is_none());
}

#[test]
fn unknown_briefing_region_fails_resolution() {
    let skill = SkillConfig {
        briefing_regions: vec!["us-east-1".to_string(), "mars-north-1".to_string()],
        ..SkillConfig::default()
    };

    let error = skill.resolve().expect_err("unknown region must fail");
    assert!(error.to_string().contains("mars-north-1"));
}

#[test]
fn max_results_is_clamped_to_platform_limits() {
    let skill = SkillConfig {
        max_results: 50,
        ..SkillConfig::default()
    };
    assert_eq!(skill.resolve().expect("must resolve").max_results, 15);

    let skill = SkillConfig {
        max_results: 0,
        ..SkillConfig::default()
    };
    assert_eq!(skill.resolve().expect("must resolve").max_results, 1);
}
