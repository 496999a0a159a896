//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = ArkitConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_negative_heading_filter() {
    let mut config = ArkitConfig::default();
    config.heading.filter_degrees = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("heading.filter_degrees"));
}

#[test]
fn catches_heading_filter_above_full_turn() {
    let mut config = ArkitConfig::default();
    config.heading.filter_degrees = 361.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("heading.filter_degrees"));
}

#[test]
fn zero_heading_filter_is_allowed() {
    let mut config = ArkitConfig::default();
    config.heading.filter_degrees = 0.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_blank_depth_camera() {
    let mut config = ArkitConfig::default();
    config.device.depth_camera = Some("  ".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("device.depth_camera"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ArkitConfig::default();
    config.heading.filter_degrees = 400.0;
    config.fonts.available.push(String::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("heading.filter_degrees"));
    assert!(err.contains("fonts.available"));
}
