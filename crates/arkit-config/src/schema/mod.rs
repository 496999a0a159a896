//! Configuration schema types for the bridge.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the plugin ships with.

mod device;
mod fonts;
mod geometry;
mod heading;
mod logging;

pub use device::*;
pub use fonts::*;
pub use geometry::*;
pub use heading::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArkitConfig {
    pub geometry: GeometryConfig,
    pub fonts: FontsConfig,
    pub device: DeviceConfig,
    pub heading: HeadingConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_is_strict() {
        let config = ArkitConfig::default();
        assert!(config.geometry.strict_dimensions);
    }

    #[test]
    fn default_device_has_no_depth_camera() {
        let config = ArkitConfig::default();
        assert!(config.device.depth_camera.is_none());
    }

    #[test]
    fn default_heading_settings() {
        let config = ArkitConfig::default();
        assert!((config.heading.filter_degrees - 1.0).abs() < f64::EPSILON);
        assert!(config.heading.display_calibration);
    }

    #[test]
    fn default_fonts_include_helvetica() {
        let config = ArkitConfig::default();
        assert!(config.fonts.available.iter().any(|f| f == "Helvetica"));
    }

    #[test]
    fn default_log_level_is_info() {
        let config = ArkitConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.level.as_str(), "info");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: ArkitConfig = toml::from_str(
            r#"
[heading]
filter_degrees = 5.0
"#,
        )
        .unwrap();
        assert!((config.heading.filter_degrees - 5.0).abs() < f64::EPSILON);
        assert!(config.heading.display_calibration);
        assert!(config.geometry.strict_dimensions);
    }

    #[test]
    fn log_level_parses_lowercase() {
        let config: ArkitConfig = toml::from_str(
            r#"
[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn depth_camera_parses() {
        let config: ArkitConfig = toml::from_str(
            r#"
[device]
depth_camera = "TrueDepth"
"#,
        )
        .unwrap();
        assert_eq!(config.device.depth_camera.as_deref(), Some("TrueDepth"));
    }
}
