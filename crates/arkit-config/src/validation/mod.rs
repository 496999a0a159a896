//! Full configuration validation.
//!
//! Validates numeric ranges and name lists. Each check pushes onto a shared
//! error list so one pass reports every problem in a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::ArkitConfig;
use arkit_common::ConfigError;

use helpers::{validate_names, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ArkitConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range_f64(
        &mut errors,
        "heading.filter_degrees",
        config.heading.filter_degrees,
        0.0,
        360.0,
    );
    validate_names(&mut errors, "fonts.available", &config.fonts.available);

    if let Some(camera) = &config.device.depth_camera {
        if camera.trim().is_empty() {
            errors.push("device.depth_camera must not be empty when set".into());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
