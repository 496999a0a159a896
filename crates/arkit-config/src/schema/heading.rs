//! Compass heading stream configuration.

use serde::{Deserialize, Serialize};

/// Heading telemetry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingConfig {
    /// Minimum change in degrees before a new reading is delivered
    /// (valid range: 0.0-360.0). Zero delivers every reading.
    pub filter_degrees: f64,
    /// Let the platform show its compass calibration prompt.
    pub display_calibration: bool,
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            filter_degrees: 1.0,
            display_calibration: true,
        }
    }
}
