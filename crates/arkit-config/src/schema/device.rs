//! Host device capability configuration.

use serde::{Deserialize, Serialize};

/// Hardware the host reports as present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Name of the depth-sensing camera, if the host has one. Face mesh
    /// geometry can only be built when this is set.
    pub depth_camera: Option<String>,
}
