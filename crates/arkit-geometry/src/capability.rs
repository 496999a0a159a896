//! Runtime device capability queries.
//!
//! Face mesh geometry needs a depth-sensing camera. Whether one exists is
//! decided by the host at runtime, so the factory asks a [`CapabilityProbe`]
//! at dispatch time instead of assuming.

use arkit_config::schema::DeviceConfig;

/// Handle to a depth-sensing camera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthDevice {
    name: String,
}

impl DepthDevice {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Reports which optional hardware the host exposes.
pub trait CapabilityProbe: Send + Sync {
    fn depth_device(&self) -> Option<DepthDevice>;
}

/// Host without depth sensing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDepthCapability;

impl CapabilityProbe for NoDepthCapability {
    fn depth_device(&self) -> Option<DepthDevice> {
        None
    }
}

/// Capability fixed at startup, e.g. from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticDepthCapability {
    device: Option<DepthDevice>,
}

impl StaticDepthCapability {
    pub fn new(device: Option<DepthDevice>) -> Self {
        Self { device }
    }

    pub fn from_config(config: &DeviceConfig) -> Self {
        Self::new(config.depth_camera.as_deref().map(DepthDevice::new))
    }
}

impl CapabilityProbe for StaticDepthCapability {
    fn depth_device(&self) -> Option<DepthDevice> {
        self.device.clone()
    }
}
