//! Shape factory configuration types.

use serde::{Deserialize, Serialize};

/// Shape construction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Reject degenerate dimensions (non-positive radii, tubes whose outer
    /// radius does not exceed the inner one). When false, only presence and
    /// type of parameters are checked.
    pub strict_dimensions: bool,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            strict_dimensions: true,
        }
    }
}
