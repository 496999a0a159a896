//! Default TOML config template with inline documentation comments.

/// Default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# arkit-bridge configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[geometry]
# Reject degenerate shapes (zero radii, tubes with outer <= inner radius).
# strict_dimensions = true

[fonts]
# PostScript names the host can resolve for text geometry.
# Unknown names fall back to the default font.
# available = ["Helvetica", "Helvetica-Bold", "Menlo-Regular"]

[device]
# Set when the host has a depth-sensing camera; enables face mesh geometry.
# depth_camera = "TrueDepth"

[heading]
# filter_degrees = 1.0       # 0.0-360.0
# display_calibration = true

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
}
