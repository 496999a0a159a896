use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ShapeError;

/// Discriminator selecting which geometry builder handles a construction call.
///
/// Each kind has a stable channel name, the string the host sends over the
/// plugin channel. `FaceMesh` is only constructible on hosts that expose a
/// depth-sensing camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Sphere,
    Plane,
    Text,
    Box,
    Line,
    Cylinder,
    Cone,
    Pyramid,
    Tube,
    Torus,
    Capsule,
    #[serde(rename = "face")]
    FaceMesh,
}

impl ShapeKind {
    /// Every kind, in dispatch-table order.
    pub const ALL: [ShapeKind; 12] = [
        ShapeKind::Sphere,
        ShapeKind::Plane,
        ShapeKind::Text,
        ShapeKind::Box,
        ShapeKind::Line,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Pyramid,
        ShapeKind::Tube,
        ShapeKind::Torus,
        ShapeKind::Capsule,
        ShapeKind::FaceMesh,
    ];

    /// Name used on the plugin channel.
    pub fn channel_name(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Plane => "plane",
            ShapeKind::Text => "text",
            ShapeKind::Box => "box",
            ShapeKind::Line => "line",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Cone => "cone",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Tube => "tube",
            ShapeKind::Torus => "torus",
            ShapeKind::Capsule => "capsule",
            ShapeKind::FaceMesh => "face",
        }
    }

    /// Whether construction depends on a runtime hardware capability.
    pub fn is_capability_gated(self) -> bool {
        matches!(self, ShapeKind::FaceMesh)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.channel_name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.channel_name() == s)
            .ok_or_else(|| ShapeError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_names_parse_back() {
        for kind in ShapeKind::ALL {
            let parsed: ShapeKind = kind.channel_name().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "dodecahedron".parse::<ShapeKind>().unwrap_err();
        assert!(matches!(err, ShapeError::UnknownKind(ref name) if name == "dodecahedron"));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("Sphere".parse::<ShapeKind>().is_err());
        assert!("BOX".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn serde_uses_channel_names() {
        let json = serde_json::to_string(&ShapeKind::FaceMesh).unwrap();
        assert_eq!(json, "\"face\"");

        let kind: ShapeKind = serde_json::from_str("\"capsule\"").unwrap();
        assert_eq!(kind, ShapeKind::Capsule);
    }

    #[test]
    fn only_face_mesh_is_gated() {
        let gated: Vec<_> = ShapeKind::ALL
            .into_iter()
            .filter(|k| k.is_capability_gated())
            .collect();
        assert_eq!(gated, vec![ShapeKind::FaceMesh]);
    }

    #[test]
    fn display_matches_channel_name() {
        assert_eq!(ShapeKind::Torus.to_string(), "torus");
        assert_eq!(ShapeKind::FaceMesh.to_string(), "face");
    }
}
