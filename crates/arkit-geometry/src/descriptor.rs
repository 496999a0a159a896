//! Immutable geometry descriptors handed to the scene graph.
//!
//! A descriptor carries only shape data. The scene-graph collaborator turns
//! it into a drawable primitive and owns it from then on.

use arkit_common::ShapeKind;
use serde::Serialize;

/// Output of a successful construction call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GeometryDescriptor {
    Sphere(SphereGeometry),
    Plane(PlaneGeometry),
    Text(TextGeometry),
    Box(BoxGeometry),
    Line(LineGeometry),
    Cylinder(CylinderGeometry),
    Cone(ConeGeometry),
    Pyramid(PyramidGeometry),
    Tube(TubeGeometry),
    Torus(TorusGeometry),
    Capsule(CapsuleGeometry),
    #[serde(rename = "face")]
    FaceMesh(FaceMeshGeometry),
}

impl GeometryDescriptor {
    /// The shape kind this descriptor was built for.
    pub fn kind(&self) -> ShapeKind {
        match self {
            GeometryDescriptor::Sphere(_) => ShapeKind::Sphere,
            GeometryDescriptor::Plane(_) => ShapeKind::Plane,
            GeometryDescriptor::Text(_) => ShapeKind::Text,
            GeometryDescriptor::Box(_) => ShapeKind::Box,
            GeometryDescriptor::Line(_) => ShapeKind::Line,
            GeometryDescriptor::Cylinder(_) => ShapeKind::Cylinder,
            GeometryDescriptor::Cone(_) => ShapeKind::Cone,
            GeometryDescriptor::Pyramid(_) => ShapeKind::Pyramid,
            GeometryDescriptor::Tube(_) => ShapeKind::Tube,
            GeometryDescriptor::Torus(_) => ShapeKind::Torus,
            GeometryDescriptor::Capsule(_) => ShapeKind::Capsule,
            GeometryDescriptor::FaceMesh(_) => ShapeKind::FaceMesh,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SphereGeometry {
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaneGeometry {
    pub width: f64,
    pub height: f64,
    pub width_segment_count: u32,
    pub height_segment_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextGeometry {
    pub text: String,
    pub extrusion_depth: f64,
    /// Zero unless the request supplied a usable value.
    pub chamfer_radius: f64,
    /// Resolved font name, built at unit point size since text is sized
    /// through the node's scale. `None` means the renderer's default font.
    pub font: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxGeometry {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub chamfer_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CylinderGeometry {
    pub radius: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConeGeometry {
    pub top_radius: f64,
    pub bottom_radius: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PyramidGeometry {
    pub width: f64,
    pub height: f64,
    pub length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TubeGeometry {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TorusGeometry {
    pub ring_radius: f64,
    pub pipe_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapsuleGeometry {
    pub cap_radius: f64,
    pub height: f64,
}

/// Face-tracking mesh bound to the depth camera that will drive it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceMeshGeometry {
    pub device: String,
}

// =============================================================================
// CUSTOM GEOMETRY (line)
// =============================================================================

/// A single vertex of a custom geometry source.
///
/// Layout: position(vec3<f32>) = 12 bytes, matching the renderer's vertex
/// attribute format.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub fn new(position: [f64; 3]) -> Self {
        Self {
            position: position.map(|c| c as f32),
        }
    }
}

/// How an element's indices are grouped into primitives. Each pair of
/// indices is one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Line,
}

/// Vertex buffer of a custom geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometrySource {
    pub vertices: Vec<Vertex>,
}

impl GeometrySource {
    /// Raw vertex bytes, ready for a GPU buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Index buffer plus topology of a custom geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryElement {
    pub indices: Vec<u8>,
    pub primitive: PrimitiveType,
}

/// A straight segment between two points, as a one-primitive custom geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineGeometry {
    pub source: GeometrySource,
    pub element: GeometryElement,
}

impl LineGeometry {
    pub fn between(from: [f64; 3], to: [f64; 3]) -> Self {
        Self {
            source: GeometrySource {
                vertices: vec![Vertex::new(from), Vertex::new(to)],
            },
            element: GeometryElement {
                indices: vec![0, 1],
                primitive: PrimitiveType::Line,
            },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
