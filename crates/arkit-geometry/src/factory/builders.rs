//! One builder per shape kind.
//!
//! Builders receive parameters that already passed the schema type check.
//! They apply the dimension policy and assemble the descriptor; none of them
//! keeps state between calls.

use arkit_common::ShapeError;
use tracing::debug;

use crate::capability::DepthDevice;
use crate::descriptor::*;
use crate::fonts::FontResolver;
use crate::policy::Dimensions;
use crate::schema::CheckedParams;

type Built = Result<GeometryDescriptor, ShapeError>;

pub(super) fn sphere(p: &CheckedParams<'_>, dims: Dimensions) -> Built {
    let radius = dims.require_positive("radius", p.number("radius")?)?;
    Ok(GeometryDescriptor::Sphere(SphereGeometry { radius }))
}

pub(super) fn plane(p: &CheckedParams<'_>, dims: Dimensions) -> Built {
    Ok(GeometryDescriptor::Plane(PlaneGeometry {
        width: dims.positive("width", p.number("width")?)?,
        height: dims.positive("height", p.number("height")?)?,
        width_segment_count: p.count("widthSegmentCount")?,
        height_segment_count: p.count("heightSegmentCount")?,
    }))
}

pub(super) fn text(p: &CheckedParams<'_>, dims: Dimensions, fonts: &dyn FontResolver) -> Built {
    let extrusion_depth = dims.non_negative("extrusionDepth", p.number("extrusionDepth")?)?;
    let text = p.text("text")?.to_string();

    let chamfer_radius = match p.optional_number("chamferRadius") {
        Some(r) if dims.is_strict() && !(r.is_finite() && r >= 0.0) => {
            debug!(chamfer_radius = r, "ignoring unusable text chamferRadius");
            0.0
        }
        Some(r) => r,
        None => 0.0,
    };

    let font = p.optional_text("fontName").and_then(|name| {
        let resolved = fonts.resolve(name);
        if resolved.is_none() {
            debug!(font = name, "font not available, using default");
        }
        resolved
    });

    Ok(GeometryDescriptor::Text(TextGeometry {
        text,
        extrusion_depth,
        chamfer_radius,
        font,
    }))
}

pub(super) fn cuboid(p: &CheckedParams<'_>, dims: Dimensions) -> Built {
    Ok(GeometryDescriptor::Box(BoxGeometry {
        width: dims.positive("width", p.number("width")?)?,
        height: dims.positive("height", p.number("height")?)?,
        length: dims.positive("length", p.number("length")?)?,
        chamfer_radius: dims.non_negative("chamferRadius", p.number("chamferRadius")?)?,
    }))
}

pub(super) fn line(p: &CheckedParams<'_>, dims: Dimensions) -> Built {
    let from = dims.vertex("fromVector", p.vector3("fromVector")?)?;
    let to = dims.vertex("toVector", p.vector3("toVector")?)?;
    Ok(GeometryDescriptor::Line(LineGeometry::between(from, to)))
}

pub(super) fn cylinder(p: &CheckedParams<'_>, dims: Dimensions) -> Built {
    Ok(GeometryDescriptor::Cylinder(CylinderGeometry {
        radius: dims.positive("radius", p.number("radius")?)?,
        height: dims.positive("height", p.number("height")?)?,
    }))
}

pub(super) fn cone(p: &CheckedParams<'_>, dims: Dimensions) -> Built {
    let top_radius = dims.non_negative("topRadius", p.number("topRadius")?)?;
    let bottom_radius = dims.non_negative("bottomRadius", p.number("bottomRadius")?)?;
    let height = dims.positive("height", p.number("height")?)?;

    if dims.is_strict() && top_radius == 0.0 && bottom_radius == 0.0 {
        return Err(dims.invalid(
            "bottomRadius",
            "topRadius and bottomRadius cannot both be 0".into(),
        ));
    }

    Ok(GeometryDescriptor::Cone(ConeGeometry {
        top_radius,
        bottom_radius,
        height,
    }))
}

pub(super) fn pyramid(p: &CheckedParams<'_>, dims: Dimensions) -> Built {
    Ok(GeometryDescriptor::Pyramid(PyramidGeometry {
        width: dims.positive("width", p.number("width")?)?,
        height: dims.positive("height", p.number("height")?)?,
        length: dims.positive("length", p.number("length")?)?,
    }))
}

pub(super) fn tube(p: &CheckedParams<'_>, dims: Dimensions) -> Built {
    let inner_radius = dims.non_negative("innerRadius", p.number("innerRadius")?)?;
    let outer_radius = dims.positive("outerRadius", p.number("outerRadius")?)?;
    let height = dims.positive("height", p.number("height")?)?;

    if dims.is_strict() && outer_radius <= inner_radius {
        return Err(dims.invalid(
            "outerRadius",
            format!("must be greater than innerRadius ({inner_radius}), got {outer_radius}"),
        ));
    }

    Ok(GeometryDescriptor::Tube(TubeGeometry {
        inner_radius,
        outer_radius,
        height,
    }))
}

pub(super) fn torus(p: &CheckedParams<'_>, dims: Dimensions) -> Built {
    Ok(GeometryDescriptor::Torus(TorusGeometry {
        ring_radius: dims.positive("ringRadius", p.number("ringRadius")?)?,
        pipe_radius: dims.positive("pipeRadius", p.number("pipeRadius")?)?,
    }))
}

pub(super) fn capsule(p: &CheckedParams<'_>, dims: Dimensions) -> Built {
    Ok(GeometryDescriptor::Capsule(CapsuleGeometry {
        cap_radius: dims.positive("capRadius", p.number("capRadius")?)?,
        height: dims.positive("height", p.number("height")?)?,
    }))
}

pub(super) fn face_mesh(device: DepthDevice) -> Built {
    Ok(GeometryDescriptor::FaceMesh(FaceMeshGeometry {
        device: device.name().to_string(),
    }))
}
