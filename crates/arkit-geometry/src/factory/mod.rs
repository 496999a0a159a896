//! Shape factory: dispatch from a shape kind to its schema and builder.

mod builders;


use std::sync::Arc;

use arkit_common::{ShapeError, ShapeKind};
use arkit_config::ArkitConfig;

use crate::capability::{CapabilityProbe, DepthDevice, NoDepthCapability, StaticDepthCapability};
use crate::descriptor::GeometryDescriptor;
use crate::fonts::{FontCatalog, FontResolver};
use crate::params::ParameterSet;
use crate::policy::{Dimensions, ValidationPolicy};
use crate::schema::schema_for;

/// Builds [`GeometryDescriptor`]s from a shape kind and its parameters.
///
/// The factory is immutable once built and holds no per-call state, so a
/// single instance can serve concurrent callers behind an `Arc` or a shared
/// reference.
#[derive(Clone)]
pub struct ShapeFactory {
    policy: ValidationPolicy,
    fonts: Arc<dyn FontResolver>,
    capability: Arc<dyn CapabilityProbe>,
}

impl ShapeFactory {
    /// A factory with no installed fonts and no depth camera.
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            fonts: Arc::new(FontCatalog::default()),
            capability: Arc::new(NoDepthCapability),
        }
    }

    /// Build from configuration: policy, installed fonts and device capability.
    pub fn from_config(config: &ArkitConfig) -> Self {
        let factory = Self::new(ValidationPolicy::from_strict_flag(
            config.geometry.strict_dimensions,
        ))
        .with_fonts(FontCatalog::from_config(&config.fonts))
        .with_capability(StaticDepthCapability::from_config(&config.device));

        tracing::debug!(
            policy = ?factory.policy,
            fonts = config.fonts.available.len(),
            depth_camera = config.device.depth_camera.is_some(),
            "shape factory configured"
        );
        factory
    }

    pub fn with_fonts(mut self, fonts: impl FontResolver + 'static) -> Self {
        self.fonts = Arc::new(fonts);
        self
    }

    pub fn with_capability(mut self, capability: impl CapabilityProbe + 'static) -> Self {
        self.capability = Arc::new(capability);
        self
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Construct the geometry for `kind` from `params`.
    ///
    /// Either returns a complete descriptor or an error naming the offending
    /// parameter; nothing is built before every required field has been
    /// found and type-checked.
    pub fn construct(
        &self,
        kind: ShapeKind,
        params: &ParameterSet,
    ) -> Result<GeometryDescriptor, ShapeError> {
        let device = if kind.is_capability_gated() {
            Some(self.depth_device(kind)?)
        } else {
            None
        };

        let checked = schema_for(kind).check(params)?;
        let dims = Dimensions::new(kind, self.policy);

        let descriptor = match (kind, device) {
            (ShapeKind::Sphere, _) => builders::sphere(&checked, dims),
            (ShapeKind::Plane, _) => builders::plane(&checked, dims),
            (ShapeKind::Text, _) => builders::text(&checked, dims, self.fonts.as_ref()),
            (ShapeKind::Box, _) => builders::cuboid(&checked, dims),
            (ShapeKind::Line, _) => builders::line(&checked, dims),
            (ShapeKind::Cylinder, _) => builders::cylinder(&checked, dims),
            (ShapeKind::Cone, _) => builders::cone(&checked, dims),
            (ShapeKind::Pyramid, _) => builders::pyramid(&checked, dims),
            (ShapeKind::Tube, _) => builders::tube(&checked, dims),
            (ShapeKind::Torus, _) => builders::torus(&checked, dims),
            (ShapeKind::Capsule, _) => builders::capsule(&checked, dims),
            (ShapeKind::FaceMesh, Some(device)) => builders::face_mesh(device),
            (ShapeKind::FaceMesh, None) => Err(ShapeError::CapabilityUnavailable { kind }),
        }?;

        tracing::debug!(kind = %kind, "geometry constructed");
        Ok(descriptor)
    }

    /// Construct from a channel shape name such as `"sphere"`.
    pub fn construct_named(
        &self,
        name: &str,
        params: &ParameterSet,
    ) -> Result<GeometryDescriptor, ShapeError> {
        let kind: ShapeKind = name.parse()?;
        self.construct(kind, params)
    }

    fn depth_device(&self, kind: ShapeKind) -> Result<DepthDevice, ShapeError> {
        if !cfg!(feature = "face-mesh") {
            return Err(ShapeError::CapabilityUnavailable { kind });
        }
        self.capability
            .depth_device()
            .ok_or(ShapeError::CapabilityUnavailable { kind })
    }
}

impl Default for ShapeFactory {
    fn default() -> Self {
        Self::new(ValidationPolicy::default())
    }
}

impl std::fmt::Debug for ShapeFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeFactory")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
