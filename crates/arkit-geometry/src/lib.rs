//! Declarative geometry construction.
//!
//! A [`ShapeFactory`] turns a shape kind plus a [`ParameterSet`] decoded from
//! the host channel into an immutable [`GeometryDescriptor`]:
//!
//! ```rust
//! use arkit_geometry::{GeometryDescriptor, ParameterSet, ShapeFactory, ShapeKind};
//!
//! let factory = ShapeFactory::default();
//! let params = ParameterSet::new().with("radius", 0.05);
//! let sphere = factory.construct(ShapeKind::Sphere, &params).unwrap();
//! assert!(matches!(sphere, GeometryDescriptor::Sphere(s) if s.radius == 0.05));
//! ```

pub mod capability;
pub mod descriptor;
pub mod factory;
pub mod fonts;
pub mod params;
pub mod policy;
pub mod schema;

pub use arkit_common::{ShapeError, ShapeKind};
pub use capability::{CapabilityProbe, DepthDevice, NoDepthCapability, StaticDepthCapability};
pub use descriptor::GeometryDescriptor;
pub use factory::ShapeFactory;
pub use fonts::{FontCatalog, FontResolver};
pub use params::{ParamValue, ParameterSet};
pub use policy::ValidationPolicy;
pub use schema::{schema_for, FieldSpec, FieldType, ShapeSchema};
