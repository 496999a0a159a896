//! Per-kind parameter schemas.
//!
//! Each [`ShapeKind`] has a fixed list of required and optional fields.
//! [`ShapeSchema::check`] types a [`ParameterSet`] against that list before
//! any builder runs, so builders only ever see values of the right type.

use std::collections::BTreeMap;

use arkit_common::{ShapeError, ShapeKind};
use serde::Serialize;
use tracing::debug;

use crate::params::{ParamValue, ParameterSet};

/// Semantic type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Any number.
    Number,
    /// An integral number of at least 1.
    Count,
    /// A string.
    Text,
    /// Exactly three numbers.
    Vector3,
}

impl FieldType {
    /// What the field expects, for error messages.
    pub fn expected(self) -> &'static str {
        match self {
            FieldType::Number => "a number",
            FieldType::Count => "an integer",
            FieldType::Text => "a string",
            FieldType::Vector3 => "a sequence of 3 numbers",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: FieldType,
}

const fn number(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        ty: FieldType::Number,
    }
}

const fn count(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        ty: FieldType::Count,
    }
}

const fn text(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        ty: FieldType::Text,
    }
}

const fn vector3(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        ty: FieldType::Vector3,
    }
}

/// Required and optional fields of one shape kind.
#[derive(Debug, Serialize)]
pub struct ShapeSchema {
    pub kind: ShapeKind,
    pub required: &'static [FieldSpec],
    pub optional: &'static [FieldSpec],
}

static SPHERE: ShapeSchema = ShapeSchema {
    kind: ShapeKind::Sphere,
    required: &[number("radius")],
    optional: &[],
};

static PLANE: ShapeSchema = ShapeSchema {
    kind: ShapeKind::Plane,
    required: &[
        number("width"),
        number("height"),
        count("widthSegmentCount"),
        count("heightSegmentCount"),
    ],
    optional: &[],
};

static TEXT: ShapeSchema = ShapeSchema {
    kind: ShapeKind::Text,
    required: &[number("extrusionDepth"), text("text")],
    optional: &[number("chamferRadius"), text("fontName")],
};

static BOX: ShapeSchema = ShapeSchema {
    kind: ShapeKind::Box,
    required: &[
        number("width"),
        number("height"),
        number("length"),
        number("chamferRadius"),
    ],
    optional: &[],
};

static LINE: ShapeSchema = ShapeSchema {
    kind: ShapeKind::Line,
    required: &[vector3("fromVector"), vector3("toVector")],
    optional: &[],
};

static CYLINDER: ShapeSchema = ShapeSchema {
    kind: ShapeKind::Cylinder,
    required: &[number("radius"), number("height")],
    optional: &[],
};

static CONE: ShapeSchema = ShapeSchema {
    kind: ShapeKind::Cone,
    required: &[
        number("topRadius"),
        number("bottomRadius"),
        number("height"),
    ],
    optional: &[],
};

static PYRAMID: ShapeSchema = ShapeSchema {
    kind: ShapeKind::Pyramid,
    required: &[number("width"), number("height"), number("length")],
    optional: &[],
};

static TUBE: ShapeSchema = ShapeSchema {
    kind: ShapeKind::Tube,
    required: &[
        number("innerRadius"),
        number("outerRadius"),
        number("height"),
    ],
    optional: &[],
};

static TORUS: ShapeSchema = ShapeSchema {
    kind: ShapeKind::Torus,
    required: &[number("ringRadius"), number("pipeRadius")],
    optional: &[],
};

static CAPSULE: ShapeSchema = ShapeSchema {
    kind: ShapeKind::Capsule,
    required: &[number("capRadius"), number("height")],
    optional: &[],
};

// The face mesh takes no arguments; its only input is the depth device,
// which comes from the capability probe rather than the channel.
static FACE_MESH: ShapeSchema = ShapeSchema {
    kind: ShapeKind::FaceMesh,
    required: &[],
    optional: &[],
};

/// Look up the schema for a shape kind.
pub fn schema_for(kind: ShapeKind) -> &'static ShapeSchema {
    match kind {
        ShapeKind::Sphere => &SPHERE,
        ShapeKind::Plane => &PLANE,
        ShapeKind::Text => &TEXT,
        ShapeKind::Box => &BOX,
        ShapeKind::Line => &LINE,
        ShapeKind::Cylinder => &CYLINDER,
        ShapeKind::Cone => &CONE,
        ShapeKind::Pyramid => &PYRAMID,
        ShapeKind::Tube => &TUBE,
        ShapeKind::Torus => &TORUS,
        ShapeKind::Capsule => &CAPSULE,
        ShapeKind::FaceMesh => &FACE_MESH,
    }
}

/// A parameter value that has passed its schema type check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Checked<'a> {
    Number(f64),
    Count(u32),
    Text(&'a str),
    Vector3([f64; 3]),
}

/// Parameters of one call, typed against the kind's schema.
///
/// Holds every required field and whichever optional fields were present
/// and well-typed.
#[derive(Debug)]
pub struct CheckedParams<'a> {
    kind: ShapeKind,
    values: BTreeMap<&'static str, Checked<'a>>,
}

impl ShapeSchema {
    /// Type every field of `params` against this schema.
    ///
    /// Required fields are checked in table order and the first absent or
    /// ill-typed one fails the call. Optional fields that are ill-typed are
    /// dropped. Names outside the schema are ignored.
    pub fn check<'a>(&self, params: &'a ParameterSet) -> Result<CheckedParams<'a>, ShapeError> {
        let mut values = BTreeMap::new();

        for spec in self.required {
            let value = params.get(spec.name).ok_or(ShapeError::MissingParameter {
                kind: self.kind,
                field: spec.name,
            })?;
            values.insert(spec.name, check_field(self.kind, spec, value)?);
        }

        for spec in self.optional {
            let Some(value) = params.get(spec.name) else {
                continue;
            };
            match check_field(self.kind, spec, value) {
                Ok(checked) => {
                    values.insert(spec.name, checked);
                }
                Err(e) => {
                    debug!(kind = %self.kind, field = spec.name, "skipping optional parameter: {e}");
                }
            }
        }

        for name in params.names() {
            if !self.declares(name) {
                debug!(kind = %self.kind, field = name, "ignoring undeclared parameter");
            }
        }

        Ok(CheckedParams {
            kind: self.kind,
            values,
        })
    }

    /// Whether `name` is one of this schema's fields.
    pub fn declares(&self, name: &str) -> bool {
        self.required
            .iter()
            .chain(self.optional)
            .any(|spec| spec.name == name)
    }
}

fn check_field<'a>(
    kind: ShapeKind,
    spec: &FieldSpec,
    value: &'a ParamValue,
) -> Result<Checked<'a>, ShapeError> {
    let mismatch = |found: &'static str| ShapeError::TypeMismatch {
        kind,
        field: spec.name,
        expected: spec.ty.expected(),
        found,
    };

    match (spec.ty, value) {
        (FieldType::Number, ParamValue::Number(n)) => Ok(Checked::Number(*n)),
        (FieldType::Count, ParamValue::Number(n)) => {
            if !n.is_finite() || n.fract() != 0.0 {
                return Err(mismatch("a fractional number"));
            }
            if *n < 1.0 {
                return Err(ShapeError::InvalidValue {
                    kind,
                    field: spec.name,
                    reason: format!("must be at least 1, got {n}"),
                });
            }
            if *n > f64::from(u32::MAX) {
                return Err(ShapeError::InvalidValue {
                    kind,
                    field: spec.name,
                    reason: format!("must be at most {}, got {n}", u32::MAX),
                });
            }
            Ok(Checked::Count(*n as u32))
        }
        (FieldType::Text, ParamValue::Text(s)) => Ok(Checked::Text(s.as_str())),
        (FieldType::Vector3, ParamValue::Numbers(v)) => match v.as_slice() {
            [x, y, z] => Ok(Checked::Vector3([*x, *y, *z])),
            _ => Err(mismatch("a sequence of the wrong length")),
        },
        (_, other) => Err(mismatch(other.type_name())),
    }
}

impl<'a> CheckedParams<'a> {
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    fn required(&self, field: &'static str) -> Result<Checked<'a>, ShapeError> {
        self.values
            .get(field)
            .copied()
            .ok_or(ShapeError::MissingParameter {
                kind: self.kind,
                field,
            })
    }

    fn wrong_type(&self, field: &'static str, expected: FieldType) -> ShapeError {
        ShapeError::TypeMismatch {
            kind: self.kind,
            field,
            expected: expected.expected(),
            found: "a value of another schema type",
        }
    }

    pub fn number(&self, field: &'static str) -> Result<f64, ShapeError> {
        match self.required(field)? {
            Checked::Number(n) => Ok(n),
            _ => Err(self.wrong_type(field, FieldType::Number)),
        }
    }

    pub fn count(&self, field: &'static str) -> Result<u32, ShapeError> {
        match self.required(field)? {
            Checked::Count(n) => Ok(n),
            _ => Err(self.wrong_type(field, FieldType::Count)),
        }
    }

    pub fn text(&self, field: &'static str) -> Result<&'a str, ShapeError> {
        match self.required(field)? {
            Checked::Text(s) => Ok(s),
            _ => Err(self.wrong_type(field, FieldType::Text)),
        }
    }

    pub fn vector3(&self, field: &'static str) -> Result<[f64; 3], ShapeError> {
        match self.required(field)? {
            Checked::Vector3(v) => Ok(v),
            _ => Err(self.wrong_type(field, FieldType::Vector3)),
        }
    }

    pub fn optional_number(&self, field: &'static str) -> Option<f64> {
        match self.values.get(field) {
            Some(Checked::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn optional_text(&self, field: &'static str) -> Option<&'a str> {
        match self.values.get(field) {
            Some(Checked::Text(s)) => Some(*s),
            _ => None,
        }
    }
}
