//! Dimension checks applied by the builders.

use arkit_common::{ShapeError, ShapeKind};
use serde::{Deserialize, Serialize};

/// How strictly builders check dimension values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Reject non-finite values, non-positive sizes and inverted tubes.
    #[default]
    Strict,
    /// Accept any well-typed value and build whatever geometry results.
    Permissive,
}

impl ValidationPolicy {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            ValidationPolicy::Strict
        } else {
            ValidationPolicy::Permissive
        }
    }

    pub fn is_strict(self) -> bool {
        self == ValidationPolicy::Strict
    }
}

/// Per-call dimension checker bound to a shape kind and policy.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Dimensions {
    kind: ShapeKind,
    policy: ValidationPolicy,
}

impl Dimensions {
    pub(crate) fn new(kind: ShapeKind, policy: ValidationPolicy) -> Self {
        Self { kind, policy }
    }

    pub(crate) fn is_strict(&self) -> bool {
        self.policy.is_strict()
    }

    pub(crate) fn invalid(&self, field: &'static str, reason: String) -> ShapeError {
        ShapeError::InvalidValue {
            kind: self.kind,
            field,
            reason,
        }
    }

    /// A size that must be greater than zero. Checked only when strict.
    pub(crate) fn positive(&self, field: &'static str, value: f64) -> Result<f64, ShapeError> {
        if self.is_strict() {
            self.require_positive(field, value)
        } else {
            Ok(value)
        }
    }

    /// A size that may be zero but not negative. Checked only when strict.
    pub(crate) fn non_negative(&self, field: &'static str, value: f64) -> Result<f64, ShapeError> {
        if !self.is_strict() {
            return Ok(value);
        }
        self.require_finite(field, value)?;
        if value < 0.0 {
            return Err(self.invalid(field, format!("must not be negative, got {value}")));
        }
        Ok(value)
    }

    /// A size that must be greater than zero under every policy.
    pub(crate) fn require_positive(
        &self,
        field: &'static str,
        value: f64,
    ) -> Result<f64, ShapeError> {
        self.require_finite(field, value)?;
        if value <= 0.0 {
            return Err(self.invalid(field, format!("must be greater than 0, got {value}")));
        }
        Ok(value)
    }

    /// A point stored in the f32 vertex buffer. Checked only when strict.
    pub(crate) fn vertex(&self, field: &'static str, point: [f64; 3]) -> Result<[f64; 3], ShapeError> {
        if !self.is_strict() {
            return Ok(point);
        }
        match point.iter().find(|c| !(**c as f32).is_finite()) {
            Some(c) => Err(self.invalid(
                field,
                format!("coordinate {c} is outside the vertex range"),
            )),
            None => Ok(point),
        }
    }

    fn require_finite(&self, field: &'static str, value: f64) -> Result<(), ShapeError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(self.invalid(field, format!("must be finite, got {value}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_strict() {
        assert_eq!(ValidationPolicy::default(), ValidationPolicy::Strict);
        assert_eq!(
            ValidationPolicy::from_strict_flag(false),
            ValidationPolicy::Permissive
        );
    }

    #[test]
    fn strict_rejects_zero_and_negative_sizes() {
        let dims = Dimensions::new(ShapeKind::Box, ValidationPolicy::Strict);
        assert!(dims.positive("width", 0.0).is_err());
        assert!(dims.positive("width", -1.0).is_err());
        assert_eq!(dims.positive("width", 0.5).unwrap(), 0.5);
        assert_eq!(dims.non_negative("chamferRadius", 0.0).unwrap(), 0.0);
        assert!(dims.non_negative("chamferRadius", -0.1).is_err());
    }

    #[test]
    fn strict_rejects_non_finite() {
        let dims = Dimensions::new(ShapeKind::Box, ValidationPolicy::Strict);
        let err = dims.positive("width", f64::INFINITY).unwrap_err();
        assert!(err.to_string().contains("must be finite"));
        assert!(dims.non_negative("width", f64::NAN).is_err());
    }

    #[test]
    fn permissive_passes_values_through() {
        let dims = Dimensions::new(ShapeKind::Box, ValidationPolicy::Permissive);
        assert_eq!(dims.positive("width", -2.0).unwrap(), -2.0);
        assert_eq!(dims.non_negative("chamferRadius", -1.0).unwrap(), -1.0);
    }

    #[test]
    fn vertex_must_fit_f32_when_strict() {
        let strict = Dimensions::new(ShapeKind::Line, ValidationPolicy::Strict);
        let err = strict.vertex("toVector", [1e39, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, ShapeError::InvalidValue { field: "toVector", .. }));
        assert!(strict.vertex("toVector", [1.0, 2.0, 3.0]).is_ok());

        let permissive = Dimensions::new(ShapeKind::Line, ValidationPolicy::Permissive);
        assert_eq!(
            permissive.vertex("toVector", [1e39, 0.0, 0.0]).unwrap(),
            [1e39, 0.0, 0.0]
        );
    }

    #[test]
    fn require_positive_ignores_policy() {
        let dims = Dimensions::new(ShapeKind::Sphere, ValidationPolicy::Permissive);
        let err = dims.require_positive("radius", 0.0).unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidValue {
                kind: ShapeKind::Sphere,
                field: "radius",
                reason: "must be greater than 0, got 0".into(),
            }
        );
    }
}
