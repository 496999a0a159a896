use std::path::PathBuf;

use crate::shape_kind::ShapeKind;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure of a single shape construction call.
///
/// Every variant is local to the call that produced it. No partially built
/// geometry is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("{kind}: missing required parameter '{field}'")]
    MissingParameter {
        kind: ShapeKind,
        field: &'static str,
    },

    #[error("{kind}: parameter '{field}' must be {expected}, got {found}")]
    TypeMismatch {
        kind: ShapeKind,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{kind}: parameter '{field}' is invalid: {reason}")]
    InvalidValue {
        kind: ShapeKind,
        field: &'static str,
        reason: String,
    },

    #[error("{kind}: required device capability is unavailable")]
    CapabilityUnavailable { kind: ShapeKind },

    #[error("unknown shape kind: {0}")]
    UnknownKind(String),
}

impl ShapeError {
    /// Stable machine-readable code for the channel response.
    pub fn code(&self) -> &'static str {
        match self {
            ShapeError::MissingParameter { .. } => "missing_parameter",
            ShapeError::TypeMismatch { .. } => "type_mismatch",
            ShapeError::InvalidValue { .. } => "invalid_value",
            ShapeError::CapabilityUnavailable { .. } => "capability_unavailable",
            ShapeError::UnknownKind(_) => "unknown_kind",
        }
    }

    /// The parameter the error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ShapeError::MissingParameter { field, .. }
            | ShapeError::TypeMismatch { field, .. }
            | ShapeError::InvalidValue { field, .. } => Some(*field),
            ShapeError::CapabilityUnavailable { .. } | ShapeError::UnknownKind(_) => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArkitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
