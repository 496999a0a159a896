pub mod errors;
pub mod id;
pub mod shape_kind;

pub use errors::{ArkitError, ConfigError, ShapeError};
pub use id::{new_correlation_id, RequestId};
pub use shape_kind::ShapeKind;

pub type Result<T> = std::result::Result<T, ArkitError>;
