//! Error types for the shading pipeline

use thiserror::Error;

/// Result type for shading operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or shading a surface
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Surface kind string is not one of the supported shapes
    #[error("unknown shape kind: {0}")]
    InvalidShapeKind(String),

    /// Shading model string is not one of the supported models
    #[error("unknown shading model: {0}")]
    InvalidShadingModel(String),

    /// Parameter outside its documented domain
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl Error {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
