//! Error types for polygon sequence generation.

use thiserror::Error;

/// Errors returned by the generator and the paint pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// An input lies outside its accepted bounds.
    #[error("invalid parameter `{name}`: {value} is outside {bounds}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        bounds: &'static str,
    },
}

impl GenerationError {
    pub(crate) fn invalid(
        name: &'static str,
        value: impl Into<f64>,
        bounds: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
            bounds,
        }
    }

    /// Name of the rejected parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => name,
        }
    }
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerationError>;
