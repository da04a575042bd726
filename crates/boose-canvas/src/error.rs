//! Error taxonomy for canvas operations.

use thiserror::Error;

/// Why a canvas operation was rejected.
///
/// Every variant is raised before any state changes, so a failed call
/// leaves both the pen and the surface exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// Non-positive size, radius or dimension, or blank text.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A colour channel outside `0..=255`.
    #[error("{channel} channel out of range: {value} (expected 0..=255)")]
    OutOfRange { channel: &'static str, value: i32 },

    /// The raster could not be produced, e.g. the allocation failed.
    #[error("render error: {0}")]
    Render(String),

    /// The target has no raster surface to hand out.
    #[error("surface not initialized")]
    NotInitialized,
}

impl CanvasError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type CanvasResult<T> = Result<T, CanvasError>;
