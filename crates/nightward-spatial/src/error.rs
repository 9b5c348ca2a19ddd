//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `nightward-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("quadtree bounds are degenerate: {0:?}")]
    DegenerateBounds(nightward_core::Rect),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
