//! Map compilation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("matrix row {row} has {got} columns, expected {expected}")]
    RaggedRow { row: usize, got: usize, expected: usize },

    #[error("unknown building type key {0}")]
    UnknownBuildingType(i32),
}

pub type MapResult<T> = Result<T, MapError>;
