//! World-level errors.

use nightward_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("invalid world configuration: {0}")]
    InvalidConfig(#[from] CoreError),
}

pub type WorldResult<T> = Result<T, WorldError>;
