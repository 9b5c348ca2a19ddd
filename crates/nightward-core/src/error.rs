//! Error type shared by the foundational types in this crate.
//!
//! Per-component errors (map compile failures, spatial errors, ...) live in
//! their own crates; this one only covers config parsing, the one fallible
//! operation `nightward-core` itself exposes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("config value out of range: {field} = {value}")]
    ConfigRange { field: &'static str, value: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
