//! Core error type.
//!
//! `mr-spatial` wraps `CoreError` as one variant of its own error enum so
//! configuration problems surface unchanged through graph construction.

use thiserror::Error;

/// Errors produced while validating core model parameters.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid traffic profile [{min}, {max}]: need finite 0 < min <= max")]
    InvalidProfile { min: f64, max: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `mr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
