//! Spatial-subsystem error type.

use thiserror::Error;

use mr_core::CoreError;

/// Errors produced by `mr-spatial`.
///
/// An unreachable destination is not an error: routing returns
/// [`Route::unreachable`](crate::Route::unreachable) instead.
#[derive(Debug, Error, PartialEq)]
pub enum SpatialError {
    #[error("node {0:?} not found in network")]
    UnknownNode(String),

    #[error("edge from {0:?} to itself")]
    SelfLoop(String),

    #[error("invalid cost {cost} for edge {origin:?} - {destination:?}")]
    InvalidCost { origin: String, destination: String, cost: f64 },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
