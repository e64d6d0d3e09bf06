// src/error.rs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChaosError {
    #[error("a polygon needs at least 2 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("drawing surface must have a positive size, got {width}x{height}")]
    InvalidSurface { width: f64, height: f64 },
    #[error("multiplier must be within [0, 1], got {0}")]
    InvalidMultiplier(f64),
    #[error("vertex set is empty")]
    EmptyVertexSet,
    #[error("stepper has no vertex set loaded")]
    NotRunning,
}

pub type Result<T> = std::result::Result<T, ChaosError>;
