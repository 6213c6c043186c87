//! Error types for Ember

use thiserror::Error;

/// The main error type for Ember operations
#[derive(Debug, Error)]
pub enum EmberError {
    #[error("invalid buffer capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    #[error("buffer allocation failed: could not reserve {slots} particle slots")]
    AllocationFailed { slots: usize },

    #[error("invalid lifespan: {0} (must be positive)")]
    InvalidLifespan(f32),

    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: f32, max: f32 },
}

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;
