//! Error types for camera zoom
//!
//! This module defines the error types returned by the framing solvers,
//! the camera frame adapter and the `Zoom` facade.
//!
//! Empty point sets are not errors: they surface as `ZoomOutcome::Unchanged`.

use std::fmt;

/// Result type for camera zoom operations
pub type Result<T> = std::result::Result<T, Error>;

/// Camera zoom errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Field of view angle outside the open interval (0, π)
    InvalidFov(String),

    /// Camera frame basis is not orthonormal (or not finite)
    DegenerateFrame(String),

    /// Viewport aspect ratio is not a finite positive number
    InvalidViewport(String),

    /// A solver produced NaN or infinite coordinates
    NonFiniteResult(String),

    /// A `ZoomConfig` value is out of range
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFov(msg) => write!(f, "Invalid field of view: {}", msg),
            Error::DegenerateFrame(msg) => write!(f, "Degenerate camera frame: {}", msg),
            Error::InvalidViewport(msg) => write!(f, "Invalid viewport: {}", msg),
            Error::NonFiniteResult(msg) => write!(f, "Non-finite result: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
