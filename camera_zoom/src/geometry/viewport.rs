//! Viewport dimensions as read from the host.

use crate::error::{Error, Result};

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width / height ratio, validated.
    pub fn aspect(&self) -> Result<f64> {
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(Error::InvalidViewport(format!(
                "viewport height {} must be finite and positive",
                self.height
            )));
        }
        validate_aspect(self.width / self.height)
    }
}

/// Check that an aspect ratio (width / height) is finite and positive.
pub fn validate_aspect(aspect: f64) -> Result<f64> {
    if aspect.is_finite() && aspect > 0.0 {
        Ok(aspect)
    } else {
        Err(Error::InvalidViewport(format!(
            "aspect ratio {} must be finite and positive",
            aspect
        )))
    }
}
