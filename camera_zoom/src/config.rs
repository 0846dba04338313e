//! Zoom configuration.
//!
//! Tunable constants of the zoom tool. Defaults reproduce the behaviour
//! hosts expect; override them through the `with_*` setters.

use crate::camera::PARALLEL_DEPTH_MARGIN;
use crate::error::{Error, Result};

/// Configuration for [`Zoom`](crate::zoom::Zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    /// Fraction of the bounding box height the parallel eye is pulled back
    /// behind the nearest point (default 0.1)
    pub parallel_depth_margin: f64,

    /// Tolerance for the orthonormality check on camera frames. Must be
    /// positive: frames built from a look-at carry rounding error.
    pub frame_tolerance: f64,

    /// Reject non-orthonormal frames with `DegenerateFrame` (default true)
    pub validate_frame: bool,

    /// Distance under which collected scene points count as duplicates
    pub dedup_tolerance: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            parallel_depth_margin: PARALLEL_DEPTH_MARGIN,
            frame_tolerance: 1e-6,
            validate_frame: true,
            dedup_tolerance: 1e-9,
        }
    }
}

impl ZoomConfig {
    pub fn with_parallel_depth_margin(mut self, margin: f64) -> Self {
        self.parallel_depth_margin = margin;
        self
    }

    pub fn with_frame_tolerance(mut self, tolerance: f64) -> Self {
        self.frame_tolerance = tolerance;
        self
    }

    pub fn with_validate_frame(mut self, validate: bool) -> Self {
        self.validate_frame = validate;
        self
    }

    pub fn with_dedup_tolerance(mut self, tolerance: f64) -> Self {
        self.dedup_tolerance = tolerance;
        self
    }

    /// Check every value is finite and non-negative, and the frame
    /// tolerance is strictly positive.
    pub fn validate(&self) -> Result<()> {
        if self.frame_tolerance == 0.0 {
            return Err(Error::InvalidConfig(
                "frame_tolerance must be positive, got 0".to_string(),
            ));
        }
        for (name, value) in [
            ("parallel_depth_margin", self.parallel_depth_margin),
            ("frame_tolerance", self.frame_tolerance),
            ("dedup_tolerance", self.dedup_tolerance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
