//! Field of view angles.
//!
//! Angles are full angles in radians. Hosts usually store one authoritative
//! angle (either across the width or across the height of the viewport) and
//! derive the other from the viewport aspect ratio; `FovPair::from_camera_fov`
//! does that derivation. The solvers only ever see a resolved pair.

use std::f64::consts::PI;
use crate::error::{Error, Result};
use super::viewport::validate_aspect;

/// Which viewport axis a camera's stored fov angle spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FovAxis {
    /// The angle spans the viewport width (horizontal fov)
    Width,
    /// The angle spans the viewport height (vertical fov)
    Height,
}

/// Horizontal and vertical field of view, in radians.
///
/// Construction does not validate; the perspective solver calls
/// [`FovPair::validate`] before dividing by the half-angle tangents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovPair {
    pub horizontal: f64,
    pub vertical: f64,
}

impl FovPair {
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self { horizontal, vertical }
    }

    /// Same angle on both axes (square viewport).
    pub const fn uniform(fov: f64) -> Self {
        Self::new(fov, fov)
    }

    /// Resolve both angles from the single angle a camera stores.
    ///
    /// `aspect` is viewport width / height.
    pub fn from_camera_fov(fov: f64, axis: FovAxis, aspect: f64) -> Result<Self> {
        validate_angle("camera", fov)?;
        let aspect = validate_aspect(aspect)?;
        let half_tan = (fov / 2.0).tan();

        let pair = match axis {
            FovAxis::Width => Self::new(fov, 2.0 * (half_tan / aspect).atan()),
            FovAxis::Height => Self::new(2.0 * (half_tan * aspect).atan(), fov),
        };
        Ok(pair)
    }

    /// Check both angles lie in the open interval (0, π).
    pub fn validate(&self) -> Result<()> {
        validate_angle("horizontal", self.horizontal)?;
        validate_angle("vertical", self.vertical)
    }

    /// `(tan(horizontal / 2), tan(vertical / 2))`
    pub fn half_tangents(&self) -> (f64, f64) {
        ((self.horizontal / 2.0).tan(), (self.vertical / 2.0).tan())
    }
}

fn validate_angle(name: &str, angle: f64) -> Result<()> {
    if angle.is_finite() && angle > 0.0 && angle < PI {
        Ok(())
    } else {
        Err(Error::InvalidFov(format!(
            "{} fov {} is outside the open interval (0, π)",
            name, angle
        )))
    }
}

#[cfg(test)]
#[path = "fov_tests.rs"]
mod tests;
