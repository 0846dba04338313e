//! Camera frame: eye position plus orthonormal basis.
//!
//! Converts points between world space and camera space. The conversion
//! uses dot products with the basis vectors (the transpose of the basis),
//! so a non-orthonormal frame gives meaningless but finite results for
//! finite input. Use [`CameraFrame::validate`] to reject such frames.

use glam::{DMat4, DVec4};
use crate::error::{Error, Result};
use crate::geometry::{Point3, Vector3};

/// Eye position and camera axes, in world space.
///
/// The basis satisfies `forward = up × right` (x right, y up, z into the
/// view). Mirrored frames still convert correctly; only orthonormality is
/// checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub eye: Point3,
    pub right: Vector3,
    pub up: Vector3,
    pub forward: Vector3,
}

impl CameraFrame {
    pub fn new(eye: Point3, right: Vector3, up: Vector3, forward: Vector3) -> Self {
        Self { eye, right, up, forward }
    }

    /// Build the frame of a camera at `eye` looking at `target`.
    ///
    /// `up` only needs to be roughly up; the returned frame's up vector is
    /// re-orthogonalized against the view direction.
    ///
    /// # Errors
    ///
    /// `DegenerateFrame` if `eye == target` or `up` is parallel to the view
    /// direction.
    pub fn from_look_at(eye: Point3, target: Point3, up: Vector3) -> Result<Self> {
        let forward = (target - eye).normalize_or_zero();
        if forward == Vector3::ZERO {
            return Err(Error::DegenerateFrame(format!(
                "eye {} and target {} coincide",
                eye, target
            )));
        }

        let right = forward.cross(up).normalize_or_zero();
        if right == Vector3::ZERO {
            return Err(Error::DegenerateFrame(format!(
                "up vector {} is parallel to view direction {}",
                up, forward
            )));
        }

        Ok(Self::new(eye, right, right.cross(forward), forward))
    }

    /// Check the basis is orthonormal within `tolerance` and all values finite.
    pub fn validate(&self, tolerance: f64) -> Result<()> {
        if !(self.eye.is_finite()
            && self.right.is_finite()
            && self.up.is_finite()
            && self.forward.is_finite())
        {
            return Err(Error::DegenerateFrame("frame contains non-finite values".to_string()));
        }

        for (name, axis) in [("right", self.right), ("up", self.up), ("forward", self.forward)] {
            let length = axis.length();
            if (length - 1.0).abs() > tolerance {
                return Err(Error::DegenerateFrame(format!(
                    "{} axis has length {}, expected 1",
                    name, length
                )));
            }
        }

        for (names, dot) in [
            ("right/up", self.right.dot(self.up)),
            ("right/forward", self.right.dot(self.forward)),
            ("up/forward", self.up.dot(self.forward)),
        ] {
            if dot.abs() > tolerance {
                return Err(Error::DegenerateFrame(format!(
                    "{} axes are not orthogonal (dot = {})",
                    names, dot
                )));
            }
        }

        Ok(())
    }

    /// Camera-to-world transform (columns: right, up, forward, eye).
    pub fn camera_to_world(&self) -> DMat4 {
        DMat4::from_cols(
            self.right.extend(0.0),
            self.up.extend(0.0),
            self.forward.extend(0.0),
            self.eye.extend(1.0),
        )
    }

    /// World-to-camera transform. Exact inverse of `camera_to_world` for
    /// orthonormal frames.
    pub fn world_to_camera(&self) -> DMat4 {
        let rows = DMat4::from_cols(
            self.right.extend(0.0),
            self.up.extend(0.0),
            self.forward.extend(0.0),
            DVec4::W,
        )
        .transpose();
        rows * DMat4::from_translation(-self.eye)
    }

    /// Express a world-space point in camera space.
    pub fn point_to_camera(&self, point: Point3) -> Point3 {
        let offset = point - self.eye;
        Point3::new(offset.dot(self.right), offset.dot(self.up), offset.dot(self.forward))
    }

    /// Express a camera-space point in world space.
    pub fn point_to_world(&self, point: Point3) -> Point3 {
        self.eye + self.right * point.x + self.up * point.y + self.forward * point.z
    }
}

/// Re-express world-space points in the frame's camera space. Order and
/// count are preserved.
pub fn to_camera_space(points: &[Point3], frame: &CameraFrame) -> Vec<Point3> {
    points.iter().map(|p| frame.point_to_camera(*p)).collect()
}

/// Inverse of [`to_camera_space`].
pub fn to_world_space(points: &[Point3], frame: &CameraFrame) -> Vec<Point3> {
    points.iter().map(|p| frame.point_to_world(*p)).collect()
}

#[cfg(test)]
#[path = "camera_frame_tests.rs"]
mod tests;
