/// Host camera — the only state the zoom tool mutates.
///
/// `HostCamera` is the seam between the solvers and whatever application
/// owns the live camera. `LookAtCamera` is a passive implementation for
/// hosts (and tests) that do not have their own camera type.

use crate::error::Result;
use crate::geometry::{FovAxis, FovPair, Point3, Vector3};
use super::camera_frame::CameraFrame;

/// Projection mode, supplied per call. Selects the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    /// Perspective projection (frustum is a pyramid)
    Perspective,
    /// Parallel (orthographic) projection (frustum is a box)
    Parallel,
}

/// Live camera owned by the host.
///
/// The zoom tool reads a snapshot through the getters, then performs a
/// single `set` (plus `set_view_height` for parallel cameras) once the
/// placement is known.
pub trait HostCamera {
    /// Eye position, world space.
    fn eye(&self) -> Point3;

    /// Look-at target, world space.
    fn target(&self) -> Point3;

    /// Up vector, world space.
    fn up(&self) -> Vector3;

    /// Replace eye, target and up in one write.
    fn set(&mut self, eye: Point3, target: Point3, up: Vector3);

    /// Set the visible height of a parallel projection.
    fn set_view_height(&mut self, height: f64);

    /// Camera frame derived from eye, target and up.
    fn frame(&self) -> Result<CameraFrame> {
        CameraFrame::from_look_at(self.eye(), self.target(), self.up())
    }
}

/// Passive look-at camera. Stores values, computes nothing except the
/// derived frame and fov pair.
#[derive(Debug, Clone, PartialEq)]
pub struct LookAtCamera {
    eye: Point3,
    target: Point3,
    up: Vector3,
    projection: ProjectionMode,
    fov: f64,
    fov_axis: FovAxis,
    view_height: f64,
}

impl LookAtCamera {
    /// Perspective camera. `fov` in radians, spanning `fov_axis`.
    pub fn perspective(eye: Point3, target: Point3, up: Vector3, fov: f64, fov_axis: FovAxis) -> Self {
        Self {
            eye,
            target,
            up,
            projection: ProjectionMode::Perspective,
            fov,
            fov_axis,
            view_height: 0.0,
        }
    }

    /// Parallel camera showing `view_height` world units vertically.
    pub fn parallel(eye: Point3, target: Point3, up: Vector3, view_height: f64) -> Self {
        Self {
            eye,
            target,
            up,
            projection: ProjectionMode::Parallel,
            fov: std::f64::consts::FRAC_PI_4,
            fov_axis: FovAxis::Height,
            view_height,
        }
    }

    // ===== GETTERS =====

    pub fn projection(&self) -> ProjectionMode {
        self.projection
    }

    /// Stored fov angle, radians.
    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn fov_axis(&self) -> FovAxis {
        self.fov_axis
    }

    pub fn view_height(&self) -> f64 {
        self.view_height
    }

    /// Resolve horizontal and vertical fov for a viewport of the given aspect.
    pub fn fov_pair(&self, aspect: f64) -> Result<FovPair> {
        FovPair::from_camera_fov(self.fov, self.fov_axis, aspect)
    }

    // ===== SETTERS =====

    pub fn set_projection(&mut self, projection: ProjectionMode) {
        self.projection = projection;
    }

    pub fn set_fov(&mut self, fov: f64, fov_axis: FovAxis) {
        self.fov = fov;
        self.fov_axis = fov_axis;
    }
}

impl HostCamera for LookAtCamera {
    fn eye(&self) -> Point3 {
        self.eye
    }

    fn target(&self) -> Point3 {
        self.target
    }

    fn up(&self) -> Vector3 {
        self.up
    }

    fn set(&mut self, eye: Point3, target: Point3, up: Vector3) {
        self.eye = eye;
        self.target = target;
        self.up = up;
    }

    fn set_view_height(&mut self, height: f64) {
        self.view_height = height;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
