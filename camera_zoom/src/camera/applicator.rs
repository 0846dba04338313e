//! Camera applicator — writes a solved eye back to the host camera.
//!
//! The camera is translated, never rotated: eye and target move by the same
//! offset and the up vector is kept, so view direction and roll are
//! preserved exactly.

use crate::geometry::Point3;
use super::camera::HostCamera;
use super::camera_frame::CameraFrame;
use super::parallel::ParallelPlacement;

/// Move the camera so its eye lands on `eye` (camera space of `frame`).
///
/// Returns the new world-space eye.
pub fn apply_eye<C: HostCamera + ?Sized>(camera: &mut C, eye: Point3, frame: &CameraFrame) -> Point3 {
    let new_eye = frame.point_to_world(eye);
    let offset = new_eye - camera.eye();
    let target = camera.target() + offset;
    let up = camera.up();

    camera.set(new_eye, target, up);

    crate::zoom_info!("zoom::applicator", "Camera moved to {} (offset {})", new_eye, offset);
    new_eye
}

/// Apply a parallel placement: move the eye, then set the view height.
///
/// Returns the new world-space eye.
pub fn apply_parallel<C: HostCamera + ?Sized>(
    camera: &mut C,
    placement: &ParallelPlacement,
    frame: &CameraFrame,
) -> Point3 {
    let new_eye = apply_eye(camera, placement.eye, frame);
    camera.set_view_height(placement.view_height);
    new_eye
}

#[cfg(test)]
#[path = "applicator_tests.rs"]
mod tests;
