//! Parallel (orthographic) placement solver.
//!
//! The eye goes to the center of the camera-space bounding box, pulled back
//! behind the nearest point by a fraction of the box height so the host's
//! near plane does not clip it. The view height is the larger of the box
//! height and the box width converted to a height through the viewport
//! aspect ratio.

use crate::error::{Error, Result};
use crate::geometry::{validate_aspect, BoundingBox, Point3};

/// Fraction of the bounding box height the eye is pulled back behind the
/// nearest point.
pub const PARALLEL_DEPTH_MARGIN: f64 = 0.1;

/// Result of the parallel solver, camera space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelPlacement {
    /// New eye position
    pub eye: Point3,
    /// Visible height the parallel projection needs
    pub view_height: f64,
}

/// Solve the parallel placement with the default depth margin.
///
/// Returns `None` for an empty point set.
pub fn solve_parallel_eye(points: &[Point3], viewport_aspect: f64) -> Result<Option<ParallelPlacement>> {
    solve_parallel_eye_with_margin(points, viewport_aspect, PARALLEL_DEPTH_MARGIN)
}

/// Solve the parallel placement, pulling the eye back by
/// `depth_margin · box height`.
///
/// # Errors
///
/// - `InvalidViewport` if the aspect is not finite and positive
/// - `NonFiniteResult` if the points contain non-finite coordinates
pub fn solve_parallel_eye_with_margin(
    points: &[Point3],
    viewport_aspect: f64,
    depth_margin: f64,
) -> Result<Option<ParallelPlacement>> {
    let aspect = validate_aspect(viewport_aspect)?;

    let Some(bb) = BoundingBox::from_points(points) else {
        crate::zoom_debug!("zoom::parallel", "No points, keeping current camera");
        return Ok(None);
    };

    let mut eye = bb.center();
    eye.z = bb.min.z - bb.height() * depth_margin;
    let view_height = bb.height().max(bb.width() / aspect);

    if !eye.is_finite() || !view_height.is_finite() {
        return Err(Error::NonFiniteResult(format!(
            "parallel eye {} / view height {} from box {:?}",
            eye, view_height, bb
        )));
    }

    crate::zoom_debug!(
        "zoom::parallel",
        "Solved camera-space eye {}, view height {}",
        eye,
        view_height
    );

    Ok(Some(ParallelPlacement { eye, view_height }))
}

#[cfg(test)]
#[path = "parallel_tests.rs"]
mod tests;
