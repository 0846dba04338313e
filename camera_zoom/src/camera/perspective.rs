//! Perspective placement solver.
//!
//! Per axis, the two frustum edges through the unknown eye `(e, ez)` must
//! pass through the two extremes `A` (left/top) and `B` (right/bottom):
//!
//! ```text
//! m0 = a_A − k·z_A = e − k·ez
//! m1 = a_B + k·z_B = e + k·ez
//!
//! ez = (m1 − m0) / 2k
//! e  = k·ez + m0
//! ```
//!
//! with `k = tan(fov/2)`. The axes are solved independently and share the
//! depth coordinate: the eye takes the smaller (farther back) of the two
//! depths so neither axis clips.

use crate::error::{Error, Result};
use crate::geometry::{FovPair, Point3};
use super::extremes::Extremes;

/// Eye position on one axis/depth plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSolution {
    /// Eye coordinate along the axis (x or y)
    pub coord: f64,
    /// Eye depth (z)
    pub depth: f64,
}

/// Solve the eye position for one axis.
///
/// `a` and `b` are `(coordinate, depth)` of the extreme binding the positive
/// edge and the negative edge respectively. `k` is `tan(fov/2)` and must be
/// finite and non-zero.
pub fn solve_axis(a: (f64, f64), b: (f64, f64), k: f64) -> AxisSolution {
    let m0 = a.0 - k * a.1;
    let m1 = b.0 + k * b.1;
    let depth = (m1 - m0) / (2.0 * k);

    AxisSolution {
        coord: k * depth + m0,
        depth,
    }
}

/// Camera-space eye position whose frustum is tangent to all four extremes.
///
/// Returns the current eye (the camera-space origin) when there are no
/// extremes, i.e. the point set was empty.
///
/// # Errors
///
/// - `InvalidFov` if either angle is outside (0, π)
/// - `NonFiniteResult` if the extremes contain non-finite coordinates
pub fn solve_perspective_eye(extremes: &Extremes, fov: &FovPair) -> Result<Point3> {
    fov.validate()?;
    let (kh, kv) = fov.half_tangents();

    let (Some((left, right)), Some((top, bottom))) = (extremes.horizontal(), extremes.vertical())
    else {
        crate::zoom_debug!("zoom::perspective", "No extremes, keeping current eye");
        return Ok(Point3::ZERO);
    };

    let horizontal = solve_axis((left.x, left.z), (right.x, right.z), kh);
    let vertical = solve_axis((top.y, top.z), (bottom.y, bottom.z), kv);

    crate::zoom_trace!(
        "zoom::perspective",
        "horizontal {:?}, vertical {:?}",
        horizontal,
        vertical
    );

    let eye = Point3::new(
        horizontal.coord,
        vertical.coord,
        horizontal.depth.min(vertical.depth),
    );

    if !eye.is_finite() {
        return Err(Error::NonFiniteResult(format!(
            "perspective eye {} from extremes {:?}",
            eye, extremes
        )));
    }

    crate::zoom_debug!("zoom::perspective", "Solved camera-space eye {}", eye);
    Ok(eye)
}

#[cfg(test)]
#[path = "perspective_tests.rs"]
mod tests;
