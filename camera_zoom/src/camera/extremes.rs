//! Frustum extreme finder.
//!
//! For a camera at the camera-space origin, the visible half-width at depth
//! z is `z·tan(fov/2)`. Scoring each point by its coordinate offset by that
//! half-width ranks how far it pushes the frustum edge outward:
//!
//! | side   | score              | pick   |
//! |--------|--------------------|--------|
//! | left   | `x − z·tan(h/2)`   | max    |
//! | right  | `x + z·tan(h/2)`   | min    |
//! | top    | `y − z·tan(v/2)`   | max    |
//! | bottom | `y + z·tan(v/2)`   | min    |
//!
//! `left` and `top` therefore bind the edges on the positive side of their
//! axis, `right` and `bottom` the negative side.

use crate::geometry::{FovPair, Point3};

/// The four points constraining the frustum, in camera space.
///
/// All four are `None` exactly when the input was empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes {
    pub left: Option<Point3>,
    pub right: Option<Point3>,
    pub top: Option<Point3>,
    pub bottom: Option<Point3>,
}

impl Extremes {
    pub const NONE: Self = Self {
        left: None,
        right: None,
        top: None,
        bottom: None,
    };

    /// No side is constrained.
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.top.is_none() && self.bottom.is_none()
    }

    /// `(left, right)` if both are present.
    pub fn horizontal(&self) -> Option<(Point3, Point3)> {
        Some((self.left?, self.right?))
    }

    /// `(top, bottom)` if both are present.
    pub fn vertical(&self) -> Option<(Point3, Point3)> {
        Some((self.top?, self.bottom?))
    }
}

/// Select the left, right, top and bottom extremes of camera-space points.
///
/// Ties go to the earliest point in input order.
pub fn find_extremes(points: &[Point3], fov: &FovPair) -> Extremes {
    let (kh, kv) = fov.half_tangents();

    let extremes = Extremes {
        left: select(points, |p| p.x - p.z * kh, |score, best| score > best),
        right: select(points, |p| p.x + p.z * kh, |score, best| score < best),
        top: select(points, |p| p.y - p.z * kv, |score, best| score > best),
        bottom: select(points, |p| p.y + p.z * kv, |score, best| score < best),
    };

    crate::zoom_trace!(
        "zoom::extremes",
        "{} points -> left {:?}, right {:?}, top {:?}, bottom {:?}",
        points.len(),
        extremes.left,
        extremes.right,
        extremes.top,
        extremes.bottom
    );

    extremes
}

/// First point whose score beats every later one under `better`.
fn select(
    points: &[Point3],
    score: impl Fn(&Point3) -> f64,
    better: impl Fn(f64, f64) -> bool,
) -> Option<Point3> {
    let (first, rest) = points.split_first()?;
    let mut best = *first;
    let mut best_score = score(first);

    for point in rest {
        let candidate = score(point);
        if better(candidate, best_score) {
            best = *point;
            best_score = candidate;
        }
    }

    Some(best)
}

#[cfg(test)]
#[path = "extremes_tests.rs"]
mod tests;
