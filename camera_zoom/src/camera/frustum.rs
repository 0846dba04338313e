/// Frustum — the four side planes of a perspective view, in camera space.
///
/// Each plane is represented as a DVec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing unit normal
/// - D is the signed offset
/// - A point P is inside if dot(plane, P_homogeneous) >= 0 for all planes
///
/// Near and far planes are not modelled: the zoom tool only moves the eye,
/// and clipping distances are the host's concern. The four side planes
/// alone already exclude everything behind the eye.
///
/// Plane names match [`Extremes`](super::Extremes): `PLANE_LEFT` is the
/// plane the left extreme touches after a perspective fit.

use glam::{DVec3, DVec4};
use crate::geometry::{FovPair, Point3};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_TOP: usize = 2;
pub const PLANE_BOTTOM: usize = 3;

/// Result of checking a point set against a frustum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrustumFit {
    /// Every point is inside (within tolerance)
    pub contained: bool,
    /// Per plane: at least one point lies on it (within tolerance)
    pub touching: [bool; 4],
}

impl FrustumFit {
    /// Contained and touching all four planes.
    pub fn is_tight(&self) -> bool {
        self.contained && self.touching.iter().all(|t| *t)
    }
}

/// Four side planes for a camera-space eye position.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, top, bottom
    pub planes: [DVec4; 4],
}

impl Frustum {
    /// Build the side planes of a camera at `eye` (camera space) looking
    /// along +z with the given field of view.
    pub fn from_eye(eye: Point3, fov: &FovPair) -> Self {
        let (kh, kv) = fov.half_tangents();

        let mut planes = [
            // Left:   x - kh·z <= ex - kh·ez
            DVec4::new(-1.0, 0.0, kh, eye.x - kh * eye.z),
            // Right:  x + kh·z >= ex + kh·ez
            DVec4::new(1.0, 0.0, kh, -(eye.x + kh * eye.z)),
            // Top:    y - kv·z <= ey - kv·ez
            DVec4::new(0.0, -1.0, kv, eye.y - kv * eye.z),
            // Bottom: y + kv·z >= ey + kv·ez
            DVec4::new(0.0, 1.0, kv, -(eye.y + kv * eye.z)),
        ];

        for plane in &mut planes {
            let normal_len = DVec3::new(plane.x, plane.y, plane.z).length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Signed distance from `point` to plane `index`; positive inside.
    pub fn signed_distance(&self, index: usize, point: Point3) -> f64 {
        self.planes[index].dot(point.extend(1.0))
    }

    /// Test if the point is inside all four planes, allowing `tolerance`.
    pub fn contains_point(&self, point: Point3, tolerance: f64) -> bool {
        (0..4).all(|i| self.signed_distance(i, point) >= -tolerance)
    }

    /// Check containment and per-plane contact for a point set.
    pub fn classify_points(&self, points: &[Point3], tolerance: f64) -> FrustumFit {
        let mut fit = FrustumFit {
            contained: true,
            touching: [false; 4],
        };

        for point in points {
            for (i, touching) in fit.touching.iter_mut().enumerate() {
                let distance = self.signed_distance(i, *point);
                if distance < -tolerance {
                    fit.contained = false;
                }
                if distance.abs() <= tolerance {
                    *touching = true;
                }
            }
        }

        fit
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
