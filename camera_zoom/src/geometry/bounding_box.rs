/// Axis-aligned bounding box of a point set.
///
/// Only the parallel (orthographic) path uses it. Naming follows the usual
/// modelling convention: width is the X extent, height the Y extent and
/// depth the Z extent.

use super::Point3;

/// Axis-aligned bounding box.
///
/// There is no "empty" box value: building a box from zero points yields
/// `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner (x, y, z)
    pub min: Point3,
    /// Maximum corner (x, y, z)
    pub max: Point3,
}

impl BoundingBox {
    /// Box containing exactly one point.
    pub fn from_point(point: Point3) -> Self {
        Self { min: point, max: point }
    }

    /// Smallest box containing every point, or `None` for an empty slice.
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bb = Self::from_point(*first);
        for point in rest {
            bb.add_point(*point);
        }
        Some(bb)
    }

    /// Grow the box to include `point`.
    pub fn add_point(&mut self, point: Point3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Center of the box.
    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    /// X extent.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Y extent.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Z extent.
    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Test if the point lies inside or on the box.
    pub fn contains_point(&self, point: Point3) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
            && self.min.z <= point.z
            && point.z <= self.max.z
    }
}

#[cfg(test)]
#[path = "bounding_box_tests.rs"]
mod tests;
