//! Iterative scene traversal with tolerance-based de-duplication.
//!
//! The traversal keeps its own stack (no recursion) and composes each
//! group's transform with its ancestors'. Points reach the output in
//! depth-first input order; a point within the tolerance of an earlier one
//! is dropped.

use glam::DMat4;
use rustc_hash::FxHashMap;
use crate::geometry::Point3;
use super::scene_node::SceneNode;

type Cell = (i64, i64, i64);

/// Largest cell index magnitude. Coordinates beyond it (and infinities)
/// share the boundary cell and are told apart by the distance check.
const CELL_LIMIT: f64 = (1u64 << 62) as f64;

/// Order-preserving point set that merges points closer than a tolerance.
///
/// Points are bucketed on a grid of cell size `tolerance`, so a match can
/// only be in the same or a neighbouring cell.
#[derive(Debug, Clone)]
pub struct PointSet {
    tolerance: f64,
    points: Vec<Point3>,
    cells: FxHashMap<Cell, Vec<usize>>,
}

impl PointSet {
    /// `tolerance` of zero (or less) merges only exactly equal points.
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.max(0.0),
            points: Vec::new(),
            cells: FxHashMap::default(),
        }
    }

    /// Insert `point` unless a point within the tolerance is already
    /// present. Returns `true` if inserted.
    pub fn insert(&mut self, point: Point3) -> bool {
        let cell = self.cell_of(point);
        let limit = self.tolerance * self.tolerance;

        let reach = if self.tolerance > 0.0 { 1 } else { 0 };
        for dx in -reach..=reach {
            for dy in -reach..=reach {
                for dz in -reach..=reach {
                    let neighbour = (
                        cell.0.saturating_add(dx),
                        cell.1.saturating_add(dy),
                        cell.2.saturating_add(dz),
                    );
                    if let Some(indices) = self.cells.get(&neighbour) {
                        if indices.iter().any(|i| {
                            let other = self.points[*i];
                            // Equality catches infinite coordinates (inf - inf is NaN)
                            other == point || other.distance_squared(point) <= limit
                        }) {
                            return false;
                        }
                    }
                }
            }
        }

        self.cells.entry(cell).or_default().push(self.points.len());
        self.points.push(point);
        true
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in insertion order.
    pub fn as_slice(&self) -> &[Point3] {
        &self.points
    }

    pub fn into_vec(self) -> Vec<Point3> {
        self.points
    }

    fn cell_of(&self, point: Point3) -> Cell {
        if self.tolerance > 0.0 {
            let index = |v: f64| {
                (v / self.tolerance)
                    .floor()
                    .clamp(-CELL_LIMIT, CELL_LIMIT) as i64
            };
            (index(point.x), index(point.y), index(point.z))
        } else {
            // Exact matching: one cell per distinct value (+0.0 and -0.0 merge)
            let key = |v: f64| if v == 0.0 { 0 } else { v.to_bits() as i64 };
            (key(point.x), key(point.y), key(point.z))
        }
    }
}

/// Flatten `nodes` into world-space points, dropping near-duplicates.
pub fn collect_points(nodes: &[SceneNode], tolerance: f64) -> Vec<Point3> {
    let mut set = PointSet::new(tolerance);
    let mut stack: Vec<(&SceneNode, DMat4)> = nodes
        .iter()
        .rev()
        .map(|node| (node, DMat4::IDENTITY))
        .collect();
    let mut visited = 0usize;

    while let Some((node, transform)) = stack.pop() {
        visited += 1;
        match node {
            SceneNode::Geometry { vertices } => {
                for vertex in vertices {
                    set.insert(transform.transform_point3(*vertex));
                }
            }
            SceneNode::Group { transform: local, children } => {
                let combined = transform * *local;
                stack.extend(children.iter().rev().map(|child| (child, combined)));
            }
        }
    }

    crate::zoom_trace!(
        "zoom::scene",
        "Visited {} nodes, collected {} unique points",
        visited,
        set.len()
    );

    set.into_vec()
}

#[cfg(test)]
#[path = "point_collector_tests.rs"]
mod tests;
