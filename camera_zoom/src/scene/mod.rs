//! Scene module — flattening host geometry into a point list.
//!
//! Hosts with nested groups or instances describe their selection as a
//! `SceneNode` tree; `collect_points` turns it into the flat, de-duplicated
//! world-space point list the solvers take.

mod point_collector;
mod scene_node;

pub use point_collector::{collect_points, PointSet};
pub use scene_node::SceneNode;
