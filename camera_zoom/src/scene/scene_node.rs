/// Scene node — geometry leaf or transformed group.

use glam::DMat4;
use crate::geometry::Point3;

/// A node of host geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    /// Vertices in the coordinate space of the enclosing group
    Geometry {
        vertices: Vec<Point3>,
    },

    /// Children placed by `transform` (local to parent)
    Group {
        transform: DMat4,
        children: Vec<SceneNode>,
    },
}

impl SceneNode {
    pub fn geometry(vertices: Vec<Point3>) -> Self {
        SceneNode::Geometry { vertices }
    }

    pub fn group(transform: DMat4, children: Vec<SceneNode>) -> Self {
        SceneNode::Group { transform, children }
    }
}
