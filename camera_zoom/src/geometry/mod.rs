//! Geometry value types shared by the framing solvers.
//!
//! Everything here is a plain value: constructed per call, copied freely,
//! never shared between calls.

mod bounding_box;
mod fov;
mod viewport;

pub use bounding_box::BoundingBox;
pub use fov::{FovAxis, FovPair};
pub use viewport::{validate_aspect, Viewport};

/// A position in 3D space.
pub type Point3 = glam::DVec3;

/// A direction or offset in 3D space.
pub type Vector3 = glam::DVec3;
