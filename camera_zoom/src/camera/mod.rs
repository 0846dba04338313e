//! Camera module — frame adapter, framing solvers and camera applicator.
//!
//! Data flows leaf-first: points are re-expressed in camera space
//! (`CameraFrame`), the four frustum extremes are selected
//! (`find_extremes`), a perspective or parallel solver computes the new
//! eye, and `apply_eye` / `apply_parallel` write it back to the host camera.
//!
//! Camera space: origin at the eye, x along `right`, y along `up`, z along
//! `forward` (points in view have positive z).

mod applicator;
mod camera;
mod camera_frame;
mod extremes;
mod frustum;
mod parallel;
mod perspective;

pub use applicator::{apply_eye, apply_parallel};
pub use camera::{HostCamera, LookAtCamera, ProjectionMode};
pub use camera_frame::{to_camera_space, to_world_space, CameraFrame};
pub use extremes::{find_extremes, Extremes};
pub use frustum::{Frustum, FrustumFit, PLANE_BOTTOM, PLANE_LEFT, PLANE_RIGHT, PLANE_TOP};
pub use parallel::{
    solve_parallel_eye, solve_parallel_eye_with_margin, ParallelPlacement,
    PARALLEL_DEPTH_MARGIN,
};
pub use perspective::{solve_axis, solve_perspective_eye, AxisSolution};
