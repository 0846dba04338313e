/*!
# Camera Zoom

Camera framing ("zoom to fit") for 3D viewers.

Given points and a camera, compute where the camera has to move so that its
view contains every point with as little unused margin as possible. The
camera is only translated: its view direction and roll are preserved.

## Architecture

- **CameraFrame**: converts points between world space and camera space
- **find_extremes**: picks the four points that constrain the frustum
- **solve_perspective_eye**: tangent-line solve for perspective cameras
- **solve_parallel_eye**: bounding-box fit for parallel (orthographic) cameras
- **apply_eye / apply_parallel**: translate the host camera to the new eye
- **Zoom**: validates inputs, runs the right solver, writes the camera once

Everything except the final camera write is a pure computation over values.
*/

// Internal modules
mod config;
mod error;
mod zoom_tool;
pub mod camera;
pub mod geometry;
pub mod log;
pub mod scene;

// Main zoom namespace module
pub mod zoom {
    // Error types
    pub use crate::error::{Error, Result};

    // Entry point
    pub use crate::config::ZoomConfig;
    pub use crate::zoom_tool::{ViewParams, Zoom, ZoomOutcome};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{format_entry, DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    // Camera frame, solvers and applicator
    pub mod camera {
        pub use crate::camera::*;
    }

    // Geometry value types
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Scene point collection
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
