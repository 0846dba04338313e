/// Zoom — fit a camera's view to a set of points.
///
/// This is the host-facing entry point. It reads one snapshot of the host
/// camera, validates the inputs, runs the solver for the requested
/// projection mode and, only if everything succeeded, writes the new
/// placement back in a single camera update.
///
/// It also owns the process-wide logger used by the `zoom_*!` macros.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::camera::{
    apply_eye, apply_parallel, find_extremes, solve_parallel_eye_with_margin,
    solve_perspective_eye, to_camera_space, CameraFrame, Frustum, HostCamera, LookAtCamera,
    ParallelPlacement, ProjectionMode,
};
use crate::config::ZoomConfig;
use crate::error::{Error, Result};
use crate::geometry::{validate_aspect, FovPair, Point3, Viewport};
use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
use crate::scene::{collect_points, SceneNode};

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Minimum severity forwarded to the logger
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogSeverity::Info as u8);

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

// ===== PUBLIC TYPES =====

/// Per-call view parameters read from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    /// Selects the perspective or parallel solver
    pub projection: ProjectionMode,
    /// Resolved field of view (unused by the parallel solver)
    pub fov: FovPair,
    /// Viewport width / height (unused by the perspective solver)
    pub viewport_aspect: f64,
}

impl ViewParams {
    pub fn new(projection: ProjectionMode, fov: FovPair, viewport_aspect: f64) -> Self {
        Self { projection, fov, viewport_aspect }
    }

    pub fn perspective(fov: FovPair, viewport_aspect: f64) -> Self {
        Self::new(ProjectionMode::Perspective, fov, viewport_aspect)
    }

    pub fn parallel(viewport_aspect: f64) -> Self {
        Self::new(
            ProjectionMode::Parallel,
            FovPair::uniform(std::f64::consts::FRAC_PI_4),
            viewport_aspect,
        )
    }

    /// Read projection and fov from `camera`, aspect from `viewport`.
    pub fn from_camera(camera: &LookAtCamera, viewport: Viewport) -> Result<Self> {
        let aspect = viewport.aspect()?;
        let fov = match camera.projection() {
            ProjectionMode::Perspective => camera.fov_pair(aspect)?,
            // A parallel camera's stored fov may be stale; it is never used.
            ProjectionMode::Parallel => FovPair::uniform(std::f64::consts::FRAC_PI_4),
        };
        Ok(Self::new(camera.projection(), fov, aspect))
    }
}

/// What a zoom call did to the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomOutcome {
    /// Nothing to frame; the camera was not touched
    Unchanged,
    /// The camera was moved
    Placed {
        /// New eye, world space
        eye: Point3,
        /// New view height (parallel projection only)
        view_height: Option<f64>,
    },
}

/// Camera zoom tool.
///
/// # Example
///
/// ```no_run
/// use camera_zoom::glam::DVec3;
/// use camera_zoom::zoom::{Zoom, ViewParams};
/// use camera_zoom::zoom::camera::LookAtCamera;
/// use camera_zoom::zoom::geometry::{FovAxis, Viewport};
///
/// let mut camera = LookAtCamera::perspective(
///     DVec3::new(0.0, -50.0, 10.0),
///     DVec3::ZERO,
///     DVec3::Z,
///     1.0,
///     FovAxis::Height,
/// );
/// let view = ViewParams::from_camera(&camera, Viewport::new(1920.0, 1080.0))?;
/// let points = [DVec3::new(-1.0, 0.0, 0.0), DVec3::new(1.0, 2.0, 3.0)];
///
/// Zoom::new().zoom_points(&mut camera, &points, &view)?;
/// # Ok::<(), camera_zoom::zoom::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Zoom {
    config: ZoomConfig,
}

impl Zoom {
    /// Log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InvalidFov(msg) => {
                crate::zoom_error!("zoom::Zoom", "Rejected field of view: {}", msg);
            }
            Error::DegenerateFrame(msg) => {
                crate::zoom_error!("zoom::Zoom", "Rejected camera frame: {}", msg);
            }
            _ => {
                crate::zoom_error!("zoom::Zoom", "Zoom failed: {}", error);
            }
        }
        error
    }

    /// Zoom tool with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zoom tool with a custom configuration.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if a value is negative or not finite.
    pub fn with_config(config: ZoomConfig) -> Result<Self> {
        config.validate().map_err(Self::log_and_return_error)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    // ===== PURE PLACEMENT =====

    /// World-space eye that fits `points` for a perspective camera at
    /// `frame`. `None` when there are no points.
    pub fn fit_perspective(
        &self,
        points: &[Point3],
        frame: &CameraFrame,
        fov: &FovPair,
    ) -> Result<Option<Point3>> {
        self.check_frame(frame)?;
        let eye = self.solve_perspective(points, frame, fov)?;
        Ok(eye.map(|eye| frame.point_to_world(eye)))
    }

    /// World-space eye and view height that fit `points` for a parallel
    /// camera at `frame`. `None` when there are no points.
    pub fn fit_parallel(
        &self,
        points: &[Point3],
        frame: &CameraFrame,
        viewport_aspect: f64,
    ) -> Result<Option<ParallelPlacement>> {
        self.check_frame(frame)?;
        let placement = self.solve_parallel(points, frame, viewport_aspect)?;
        Ok(placement.map(|p| ParallelPlacement {
            eye: frame.point_to_world(p.eye),
            view_height: p.view_height,
        }))
    }

    // ===== CAMERA PLACEMENT =====

    /// Move `camera` so its view contains `points` (world space).
    ///
    /// The camera is only written once every check and solve succeeded.
    ///
    /// # Errors
    ///
    /// - `DegenerateFrame` if the camera's frame is not orthonormal
    /// - `InvalidFov` for a perspective view with a fov outside (0, π)
    /// - `InvalidViewport` for a parallel view with a bad aspect ratio
    /// - `NonFiniteResult` if the points contain non-finite coordinates
    pub fn zoom_points<C: HostCamera + ?Sized>(
        &self,
        camera: &mut C,
        points: &[Point3],
        view: &ViewParams,
    ) -> Result<ZoomOutcome> {
        let frame = camera.frame().map_err(Self::log_and_return_error)?;
        self.check_frame(&frame)?;

        crate::zoom_debug!(
            "zoom::Zoom",
            "Zooming {:?} camera to {} points",
            view.projection,
            points.len()
        );

        let outcome = match view.projection {
            ProjectionMode::Perspective => match self.solve_perspective(points, &frame, &view.fov)? {
                Some(eye) => ZoomOutcome::Placed {
                    eye: apply_eye(camera, eye, &frame),
                    view_height: None,
                },
                None => ZoomOutcome::Unchanged,
            },
            ProjectionMode::Parallel => {
                match self.solve_parallel(points, &frame, view.viewport_aspect)? {
                    Some(placement) => ZoomOutcome::Placed {
                        eye: apply_parallel(camera, &placement, &frame),
                        view_height: Some(placement.view_height),
                    },
                    None => ZoomOutcome::Unchanged,
                }
            }
        };

        Ok(outcome)
    }

    /// Collect the points of `nodes` and zoom to them.
    pub fn zoom_nodes<C: HostCamera + ?Sized>(
        &self,
        camera: &mut C,
        nodes: &[SceneNode],
        view: &ViewParams,
    ) -> Result<ZoomOutcome> {
        let points = collect_points(nodes, self.config.dedup_tolerance);
        self.zoom_points(camera, &points, view)
    }

    // ===== INTERNALS =====

    fn check_frame(&self, frame: &CameraFrame) -> Result<()> {
        if self.config.validate_frame {
            frame
                .validate(self.config.frame_tolerance)
                .map_err(Self::log_and_return_error)?;
        }
        Ok(())
    }

    /// Camera-space perspective eye, `None` for no points.
    fn solve_perspective(
        &self,
        points: &[Point3],
        frame: &CameraFrame,
        fov: &FovPair,
    ) -> Result<Option<Point3>> {
        fov.validate().map_err(Self::log_and_return_error)?;
        if points.is_empty() {
            crate::zoom_debug!("zoom::Zoom", "Nothing to frame, camera unchanged");
            return Ok(None);
        }

        let camera_points = to_camera_space(points, frame);
        let extremes = find_extremes(&camera_points, fov);
        let eye = solve_perspective_eye(&extremes, fov).map_err(Self::log_and_return_error)?;

        let scale = camera_points
            .iter()
            .fold(eye.abs().max_element(), |acc, p| acc.max(p.abs().max_element()));
        let tolerance = 1e-9 * (1.0 + scale);
        let fit = Frustum::from_eye(eye, fov).classify_points(&camera_points, tolerance);
        if !fit.contained {
            crate::zoom_warn!(
                "zoom::Zoom",
                "Solved eye {} leaves points outside the frustum (tolerance {})",
                eye,
                tolerance
            );
        }

        Ok(Some(eye))
    }

    /// Camera-space parallel placement, `None` for no points.
    fn solve_parallel(
        &self,
        points: &[Point3],
        frame: &CameraFrame,
        viewport_aspect: f64,
    ) -> Result<Option<ParallelPlacement>> {
        validate_aspect(viewport_aspect).map_err(Self::log_and_return_error)?;
        let camera_points = to_camera_space(points, frame);
        solve_parallel_eye_with_margin(
            &camera_points,
            viewport_aspect,
            self.config.parallel_depth_margin,
        )
        .map_err(Self::log_and_return_error)
    }

    // ===== LOGGING API =====

    /// Replace the logger.
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = self::logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Restore the default colored console logger.
    pub fn reset_logger() {
        if let Ok(mut lock) = self::logger().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Drop messages below `severity` (default `Info`).
    pub fn set_log_level(severity: LogSeverity) {
        LOG_LEVEL.store(severity.to_u8(), Ordering::Relaxed);
    }

    pub fn log_level() -> LogSeverity {
        LogSeverity::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
    }

    /// Log a message without file:line. Used by the `zoom_*!` macros.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Log a message with file:line. Used by `zoom_error!`.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        if severity < Self::log_level() {
            return;
        }
        if let Ok(lock) = self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

#[cfg(test)]
#[path = "zoom_tool_tests.rs"]
mod tests;
