use glam::DVec3;
use std::f64::consts::FRAC_PI_2;
use crate::camera::{CameraFrame, LookAtCamera};
use crate::geometry::FovAxis;
use super::*;

fn create_test_camera() -> LookAtCamera {
    LookAtCamera::perspective(
        DVec3::new(0.0, -10.0, 2.0),
        DVec3::new(0.0, 0.0, 2.0),
        DVec3::Z,
        FRAC_PI_2,
        FovAxis::Height,
    )
}

fn assert_close(a: DVec3, b: DVec3) {
    assert!((a - b).length() < 1e-9, "{} != {}", a, b);
}

// ============================================================================
// apply_eye
// ============================================================================

#[test]
fn test_apply_eye_translates_eye_and_target() {
    let mut camera = create_test_camera();
    let frame = camera.frame().unwrap();

    // 1 right, 2 up, 3 forward in camera space
    let new_eye = apply_eye(&mut camera, DVec3::new(1.0, 2.0, 3.0), &frame);

    assert_close(new_eye, DVec3::new(1.0, -7.0, 4.0));
    assert_close(camera.eye(), new_eye);
    assert_close(camera.target(), DVec3::new(1.0, 3.0, 4.0));
    assert_eq!(camera.up(), DVec3::Z);
}

#[test]
fn test_apply_eye_preserves_frame_orientation() {
    let mut camera = LookAtCamera::perspective(
        DVec3::new(3.0, -4.0, 5.0),
        DVec3::new(-1.0, 2.0, 0.0),
        DVec3::Z,
        FRAC_PI_2,
        FovAxis::Height,
    );
    let before = camera.frame().unwrap();

    apply_eye(&mut camera, DVec3::new(-2.0, 0.5, 7.0), &before);
    let after = camera.frame().unwrap();

    assert_close(after.forward, before.forward);
    assert_close(after.right, before.right);
    assert_close(after.up, before.up);
}

#[test]
fn test_apply_origin_is_noop() {
    let mut camera = create_test_camera();
    let original = camera.clone();
    let frame = camera.frame().unwrap();

    apply_eye(&mut camera, DVec3::ZERO, &frame);

    assert_close(camera.eye(), original.eye());
    assert_close(camera.target(), original.target());
}

// ============================================================================
// apply_parallel
// ============================================================================

#[test]
fn test_apply_parallel_sets_view_height() {
    let mut camera = LookAtCamera::parallel(
        DVec3::ZERO,
        DVec3::new(0.0, 10.0, 0.0),
        DVec3::Z,
        1.0,
    );
    let frame = CameraFrame::from_look_at(camera.eye(), camera.target(), camera.up()).unwrap();
    let placement = ParallelPlacement {
        eye: DVec3::new(0.0, 0.0, -5.0),
        view_height: 42.0,
    };

    let new_eye = apply_parallel(&mut camera, &placement, &frame);

    assert_close(new_eye, DVec3::new(0.0, -5.0, 0.0));
    assert_close(camera.target(), DVec3::new(0.0, 5.0, 0.0));
    assert_eq!(camera.view_height(), 42.0);
}

#[test]
fn test_apply_through_trait_object() {
    let mut camera = create_test_camera();
    let frame = camera.frame().unwrap();
    let host: &mut dyn HostCamera = &mut camera;

    apply_eye(host, DVec3::new(0.0, 0.0, 1.0), &frame);
    assert_close(camera.eye(), DVec3::new(0.0, -9.0, 2.0));
}
