use glam::DVec3;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};
use crate::camera::{find_extremes, Frustum, PLANE_BOTTOM, PLANE_LEFT, PLANE_RIGHT, PLANE_TOP};
use crate::error::Error;
use super::*;

fn solve(points: &[DVec3], fov: &FovPair) -> DVec3 {
    solve_perspective_eye(&find_extremes(points, fov), fov).unwrap()
}

/// Deterministic scattered points in front of the camera.
fn scattered_points() -> Vec<DVec3> {
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        (seed % 10_000) as f64 / 10_000.0
    };

    (0..40)
        .map(|_| DVec3::new(next() * 20.0 - 10.0, next() * 8.0 - 2.0, next() * 30.0 + 5.0))
        .collect()
}

/// Points expressed relative to a camera moved to `eye` (same axes).
fn relative_to(points: &[DVec3], eye: DVec3) -> Vec<DVec3> {
    points.iter().map(|p| *p - eye).collect()
}

// ============================================================================
// solve_axis
// ============================================================================

#[test]
fn test_solve_axis_symmetric_pair() {
    // Points at ±1, depth 5, 90° fov (k = 1)
    let solution = solve_axis((1.0, 5.0), (-1.0, 5.0), 1.0);
    assert!((solution.coord - 0.0).abs() < 1e-12);
    assert!((solution.depth - 4.0).abs() < 1e-12);
}

#[test]
fn test_solve_axis_edges_pass_through_extremes() {
    let k = 0.4;
    let a = (3.0, 12.0);
    let b = (-2.0, 7.0);
    let s = solve_axis(a, b, k);

    // Positive edge: a - e = k (z_a - ez); negative edge: e - b = k (z_b - ez)
    assert!(((a.0 - s.coord) - k * (a.1 - s.depth)).abs() < 1e-12);
    assert!(((s.coord - b.0) - k * (b.1 - s.depth)).abs() < 1e-12);
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_square_at_depth_5() {
    let points = [
        DVec3::new(1.0, 1.0, 5.0),
        DVec3::new(-1.0, 1.0, 5.0),
        DVec3::new(1.0, -1.0, 5.0),
        DVec3::new(-1.0, -1.0, 5.0),
    ];
    let fov = FovPair::uniform(FRAC_PI_2);
    let eye = solve(&points, &fov);

    assert!(eye.x.abs() < 1e-12);
    assert!(eye.y.abs() < 1e-12);
    assert!((eye.z - 4.0).abs() < 1e-12);
    assert!(eye.z < 5.0);

    let fit = Frustum::from_eye(eye, &fov).classify_points(&points, 1e-9);
    assert!(fit.contained);
    assert!(fit.is_tight());
}

#[test]
fn test_single_point_does_not_divide_by_zero() {
    let point = DVec3::new(0.0, 0.0, 10.0);
    let eye = solve(&[point], &FovPair::uniform(FRAC_PI_2));

    assert!(eye.is_finite());
    assert!(eye.x.abs() < 1e-9);
    assert!(eye.y.abs() < 1e-9);
    // The tangent edges meet at the point itself
    assert!(eye.z <= 10.0 + 1e-9);
}

#[test]
fn test_empty_extremes_keep_current_eye() {
    let eye = solve_perspective_eye(&Extremes::NONE, &FovPair::uniform(FRAC_PI_3)).unwrap();
    assert_eq!(eye, DVec3::ZERO);
}

// ============================================================================
// Containment, tightness, idempotence
// ============================================================================

#[test]
fn test_scattered_points_contained_and_tight() {
    let points = scattered_points();
    for fov in [
        FovPair::uniform(FRAC_PI_2),
        FovPair::new(1.2, 0.6),
        FovPair::new(0.3, 1.9),
    ] {
        let eye = solve(&points, &fov);
        let fit = Frustum::from_eye(eye, &fov).classify_points(&points, 1e-7);

        assert!(fit.contained, "points clipped for {:?}", fov);
        // The binding axis touches both of its planes; the other axis is
        // centred and touches neither or both.
        let horizontal = fit.touching[PLANE_LEFT] && fit.touching[PLANE_RIGHT];
        let vertical = fit.touching[PLANE_TOP] && fit.touching[PLANE_BOTTOM];
        assert!(horizontal || vertical, "frustum not tight for {:?}", fov);
    }
}

#[test]
fn test_both_axes_tight_when_depths_agree() {
    // Square target with a matching square fov binds both axes at once
    let points = [
        DVec3::new(2.0, 0.0, 10.0),
        DVec3::new(-2.0, 0.0, 10.0),
        DVec3::new(0.0, 2.0, 10.0),
        DVec3::new(0.0, -2.0, 10.0),
    ];
    let fov = FovPair::uniform(FRAC_PI_3);
    let eye = solve(&points, &fov);

    let fit = Frustum::from_eye(eye, &fov).classify_points(&points, 1e-9);
    assert!(fit.is_tight());
}

#[test]
fn test_fit_is_a_fixed_point() {
    let points = scattered_points();
    let fov = FovPair::new(1.1, 0.8);

    let first = solve(&points, &fov);
    let second = solve(&relative_to(&points, first), &fov);

    assert!(second.length() < 1e-9, "second solve moved the eye by {}", second);
}

#[test]
fn test_zooming_in_moves_forward() {
    // A small target far away: the camera advances toward it
    let points = [DVec3::new(0.5, 0.5, 100.0), DVec3::new(-0.5, -0.5, 100.0)];
    let eye = solve(&points, &FovPair::uniform(FRAC_PI_2));
    assert!(eye.z > 90.0);
}

#[test]
fn test_zooming_out_moves_back() {
    // A wide target close to the camera: the camera retreats
    let points = [DVec3::new(50.0, 0.0, 1.0), DVec3::new(-50.0, 0.0, 1.0)];
    let eye = solve(&points, &FovPair::uniform(FRAC_PI_2));
    assert!(eye.z < -40.0);
}

// ============================================================================
// Axis independence
// ============================================================================

#[test]
fn test_vertical_changes_do_not_affect_horizontal_coordinate() {
    let base = [
        DVec3::new(4.0, 1.0, 10.0),
        DVec3::new(-3.0, -1.0, 12.0),
        DVec3::new(0.0, 2.0, 8.0),
    ];
    let stretched: Vec<DVec3> = base.iter().map(|p| DVec3::new(p.x, p.y * 7.0, p.z)).collect();

    let fov = FovPair::new(1.0, 0.9);
    let a = solve(&base, &fov);
    let b = solve(&stretched, &fov);
    assert!((a.x - b.x).abs() < 1e-12);

    // Changing only the vertical fov leaves x alone as well
    let c = solve(&base, &FovPair::new(1.0, 0.2));
    assert!((a.x - c.x).abs() < 1e-12);
}

#[test]
fn test_horizontal_changes_do_not_affect_vertical_coordinate() {
    let base = [
        DVec3::new(4.0, 1.0, 10.0),
        DVec3::new(-3.0, -1.0, 12.0),
        DVec3::new(0.0, 2.0, 8.0),
    ];
    let shuffled = [base[2], base[0], base[1]];
    let widened: Vec<DVec3> = base.iter().map(|p| DVec3::new(p.x * 5.0, p.y, p.z)).collect();

    let fov = FovPair::new(1.0, 0.9);
    let a = solve(&base, &fov);
    assert!((a.y - solve(&shuffled, &fov).y).abs() < 1e-12);
    assert!((a.y - solve(&widened, &fov).y).abs() < 1e-12);
}

#[test]
fn test_depth_is_the_farther_back_of_both_axes() {
    // Wide and flat: horizontal binds
    let points = [DVec3::new(10.0, 1.0, 20.0), DVec3::new(-10.0, -1.0, 20.0)];
    let fov = FovPair::uniform(FRAC_PI_2);
    let (kh, kv) = fov.half_tangents();
    let eye = solve(&points, &fov);

    let h = solve_axis((10.0, 20.0), (-10.0, 20.0), kh);
    let v = solve_axis((1.0, 20.0), (-1.0, 20.0), kv);
    assert!(h.depth < v.depth);
    assert_eq!(eye.z, h.depth);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_zero_fov_rejected() {
    let extremes = find_extremes(&[DVec3::new(0.0, 0.0, 5.0)], &FovPair::new(0.0, 1.0));
    let err = solve_perspective_eye(&extremes, &FovPair::new(0.0, 1.0)).unwrap_err();
    assert!(matches!(err, Error::InvalidFov(_)));
}

#[test]
fn test_pi_fov_rejected() {
    let extremes = find_extremes(&[DVec3::new(0.0, 0.0, 5.0)], &FovPair::new(1.0, 1.0));
    let err = solve_perspective_eye(&extremes, &FovPair::new(PI, 1.0)).unwrap_err();
    assert!(matches!(err, Error::InvalidFov(_)));
}

#[test]
fn test_invalid_fov_rejected_even_without_points() {
    let err = solve_perspective_eye(&Extremes::NONE, &FovPair::new(1.0, 0.0)).unwrap_err();
    assert!(matches!(err, Error::InvalidFov(_)));
}

#[test]
fn test_non_finite_points_flagged() {
    let points = [DVec3::new(f64::INFINITY, 0.0, 5.0)];
    let fov = FovPair::uniform(FRAC_PI_2);
    let err = solve_perspective_eye(&find_extremes(&points, &fov), &fov).unwrap_err();
    assert!(matches!(err, Error::NonFiniteResult(_)));
}
