//! Camera Tests - View Axes and Pointer Rays
//!
//! Tests for the camera module: cardinal movement axes under arbitrary view
//! angles and ray/plane intersection for pointer moves.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat3, Vec2, Vec3};
use tile_brush_engine::camera::{CameraAccessor, FixedCamera, Ray, ViewAxes, intersect_horizontal_plane};
use tile_brush_engine::input::MoveDirection;

/// Camera yawed around Z (0 looks along +Y) and tilted down by `pitch`.
fn orbit(yaw_degrees: f32, pitch: f32) -> Mat3 {
    Mat3::from_rotation_z(yaw_degrees.to_radians()) * Mat3::from_rotation_x(FRAC_PI_2) * Mat3::from_rotation_x(-pitch)
}

// ============================================================================
// ViewAxes Tests
// ============================================================================

#[test]
fn test_axes_follow_yaw_quadrants() {
    let cases = [
        (0.0, Vec3::Y, Vec3::X),
        (90.0, Vec3::NEG_X, Vec3::Y),
        (180.0, Vec3::NEG_Y, Vec3::NEG_X),
        (270.0, Vec3::X, Vec3::NEG_Y),
        (30.0, Vec3::Y, Vec3::X),
        (-30.0, Vec3::Y, Vec3::X),
    ];
    for (yaw, forward, right) in cases {
        let axes = ViewAxes::from_view_rotation(Some(orbit(yaw, 0.5)));
        assert_eq!(axes.forward, forward, "yaw {yaw}");
        assert_eq!(axes.right, right, "yaw {yaw}");
    }
}

#[test]
fn test_axes_from_camera_accessor() {
    let camera = FixedCamera {
        rotation: Some(orbit(180.0, 0.2)),
        ray: None,
    };
    let axes = ViewAxes::from_camera(&camera);
    assert_eq!(axes.forward, Vec3::NEG_Y);
}

#[test]
fn test_missing_camera_falls_back() {
    let axes = ViewAxes::from_camera(&FixedCamera::default());
    assert_eq!(axes, ViewAxes::default());
    assert_eq!(MoveDirection::Forward.world_vector(&axes), Vec3::Y);
    assert_eq!(MoveDirection::Left.world_vector(&axes), Vec3::NEG_X);
    assert_eq!(MoveDirection::Up.world_vector(&axes), Vec3::Z);
}

// ============================================================================
// Raycast Tests
// ============================================================================

#[test]
fn test_ray_hits_plane_at_height() {
    let ray = Ray::new(Vec3::new(2.0, -3.0, 5.0), Vec3::new(0.0, 1.0, -1.0));
    let hit = intersect_horizontal_plane(&ray, 1.0).unwrap();
    assert!((hit - Vec3::new(2.0, 1.0, 1.0)).length() < 1e-5);
}

#[test]
fn test_ray_pointing_away_misses() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
    assert!(intersect_horizontal_plane(&ray, 0.0).is_none());
}

#[test]
fn test_parallel_ray_misses() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::X);
    assert!(intersect_horizontal_plane(&ray, 0.0).is_none());
}

#[test]
fn test_fixed_camera_ray() {
    let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
    let camera = FixedCamera {
        rotation: None,
        ray: Some(ray),
    };
    assert_eq!(camera.screen_ray(Vec2::new(100.0, 50.0)), Some(ray));
}
