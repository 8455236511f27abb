//! Grid Tests - Snapping, Steps and Orientation
//!
//! Properties of the snapping grids and the face orientation state machine.

use glam::Vec3;
use tile_brush_engine::brush::{FacePreset, OrientationState, PreviewPose, SpinDirection};
use tile_brush_engine::world::{SpeedMode, TileSize, grid_for, snap, snap_horizontal, step_size};

fn samples() -> Vec<Vec3> {
    let mut points = Vec::new();
    for i in -6..=6 {
        let f = i as f32;
        points.push(Vec3::new(f * 0.37, f * -1.13 + 0.05, f * 0.61 - 0.2));
    }
    points
}

// ============================================================================
// Snap Tests
// ============================================================================

#[test]
fn test_snap_is_idempotent_for_all_sizes() {
    for size in TileSize::ALL {
        for mode in [SpeedMode::Normal, SpeedMode::Fast] {
            for p in samples() {
                let once = snap(p, size, mode);
                assert_eq!(snap(once, size, mode), once, "{size:?} {mode:?} {p:?}");
            }
        }
    }
}

#[test]
fn test_precision_snap_is_identity() {
    for size in TileSize::ALL {
        for p in samples() {
            assert_eq!(snap(p, size, SpeedMode::Precision), p);
        }
    }
}

#[test]
fn test_fast_one_unit_grid_is_offset() {
    let grid = grid_for(TileSize::One, SpeedMode::Fast).unwrap();
    assert_eq!(grid.snap_axis(0.1), 0.5);
    assert_eq!(grid.snap_axis(1.2), 1.5);
    assert_eq!(grid.snap_axis(-0.2), -0.5);
}

#[test]
fn test_fast_four_unit_grid_is_even() {
    let p = snap(Vec3::new(2.9, -3.1, 5.2), TileSize::Four, SpeedMode::Fast);
    assert_eq!(p, Vec3::new(2.0, -4.0, 6.0));
}

#[test]
fn test_horizontal_snap_keeps_height() {
    for size in TileSize::ALL {
        let p = snap_horizontal(Vec3::new(0.3, 0.3, 0.123), size, SpeedMode::Normal);
        assert_eq!(p.z, 0.123);
    }
}

#[test]
fn test_steps_by_mode() {
    assert_eq!(step_size(TileSize::Four, SpeedMode::Normal), 0.5);
    assert_eq!(step_size(TileSize::Half, SpeedMode::Fast), 0.5);
    assert_eq!(step_size(TileSize::Four, SpeedMode::Fast), 4.0);
    assert_eq!(step_size(TileSize::Four, SpeedMode::Precision), 0.1);
}

// ============================================================================
// Orientation Tests
// ============================================================================

#[test]
fn test_six_cycles_restore_preset() {
    let mut state = OrientationState::new(FacePreset::Back);
    state.spin(SpinDirection::Clockwise);
    let before = state;
    for _ in 0..6 {
        state.cycle();
    }
    assert_eq!(state, before);
}

#[test]
fn test_select_face_ignores_history() {
    for n in FacePreset::ALL {
        for m in FacePreset::ALL {
            let mut state = OrientationState::default();
            state.cycle();
            state.select_face(n);
            state.cycle();
            state.select_face(m);
            assert_eq!(state.face(), m);
        }
    }
}

#[test]
fn test_face_index_round_trip() {
    for (i, face) in FacePreset::ALL.into_iter().enumerate() {
        assert_eq!(face.index(), i);
        assert_eq!(FacePreset::from_index(i), Some(face));
    }
    assert_eq!(FacePreset::from_index(6), None);
}

#[test]
fn test_spin_changes_key_but_not_face_position_for_bottom() {
    let mut pose = PreviewPose::new(Vec3::ZERO, TileSize::Two);
    let before = pose.placement_key();
    pose.orientation.spin(SpinDirection::Clockwise);
    let after = pose.placement_key();
    assert_ne!(before, after);
    assert!((before.position() - after.position()).length() < 1e-6);
}
