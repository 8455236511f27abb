//! Face Orientation
//!
//! Six face presets (which side of the preview volume is the placement face)
//! plus a free 45-degree spin around the vertical axis layered on top.
//! Rotations use XYZ Euler angles: X is applied first, then Y, then Z.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

/// Spin steps per full turn (45 degrees each).
const SPIN_STEPS_PER_TURN: i32 = 8;

/// One of the six fixed face orientations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacePreset {
    #[default]
    Bottom,
    Top,
    Front,
    Back,
    Right,
    Left,
}

impl FacePreset {
    /// Presets in cycle order.
    pub const ALL: [FacePreset; 6] = [
        FacePreset::Bottom,
        FacePreset::Top,
        FacePreset::Front,
        FacePreset::Back,
        FacePreset::Right,
        FacePreset::Left,
    ];

    pub fn index(self) -> usize {
        match self {
            FacePreset::Bottom => 0,
            FacePreset::Top => 1,
            FacePreset::Front => 2,
            FacePreset::Back => 3,
            FacePreset::Right => 4,
            FacePreset::Left => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The next preset in cycle order (Left wraps to Bottom).
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Euler angles (radians) of this preset.
    pub fn euler(self) -> Vec3 {
        match self {
            FacePreset::Bottom => Vec3::ZERO,
            FacePreset::Top => Vec3::new(PI, 0.0, 0.0),
            FacePreset::Front => Vec3::new(FRAC_PI_2, 0.0, 0.0),
            FacePreset::Back => Vec3::new(-FRAC_PI_2, 0.0, 0.0),
            FacePreset::Right => Vec3::new(0.0, -FRAC_PI_2, 0.0),
            FacePreset::Left => Vec3::new(0.0, FRAC_PI_2, 0.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FacePreset::Bottom => "Bottom",
            FacePreset::Top => "Top",
            FacePreset::Front => "Front",
            FacePreset::Back => "Back",
            FacePreset::Right => "Right",
            FacePreset::Left => "Left",
        }
    }
}

/// Spin direction around the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpinDirection {
    /// +45 degrees
    Clockwise,
    /// -45 degrees
    CounterClockwise,
}

impl SpinDirection {
    pub fn sign(self) -> i32 {
        match self {
            SpinDirection::Clockwise => 1,
            SpinDirection::CounterClockwise => -1,
        }
    }
}

/// Build the rotation matrix for XYZ Euler angles (X applied first).
pub fn euler_to_matrix(euler: Vec3) -> Mat3 {
    Mat3::from_rotation_z(euler.z) * Mat3::from_rotation_y(euler.y) * Mat3::from_rotation_x(euler.x)
}

/// Face preset, vertical spin and the inverted-geometry flag.
///
/// The spin is kept as a whole number of 45-degree steps in `0..8` so that
/// spinning a full turn lands on exactly the same rotation value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OrientationState {
    face: FacePreset,
    spin_steps: i32,
    inverted: bool,
}

impl OrientationState {
    pub fn new(face: FacePreset) -> Self {
        Self {
            face,
            ..Self::default()
        }
    }

    pub fn face(&self) -> FacePreset {
        self.face
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// Spin offset in 45-degree steps, `0..8`.
    pub fn spin_steps(&self) -> i32 {
        self.spin_steps
    }

    /// Spin offset in degrees, `0..360`.
    pub fn spin_degrees(&self) -> f32 {
        self.spin_steps as f32 * 45.0
    }

    /// Advance to the next face preset.
    pub fn cycle(&mut self) {
        self.face = self.face.next();
    }

    /// Jump directly to a face preset.
    pub fn select_face(&mut self, face: FacePreset) {
        self.face = face;
    }

    /// Add one 45-degree step of vertical spin.
    pub fn spin(&mut self, direction: SpinDirection) {
        self.spin_steps = (self.spin_steps + direction.sign()).rem_euclid(SPIN_STEPS_PER_TURN);
    }

    /// Switch between normal and inverted tile geometry. Rotation is unaffected.
    pub fn toggle_inversion(&mut self) {
        self.inverted = !self.inverted;
    }

    /// Euler angles of the preset with the spin added to Z.
    pub fn euler(&self) -> Vec3 {
        let mut euler = self.face.euler();
        euler.z += self.spin_steps as f32 * FRAC_PI_4;
        euler
    }

    pub fn matrix(&self) -> Mat3 {
        euler_to_matrix(self.euler())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn test_cycle_six_times_returns_home() {
        for start in FacePreset::ALL {
            let mut state = OrientationState::new(start);
            for _ in 0..6 {
                state.cycle();
            }
            assert_eq!(state.face(), start);
            assert_eq!(state.euler(), start.euler());
        }
    }

    #[test]
    fn test_cycle_wraps_left_to_bottom() {
        assert_eq!(FacePreset::Left.next(), FacePreset::Bottom);
    }

    #[test]
    fn test_select_face_is_direct() {
        let mut state = OrientationState::default();
        state.cycle();
        state.spin(SpinDirection::Clockwise);
        state.select_face(FacePreset::Right);
        state.select_face(FacePreset::Back);
        assert_eq!(state.face(), FacePreset::Back);
    }

    #[test]
    fn test_spin_layers_on_preset() {
        let mut state = OrientationState::new(FacePreset::Front);
        state.spin(SpinDirection::Clockwise);
        let euler = state.euler();
        assert_eq!(euler.x, FRAC_PI_2);
        assert!((euler.z - FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_spin_full_turn_is_stable() {
        let mut state = OrientationState::default();
        for _ in 0..8 {
            state.spin(SpinDirection::Clockwise);
        }
        assert_eq!(state.spin_steps(), 0);
        state.spin(SpinDirection::CounterClockwise);
        assert_eq!(state.spin_steps(), 7);
        assert_eq!(state.spin_degrees(), 315.0);
    }

    #[test]
    fn test_inversion_keeps_rotation() {
        let mut state = OrientationState::new(FacePreset::Top);
        let before = state.euler();
        state.toggle_inversion();
        assert!(state.inverted());
        assert_eq!(state.euler(), before);
    }

    #[test]
    fn test_preset_down_vectors() {
        // Where the local "down" face ends up for each preset
        let down = Vec3::NEG_Z;
        let expect = [
            (FacePreset::Bottom, Vec3::NEG_Z),
            (FacePreset::Top, Vec3::Z),
            (FacePreset::Front, Vec3::Y),
            (FacePreset::Back, Vec3::NEG_Y),
            (FacePreset::Right, Vec3::X),
            (FacePreset::Left, Vec3::NEG_X),
        ];
        for (face, dir) in expect {
            let rotated = OrientationState::new(face).matrix() * down;
            assert!(approx(rotated, dir), "{face:?}: {rotated:?}");
        }
    }
}
