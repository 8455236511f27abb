//! Preview Pose and Placement Keys
//!
//! The preview pose is the transient "where would the next tile go" state.
//! A [`PlacementKey`] is its canonical identity: the placement-face position
//! and rotation quantized to six decimal places, plus size and inversion.

use std::fmt;

use glam::Vec3;

use super::orientation::OrientationState;
use crate::world::TileSize;

/// Quantization factor: six decimal places.
const KEY_SCALE: f64 = 1.0e6;

/// Current preview volume: center position, orientation and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewPose {
    /// Center of the preview volume
    pub position: Vec3,
    /// Face preset, spin and inversion
    pub orientation: OrientationState,
    pub size: TileSize,
}

impl PreviewPose {
    pub fn new(position: Vec3, size: TileSize) -> Self {
        Self {
            position,
            orientation: OrientationState::default(),
            size,
        }
    }

    /// Offset from the volume center to the placement face, in local space.
    pub fn local_face_offset(size: TileSize) -> Vec3 {
        Vec3::new(0.0, 0.0, -size.half())
    }

    /// World position of the placement face: the rotated local "down" face.
    pub fn placement_face_position(&self) -> Vec3 {
        self.position + self.orientation.matrix() * Self::local_face_offset(self.size)
    }

    pub fn placement_key(&self) -> PlacementKey {
        PlacementKey {
            position: quantize(self.placement_face_position()),
            rotation: quantize(self.orientation.euler()),
            size: self.size,
            inverted: self.orientation.inverted(),
        }
    }
}

fn quantize(v: Vec3) -> [i64; 3] {
    // Rounding to an integer also folds -0.0 into 0
    v.to_array().map(|c| (f64::from(c) * KEY_SCALE).round() as i64)
}

fn dequantize(q: [i64; 3]) -> Vec3 {
    Vec3::from_array(q.map(|c| (c as f64 / KEY_SCALE) as f32))
}

/// Canonical identity of one placed tile.
///
/// Components are stored as integer micro-units so equality and hashing are
/// exact and keys order deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlacementKey {
    position: [i64; 3],
    rotation: [i64; 3],
    size: TileSize,
    inverted: bool,
}

impl PlacementKey {
    /// Placement-face position, rounded.
    pub fn position(&self) -> Vec3 {
        dequantize(self.position)
    }

    /// Euler rotation (radians), rounded.
    pub fn rotation(&self) -> Vec3 {
        dequantize(self.rotation)
    }

    pub fn size(&self) -> TileSize {
        self.size
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// Quantized components in micro-units.
    pub fn raw_position(&self) -> [i64; 3] {
        self.position
    }

    pub fn raw_rotation(&self) -> [i64; 3] {
        self.rotation
    }
}

impl fmt::Display for PlacementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.position();
        let r = self.rotation();
        write!(
            f,
            "({:.6}, {:.6}, {:.6}) rot ({:.6}, {:.6}, {:.6}) size {}{}",
            p.x,
            p.y,
            p.z,
            r.x,
            r.y,
            r.z,
            self.size.label(),
            if self.inverted { " inverted" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::orientation::FacePreset;

    #[test]
    fn test_bottom_face_is_below_center() {
        let pose = PreviewPose::new(Vec3::ZERO, TileSize::Two);
        assert_eq!(pose.placement_face_position(), Vec3::new(0.0, 0.0, -1.0));

        let key = pose.placement_key();
        assert_eq!(key.raw_position(), [0, 0, -1_000_000]);
        assert_eq!(key.raw_rotation(), [0, 0, 0]);
        assert_eq!(key.size().index(), 2);
        assert!(!key.inverted());
    }

    #[test]
    fn test_rotated_face_offset() {
        let mut pose = PreviewPose::new(Vec3::new(1.0, 1.0, 1.0), TileSize::Four);
        pose.orientation.select_face(FacePreset::Right);
        let face = pose.placement_face_position();
        assert!((face - Vec3::new(3.0, 1.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_float_noise_collapses_to_same_key() {
        let a = PreviewPose::new(Vec3::new(0.1 + 0.2, 0.0, 0.0), TileSize::One);
        let b = PreviewPose::new(Vec3::new(0.3, -0.0, 0.0), TileSize::One);
        assert_eq!(a.placement_key(), b.placement_key());
    }

    #[test]
    fn test_inversion_and_size_distinguish_keys() {
        let base = PreviewPose::new(Vec3::ZERO, TileSize::One);
        let mut inverted = base;
        inverted.orientation.toggle_inversion();
        assert_ne!(base.placement_key(), inverted.placement_key());

        let mut bigger = base;
        bigger.size = TileSize::Two;
        assert_ne!(base.placement_key(), bigger.placement_key());
    }

    #[test]
    fn test_display() {
        let key = PreviewPose::new(Vec3::ZERO, TileSize::Two).placement_key();
        assert_eq!(
            key.to_string(),
            "(0.000000, 0.000000, -1.000000) rot (0.000000, 0.000000, 0.000000) size 2x2"
        );
    }
}
