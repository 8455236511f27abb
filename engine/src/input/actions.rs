//! Brush Intents
//!
//! Discrete operations the session understands. The host (or [`super::KeyBindings`])
//! maps raw device input onto these; the session never sees key codes.

use glam::Vec3;

use crate::brush::orientation::{FacePreset, SpinDirection};
use crate::camera::ViewAxes;

/// Direction of a single preview move, relative to the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl MoveDirection {
    /// World-space unit vector for this direction under the given view axes.
    pub fn world_vector(self, axes: &ViewAxes) -> Vec3 {
        match self {
            MoveDirection::Forward => axes.forward,
            MoveDirection::Backward => -axes.forward,
            MoveDirection::Right => axes.right,
            MoveDirection::Left => -axes.right,
            MoveDirection::Up => Vec3::Z,
            MoveDirection::Down => Vec3::NEG_Z,
        }
    }
}

/// An orientation change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateIntent {
    /// Advance to the next face preset
    Cycle,
    /// Jump straight to a face preset
    SelectFace(FacePreset),
    /// Spin 45 degrees around the vertical axis
    Spin(SpinDirection),
}

/// One unit of work for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushIntent {
    /// Keyboard move; `precision` is the held precision modifier
    Move {
        direction: MoveDirection,
        precision: bool,
    },
    /// Grow (`+1`) or shrink (`-1`) the tile size with wraparound
    ChangeSize(i32),
    Rotate(RotateIntent),
    ToggleInvert,
    ToggleSpeed,
    ToggleAuto,
    /// Place a tile at the current pose
    Commit,
    /// Remove the tile at the current pose
    Delete,
    Undo,
    Cancel,
    Finish,
}
