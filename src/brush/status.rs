//! Session Status
//!
//! Read-only reflection of the session for HUDs and status bars. The session
//! pushes a fresh [`SessionStatus`] to its sink after every successful
//! operation; nothing here feeds back into the session.

use std::fmt;

use glam::Vec3;

use super::orientation::FacePreset;
use crate::world::{SpeedMode, TileSize};

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Invoked,
    Running,
    Cancelled,
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionStatus {
    pub state: SessionState,
    /// Tiles currently in the ledger
    pub tile_count: usize,
    pub face: FacePreset,
    /// Vertical spin, 0..360 degrees
    pub spin_degrees: f32,
    pub size: TileSize,
    /// Persistent speed mode (Normal or Fast)
    pub speed: SpeedMode,
    pub auto_mode: bool,
    pub inverted: bool,
    /// Snapshots available to undo
    pub undo_depth: usize,
    /// Preview volume center
    pub position: Vec3,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tiles: {} | Face: {} | Spin: {:.0} | Size: {} | Speed: {}",
            self.tile_count,
            self.face.name(),
            self.spin_degrees,
            self.size.label(),
            self.speed.label(),
        )?;
        if self.auto_mode {
            write!(f, " | AUTO")?;
        }
        if self.inverted {
            write!(f, " | INVERTED")?;
        }
        write!(f, " | Undo: {}", self.undo_depth)
    }
}

/// Receives status updates.
pub trait StatusSink {
    fn publish(&mut self, status: &SessionStatus);
}

impl<F: FnMut(&SessionStatus)> StatusSink for F {
    fn publish(&mut self, status: &SessionStatus) {
        self(status)
    }
}
