//! Pointer Tracking
//!
//! Turns free pointer motion into discrete precision nudges. Small jitter
//! below the threshold is swallowed so auto-mode does not flood the session
//! with commits.

use glam::Vec2;

use super::actions::MoveDirection;

/// Default minimum pointer travel (screen units) before a precision nudge fires.
pub const DEFAULT_NUDGE_THRESHOLD: f32 = 10.0;

/// Remembers the last pointer position that produced a nudge.
#[derive(Debug, Clone, Copy)]
pub struct PointerTracker {
    last: Option<Vec2>,
    threshold: f32,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(DEFAULT_NUDGE_THRESHOLD)
    }
}

impl PointerTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            last: None,
            threshold: threshold.max(0.0),
        }
    }

    /// Feed a pointer position (screen space, +Y up).
    ///
    /// The first sample only anchors the tracker. After that a direction is
    /// returned once either axis has travelled at least the threshold; the
    /// dominant axis wins (vertical motion maps to forward/backward). The anchor
    /// only moves when a nudge fires.
    pub fn nudge(&mut self, position: Vec2) -> Option<MoveDirection> {
        let Some(last) = self.last else {
            self.last = Some(position);
            return None;
        };

        let delta = position - last;
        if delta.x.abs() < self.threshold && delta.y.abs() < self.threshold {
            return None;
        }

        self.last = Some(position);
        let direction = if delta.y.abs() > delta.x.abs() {
            if delta.y > 0.0 { MoveDirection::Forward } else { MoveDirection::Backward }
        } else if delta.x > 0.0 {
            MoveDirection::Right
        } else {
            MoveDirection::Left
        };
        Some(direction)
    }

    /// Forget the anchor (e.g. when precision is released).
    pub fn reset(&mut self) {
        self.last = None;
    }
}
