//! Brush Configuration
//!
//! Tunables for a brush session. `Default` matches the behaviour of the
//! interactive tool; a JSON file may override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;
use super::undo::UNDO_LIMIT;
use crate::input::DEFAULT_NUDGE_THRESHOLD;
use crate::world::TileSize;

/// Configuration for one brush session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Edge length of the initial tile size (one of 0.5, 1, 2, 4)
    pub start_size: f32,
    /// Number of placement/deletion steps that can be undone
    pub undo_limit: usize,
    /// Distance under which vertices are merged when tiles are joined
    pub weld_tolerance: f32,
    /// Pointer travel (screen units) before a precision nudge fires
    pub precision_pointer_threshold: f32,
    /// Minimum preview travel (world units) before a pointer move auto-places
    pub auto_place_min_delta: f32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            start_size: TileSize::default().length(),
            undo_limit: UNDO_LIMIT,
            weld_tolerance: 0.01,
            precision_pointer_threshold: DEFAULT_NUDGE_THRESHOLD,
            auto_place_min_delta: 0.1,
        }
    }
}

impl BrushConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Clamp out-of-range values into something a session can run with.
    pub fn sanitized(mut self) -> Self {
        if TileSize::from_length(self.start_size).is_none() {
            warn!("start_size {} is not a tile size, using 2.0", self.start_size);
            self.start_size = TileSize::default().length();
        }
        self.undo_limit = self.undo_limit.max(1);
        for value in [
            &mut self.weld_tolerance,
            &mut self.precision_pointer_threshold,
            &mut self.auto_place_min_delta,
        ] {
            if !value.is_finite() || *value < 0.0 {
                *value = 0.0;
            }
        }
        self
    }

    /// The starting tile size. Unknown lengths fall back to 2x2.
    pub fn start_tile_size(&self) -> TileSize {
        TileSize::from_length(self.start_size).unwrap_or_default()
    }
}
