//! Brush Errors
//!
//! Every session operation returns [`BrushError`] on failure. Apart from
//! [`BrushError::MissingAssets`] (which aborts startup) all of them are
//! recoverable: the session state is unchanged and the `Display` text is the
//! reason to show the user.

use thiserror::Error;

use super::pose::PlacementKey;
use super::scene::ObjectId;
use crate::world::TileSize;

#[derive(Debug, Error)]
pub enum BrushError {
    #[error("A tile already exists at {key}")]
    Occupied { key: PlacementKey },
    #[error("No tile at {key}")]
    NoTileAtPose { key: PlacementKey },
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("Inverted tiles are not available")]
    InvertUnavailable,
    #[error("Speed is locked to FAST while auto-mode is on")]
    SpeedLocked,
    #[error("Tile assets unavailable: {0}")]
    MissingAssets(#[from] AssetError),
    #[error("Scene operation failed: {0}")]
    Scene(#[from] SceneError),
}

impl BrushError {
    /// Whether the session can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, BrushError::MissingAssets(_))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssetError {
    #[error("missing {} prototype for size {}", variant_name(.inverted), .size.label())]
    Missing { size: TileSize, inverted: bool },
    #[error("invalid prototype for size {}: {reason}", .size.label())]
    Invalid { size: TileSize, reason: String },
}

fn variant_name(inverted: &bool) -> &'static str {
    if *inverted { "inverted" } else { "normal" }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("unknown scene object {0}")]
    UnknownObject(ObjectId),
    #[error("joining {tile} into {target} failed: {reason}")]
    JoinFailed {
        target: ObjectId,
        tile: ObjectId,
        reason: String,
    },
    #[error("scene rejected the operation: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
