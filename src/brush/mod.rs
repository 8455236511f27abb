//! Tile Brush
//!
//! The placement core: face orientation, canonical placement keys, the
//! placement ledger, the bounded undo log and the session that drives them
//! against a host scene.

pub mod config;
pub mod error;
pub mod ledger;
pub mod mesh;
pub mod orientation;
pub mod pose;
pub mod scene;
pub mod session;
pub mod status;
pub mod undo;

pub use config::BrushConfig;
pub use error::{AssetError, BrushError, ConfigError, SceneError};
pub use ledger::PlacementLedger;
pub use mesh::TileMesh;
pub use orientation::{FacePreset, OrientationState, SpinDirection};
pub use pose::{PlacementKey, PreviewPose};
pub use scene::{
    AssetProvider, MemoryScene, ObjectId, ProceduralTileAssets, SceneLinker, TileLibrary,
    TilePrototypes, TileTransform,
};
pub use session::{MoveOutcome, SessionFlow, SessionSummary, TileBrushSession};
pub use status::{SessionState, SessionStatus, StatusSink};
pub use undo::{StructureSnapshot, UNDO_LIMIT, UndoLog, UndoSnapshot};
