//! Tile Brush Engine Library
//!
//! The placement core of a keyboard-driven 3D tile brush: a preview volume is
//! moved through the scene, snapped to size-dependent grids, turned to one of
//! six face orientations and committed into a single connected structure.
//!
//! # Modules
//!
//! - [`world`] - Tile sizes, speed modes and grid snapping
//! - [`camera`] - View-relative movement axes and ray/plane helpers
//! - [`input`] - Platform-agnostic key chords, bindings and pointer tracking
//! - [`brush`] - Orientation, placement ledger, undo log and the session
//!
//! # Example
//!
//! ```ignore
//! use tile_brush_engine::brush::{BrushConfig, MemoryScene, ProceduralTileAssets, TileBrushSession};
//! use tile_brush_engine::input::MoveDirection;
//! use glam::Vec3;
//!
//! let assets = ProceduralTileAssets::default();
//! let mut scene = MemoryScene::new();
//! let mut session = TileBrushSession::invoke(BrushConfig::default(), &assets, &mut scene, Vec3::ZERO)?;
//!
//! session.commit()?;
//! session.move_preview(MoveDirection::Forward, false)?;
//! session.commit()?;
//! let summary = session.finish();
//! ```

pub mod camera;
pub mod input;
pub mod world;

// Tool-specific modules (located in src/brush/ directory)
#[path = "../../src/brush/mod.rs"]
pub mod brush;

// Re-export world types for convenience
pub use world::{SpeedMode, TileSize, snap, snap_horizontal, step_size};
// Re-export commonly used camera and input types
pub use camera::{CameraAccessor, Ray, ViewAxes};
pub use input::{BrushAction, BrushIntent, KeyBindings, KeyChord, KeyCode, MoveDirection};
// Re-export the session entry points
pub use brush::{BrushConfig, BrushError, TileBrushSession};
