//! World Module
//!
//! World-space sizing and snapping rules shared by the preview and the
//! placement ledger. Z is up; one unit is one tile-texture meter.

pub mod grid;

pub use grid::{
    GridSpec, NORMAL_STEP, PRECISION_STEP, SpeedMode, TILE_SIZES, TileSize, grid_for, snap,
    snap_horizontal, snaps_after_move, step_size,
};
