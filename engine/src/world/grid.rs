//! Grid Snapping Module
//!
//! Tile sizes, movement speed modes and the size-dependent snapping grids.
//!
//! ## Grids
//! Step size and snap grid are separate functions of the active mode so that
//! adjacent tiles of different sizes still meet on shared edges:
//! - Normal: 0.5/1.0 tiles snap to quarter units, 2.0 to half units, 4.0 to whole units
//! - Fast: each tile snaps to its own footprint (1.0 tiles sit on the 0.5 offset lattice,
//!   4.0 tiles on even integers)
//! - Precision: no snapping at all
//!
//! Z is the vertical axis.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Horizontal/vertical step in Normal mode, independent of tile size.
pub const NORMAL_STEP: f32 = 0.5;

/// Step used while the precision modifier is held.
pub const PRECISION_STEP: f32 = 0.1;

/// Edge lengths of the four tile sizes, indexed by [`TileSize::index`].
pub const TILE_SIZES: [f32; 4] = [0.5, 1.0, 2.0, 4.0];

// ============================================================================
// TILE SIZE
// ============================================================================

/// One of the four discrete tile scales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TileSize {
    /// 0.5 x 0.5 units
    Half,
    /// 1 x 1 unit
    One,
    /// 2 x 2 units
    #[default]
    Two,
    /// 4 x 4 units
    Four,
}

impl TileSize {
    /// All sizes in ascending order.
    pub const ALL: [TileSize; 4] = [TileSize::Half, TileSize::One, TileSize::Two, TileSize::Four];

    /// Position of this size in [`TileSize::ALL`].
    pub fn index(self) -> usize {
        match self {
            TileSize::Half => 0,
            TileSize::One => 1,
            TileSize::Two => 2,
            TileSize::Four => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Look up the size whose edge length matches `length` exactly.
    pub fn from_length(length: f32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.length() == length)
    }

    /// Edge length in world units.
    pub fn length(self) -> f32 {
        TILE_SIZES[self.index()]
    }

    /// Half the edge length (distance from volume center to a face).
    pub fn half(self) -> f32 {
        self.length() * 0.5
    }

    /// Step through the sizes with wraparound (`direction > 0` grows, `< 0` shrinks).
    pub fn cycle(self, direction: i32) -> Self {
        let count = Self::ALL.len() as i32;
        let next = (self.index() as i32 + direction.signum()).rem_euclid(count);
        Self::ALL[next as usize]
    }

    /// Display label, e.g. `"2x2"`.
    pub fn label(self) -> &'static str {
        match self {
            TileSize::Half => "0.5x0.5",
            TileSize::One => "1x1",
            TileSize::Two => "2x2",
            TileSize::Four => "4x4",
        }
    }
}

// ============================================================================
// SPEED MODE
// ============================================================================

/// Movement speed mode.
///
/// Normal and Fast are the persistent modes; Precision is only ever active
/// while its modifier is held and replaces whichever persistent mode is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedMode {
    #[default]
    Normal,
    Fast,
    Precision,
}

impl SpeedMode {
    /// The mode in effect when the precision modifier is (or isn't) held.
    pub fn with_precision(self, precision_held: bool) -> Self {
        if precision_held { SpeedMode::Precision } else { self }
    }

    /// Swap Normal and Fast. Precision has no persistent counterpart and maps to Normal.
    pub fn toggled(self) -> Self {
        match self {
            SpeedMode::Normal => SpeedMode::Fast,
            SpeedMode::Fast | SpeedMode::Precision => SpeedMode::Normal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeedMode::Normal => "NORMAL",
            SpeedMode::Fast => "FAST",
            SpeedMode::Precision => "PRECISION",
        }
    }
}

// ============================================================================
// GRID SNAPPER
// ============================================================================

/// A one-dimensional lattice: grid lines at `offset + k * spacing`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub spacing: f32,
    pub offset: f32,
}

impl GridSpec {
    pub const fn new(spacing: f32, offset: f32) -> Self {
        Self { spacing, offset }
    }

    /// Round a coordinate to the nearest grid line.
    pub fn snap_axis(&self, value: f32) -> f32 {
        ((value - self.offset) / self.spacing).round() * self.spacing + self.offset
    }
}

/// The snapping lattice for a size in a mode, or `None` when the mode never snaps.
pub fn grid_for(size: TileSize, mode: SpeedMode) -> Option<GridSpec> {
    match mode {
        SpeedMode::Precision => None,
        SpeedMode::Normal => Some(match size {
            TileSize::Half | TileSize::One => GridSpec::new(0.25, 0.0),
            TileSize::Two => GridSpec::new(0.5, 0.0),
            TileSize::Four => GridSpec::new(1.0, 0.0),
        }),
        SpeedMode::Fast => Some(match size {
            TileSize::Half => GridSpec::new(0.25, 0.0),
            TileSize::One => GridSpec::new(1.0, 0.5),
            TileSize::Two => GridSpec::new(1.0, 0.0),
            TileSize::Four => GridSpec::new(2.0, 0.0),
        }),
    }
}

/// Snap all three axes to the grid of `size` in `mode`.
///
/// Precision mode returns the point unchanged.
pub fn snap(point: Vec3, size: TileSize, mode: SpeedMode) -> Vec3 {
    match grid_for(size, mode) {
        Some(grid) => Vec3::new(
            grid.snap_axis(point.x),
            grid.snap_axis(point.y),
            grid.snap_axis(point.z),
        ),
        None => point,
    }
}

/// Snap X and Y only; Z is preserved.
pub fn snap_horizontal(point: Vec3, size: TileSize, mode: SpeedMode) -> Vec3 {
    match grid_for(size, mode) {
        Some(grid) => Vec3::new(grid.snap_axis(point.x), grid.snap_axis(point.y), point.z),
        None => point,
    }
}

/// Distance moved per keyboard step. Vertical steps use the same value.
pub fn step_size(size: TileSize, mode: SpeedMode) -> f32 {
    match mode {
        SpeedMode::Normal => NORMAL_STEP,
        SpeedMode::Fast => size.length(),
        SpeedMode::Precision => PRECISION_STEP,
    }
}

/// Whether keyboard moves in `mode` are followed by an X/Y snap.
///
/// Fast moves already advance by a whole footprint and Precision never snaps.
pub fn snaps_after_move(mode: SpeedMode) -> bool {
    mode == SpeedMode::Normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_cycle_wraps() {
        assert_eq!(TileSize::Four.cycle(1), TileSize::Half);
        assert_eq!(TileSize::Half.cycle(-1), TileSize::Four);
        assert_eq!(TileSize::Two.cycle(1), TileSize::Four);
        assert_eq!(TileSize::Two.cycle(-3), TileSize::One); // only the sign matters
    }

    #[test]
    fn test_size_lookup() {
        assert_eq!(TileSize::from_index(2), Some(TileSize::Two));
        assert_eq!(TileSize::from_index(4), None);
        assert_eq!(TileSize::from_length(0.5), Some(TileSize::Half));
        assert_eq!(TileSize::from_length(3.0), None);
        assert_eq!(TileSize::Four.half(), 2.0);
    }

    #[test]
    fn test_normal_snap_tables() {
        let p = Vec3::new(0.3, 0.62, 1.13);
        assert_eq!(snap(p, TileSize::Half, SpeedMode::Normal), Vec3::new(0.25, 0.5, 1.25));
        assert_eq!(snap(p, TileSize::One, SpeedMode::Normal), Vec3::new(0.25, 0.5, 1.25));
        assert_eq!(snap(p, TileSize::Two, SpeedMode::Normal), Vec3::new(0.5, 0.5, 1.0));
        assert_eq!(snap(p, TileSize::Four, SpeedMode::Normal), Vec3::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_fast_snap_tables() {
        let p = Vec3::new(0.3, 1.2, -0.9);
        assert_eq!(snap(p, TileSize::Half, SpeedMode::Fast), Vec3::new(0.25, 1.25, -1.0));
        assert_eq!(snap(p, TileSize::One, SpeedMode::Fast), Vec3::new(0.5, 1.5, -0.5));
        assert_eq!(snap(p, TileSize::Two, SpeedMode::Fast), Vec3::new(0.0, 1.0, -1.0));
        assert_eq!(snap(p, TileSize::Four, SpeedMode::Fast), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_precision_is_identity() {
        let p = Vec3::new(0.123, -4.567, 8.9);
        for size in TileSize::ALL {
            assert_eq!(snap(p, size, SpeedMode::Precision), p);
            assert_eq!(snap_horizontal(p, size, SpeedMode::Precision), p);
        }
    }

    #[test]
    fn test_snap_idempotent() {
        let samples = [
            Vec3::new(0.37, -1.74, 2.51),
            Vec3::new(-3.3, 7.77, -0.01),
            Vec3::new(12.49, 0.75, 5.5),
        ];
        for size in TileSize::ALL {
            for mode in [SpeedMode::Normal, SpeedMode::Fast] {
                for p in samples {
                    let once = snap(p, size, mode);
                    assert_eq!(snap(once, size, mode), once, "{size:?} {mode:?} {p:?}");
                }
            }
        }
    }

    #[test]
    fn test_horizontal_snap_keeps_z() {
        let p = Vec3::new(1.3, 2.7, 0.33);
        let snapped = snap_horizontal(p, TileSize::Four, SpeedMode::Normal);
        assert_eq!(snapped, Vec3::new(1.0, 3.0, 0.33));
    }

    #[test]
    fn test_step_sizes() {
        for size in TileSize::ALL {
            assert_eq!(step_size(size, SpeedMode::Normal), NORMAL_STEP);
            assert_eq!(step_size(size, SpeedMode::Fast), size.length());
            assert_eq!(step_size(size, SpeedMode::Precision), PRECISION_STEP);
        }
    }

    #[test]
    fn test_precision_overrides_persistent_mode() {
        assert_eq!(SpeedMode::Fast.with_precision(true), SpeedMode::Precision);
        assert_eq!(SpeedMode::Fast.with_precision(false), SpeedMode::Fast);
        assert_eq!(SpeedMode::Normal.toggled(), SpeedMode::Fast);
        assert_eq!(SpeedMode::Fast.toggled(), SpeedMode::Normal);
    }
}
