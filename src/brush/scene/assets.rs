//! Procedural tile prototypes: cubes for the preview volume, flat squares for
//! placed tiles. Inverted variants use the same shapes wound inside-out.

use std::collections::BTreeSet;

use super::{AssetProvider, TilePrototypes};
use crate::brush::error::AssetError;
use crate::brush::mesh::TileMesh;
use crate::world::TileSize;

/// Generates prototypes on demand.
#[derive(Debug, Clone)]
pub struct ProceduralTileAssets {
    inverted: bool,
    missing: BTreeSet<TileSize>,
}

impl Default for ProceduralTileAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl ProceduralTileAssets {
    /// All four sizes with inverted variants.
    pub fn new() -> Self {
        Self {
            inverted: true,
            missing: BTreeSet::new(),
        }
    }

    /// Enable or disable the inverted variants.
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Pretend the prototypes for `size` are missing.
    pub fn without_size(mut self, size: TileSize) -> Self {
        self.missing.insert(size);
        self
    }
}

impl AssetProvider for ProceduralTileAssets {
    fn prototypes(&self, size: TileSize, inverted: bool) -> Result<TilePrototypes, AssetError> {
        if self.missing.contains(&size) || (inverted && !self.inverted) {
            return Err(AssetError::Missing { size, inverted });
        }

        let volume = TileMesh::cube(size.length());
        let surface = TileMesh::plane(size.length());
        Ok(if inverted {
            TilePrototypes {
                volume: volume.flipped(),
                surface: surface.flipped(),
            }
        } else {
            TilePrototypes { volume, surface }
        })
    }
}
