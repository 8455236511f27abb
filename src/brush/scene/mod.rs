//! Scene Collaborators
//!
//! The brush never owns scene geometry. It asks an [`AssetProvider`] for tile
//! prototypes once at startup and drives a [`SceneLinker`] to create, move,
//! join and remove objects in the host scene.

pub mod assets;
pub mod memory;

use std::fmt;

use glam::{Affine3A, Vec3};
use tracing::{debug, warn};

use super::error::{AssetError, SceneError};
use super::mesh::TileMesh;
use super::orientation::euler_to_matrix;
use crate::world::TileSize;

pub use assets::ProceduralTileAssets;
pub use memory::MemoryScene;

/// Scene object name of the preview volume.
pub const PREVIEW_NAME: &str = "TileBrush_Preview";
/// Scene object name of the persistent structure.
pub const STRUCTURE_NAME: &str = "TileBrush_Structure";
/// Scene object name of a tile waiting to be joined into the structure.
pub const TILE_NAME: &str = "TileBrush_Tile";

// ============================================================================
// OBJECTS
// ============================================================================

/// Handle to an object in the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Object placement: location plus XYZ Euler rotation (radians).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TileTransform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl TileTransform {
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    /// Local-to-world matrix.
    pub fn affine(&self) -> Affine3A {
        Affine3A::from_mat3_translation(euler_to_matrix(self.rotation), self.position)
    }
}

// ============================================================================
// ASSETS
// ============================================================================

/// Prototype geometry for one size/variant.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePrototypes {
    /// Preview volume, centered on its origin
    pub volume: TileMesh,
    /// Flat placement surface, centered on its origin in the local XY plane
    pub surface: TileMesh,
}

/// Supplies tile prototypes.
pub trait AssetProvider {
    /// Prototypes for one size, normal or inverted.
    fn prototypes(&self, size: TileSize, inverted: bool) -> Result<TilePrototypes, AssetError>;
}

/// Prototypes for all four sizes, loaded once per session.
///
/// Normal variants are required. Inverted variants are all-or-nothing: if
/// any size lacks one, inversion is disabled for the session.
#[derive(Debug, Clone)]
pub struct TileLibrary {
    normal: [TilePrototypes; 4],
    inverted: Option<[TilePrototypes; 4]>,
}

impl TileLibrary {
    pub fn load(provider: &dyn AssetProvider) -> Result<Self, AssetError> {
        let normal = load_set(provider, false)?;
        let inverted = match load_set(provider, true) {
            Ok(set) => Some(set),
            Err(err) => {
                warn!("Inverted tiles disabled: {err}");
                None
            }
        };
        debug!("Loaded tile library (inverted: {})", inverted.is_some());
        Ok(Self { normal, inverted })
    }

    pub fn has_inverted(&self) -> bool {
        self.inverted.is_some()
    }

    /// Prototypes for a size. Falls back to the normal variant if inverted
    /// ones were not loaded.
    pub fn get(&self, size: TileSize, inverted: bool) -> &TilePrototypes {
        let set = match (&self.inverted, inverted) {
            (Some(set), true) => set,
            _ => &self.normal,
        };
        &set[size.index()]
    }
}

fn load_set(provider: &dyn AssetProvider, inverted: bool) -> Result<[TilePrototypes; 4], AssetError> {
    let load = |size: TileSize| -> Result<TilePrototypes, AssetError> {
        let prototypes = provider.prototypes(size, inverted)?;
        if prototypes.volume.is_empty() || prototypes.surface.is_empty() {
            return Err(AssetError::Invalid {
                size,
                reason: "prototype has no faces".to_string(),
            });
        }
        Ok(prototypes)
    };
    Ok([
        load(TileSize::Half)?,
        load(TileSize::One)?,
        load(TileSize::Two)?,
        load(TileSize::Four)?,
    ])
}

// ============================================================================
// SCENE LINKER
// ============================================================================

/// Host scene operations used by the brush session.
pub trait SceneLinker {
    /// Link a copy of `mesh` into the scene.
    fn instantiate(
        &mut self,
        name: &str,
        mesh: &TileMesh,
        transform: TileTransform,
    ) -> Result<ObjectId, SceneError>;

    fn set_transform(&mut self, id: ObjectId, transform: TileTransform) -> Result<(), SceneError>;

    /// Swap an object's geometry, keeping its transform.
    fn replace_mesh(&mut self, id: ObjectId, mesh: TileMesh) -> Result<(), SceneError>;

    fn remove(&mut self, id: ObjectId) -> Result<(), SceneError>;

    /// Merge `tile` into `target` and weld vertices closer than `weld_tolerance`.
    ///
    /// On success `tile` no longer exists.
    fn join(&mut self, target: ObjectId, tile: ObjectId, weld_tolerance: f32) -> Result<(), SceneError>;

    /// Local geometry of an object.
    fn mesh(&self, id: ObjectId) -> Option<TileMesh>;

    fn transform(&self, id: ObjectId) -> Option<TileTransform>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoInverted;

    impl AssetProvider for NoInverted {
        fn prototypes(&self, size: TileSize, inverted: bool) -> Result<TilePrototypes, AssetError> {
            if inverted {
                return Err(AssetError::Missing { size, inverted });
            }
            Ok(TilePrototypes {
                volume: TileMesh::cube(size.length()),
                surface: TileMesh::plane(size.length()),
            })
        }
    }

    struct EmptyAssets;

    impl AssetProvider for EmptyAssets {
        fn prototypes(&self, _size: TileSize, _inverted: bool) -> Result<TilePrototypes, AssetError> {
            Ok(TilePrototypes {
                volume: TileMesh::new(),
                surface: TileMesh::new(),
            })
        }
    }

    #[test]
    fn test_inverted_is_optional() {
        let library = TileLibrary::load(&NoInverted).unwrap();
        assert!(!library.has_inverted());
        // Falls back to normal geometry
        assert_eq!(library.get(TileSize::One, true), library.get(TileSize::One, false));
    }

    #[test]
    fn test_empty_prototypes_are_invalid() {
        let err = TileLibrary::load(&EmptyAssets).unwrap_err();
        assert!(matches!(err, AssetError::Invalid { size: TileSize::Half, .. }));
    }

    #[test]
    fn test_transform_affine() {
        let transform = TileTransform::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        assert_eq!(transform.affine().transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
    }
}
