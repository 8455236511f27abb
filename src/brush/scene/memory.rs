//! In-memory scene: named objects with local meshes and transforms.
//!
//! Used by the headless driver and by tests. Joins bake the tile into the
//! target's local frame and weld vertices, like a host editor's join followed
//! by a merge-by-distance.

use std::collections::BTreeMap;

use tracing::debug;

use super::{ObjectId, SceneLinker, TileTransform};
use crate::brush::error::SceneError;
use crate::brush::mesh::TileMesh;

/// One linked object.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    /// Geometry in object-local space
    pub mesh: TileMesh,
    pub transform: TileTransform,
}

impl SceneObject {
    /// Geometry in world space.
    pub fn world_mesh(&self) -> TileMesh {
        self.mesh.transformed(self.transform.affine())
    }
}

#[derive(Debug, Default)]
pub struct MemoryScene {
    objects: BTreeMap<ObjectId, SceneObject>,
    next_id: u32,
    failing_joins: usize,
    failing_instances: usize,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` joins fail, leaving both objects in place.
    pub fn fail_next_joins(&mut self, count: usize) {
        self.failing_joins = count;
    }

    /// Make the next `count` instantiations fail.
    pub fn fail_next_instantiations(&mut self, count: usize) {
        self.failing_instances = count;
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Ids of every object with the given name.
    pub fn objects_named(&self, name: &str) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|(_, object)| object.name == name)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn object_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject, SceneError> {
        self.objects.get_mut(&id).ok_or(SceneError::UnknownObject(id))
    }
}

impl SceneLinker for MemoryScene {
    fn instantiate(
        &mut self,
        name: &str,
        mesh: &TileMesh,
        transform: TileTransform,
    ) -> Result<ObjectId, SceneError> {
        if self.failing_instances > 0 {
            self.failing_instances -= 1;
            return Err(SceneError::Rejected(format!("cannot link {name}")));
        }
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.insert(
            id,
            SceneObject {
                name: name.to_string(),
                mesh: mesh.clone(),
                transform,
            },
        );
        debug!("Linked {name} as {id}");
        Ok(id)
    }

    fn set_transform(&mut self, id: ObjectId, transform: TileTransform) -> Result<(), SceneError> {
        self.object_mut(id)?.transform = transform;
        Ok(())
    }

    fn replace_mesh(&mut self, id: ObjectId, mesh: TileMesh) -> Result<(), SceneError> {
        self.object_mut(id)?.mesh = mesh;
        Ok(())
    }

    fn remove(&mut self, id: ObjectId) -> Result<(), SceneError> {
        self.objects
            .remove(&id)
            .map(|_| ())
            .ok_or(SceneError::UnknownObject(id))
    }

    fn join(&mut self, target: ObjectId, tile: ObjectId, weld_tolerance: f32) -> Result<(), SceneError> {
        if target == tile {
            return Err(SceneError::Rejected(format!("cannot join {target} into itself")));
        }
        if !self.objects.contains_key(&target) {
            return Err(SceneError::UnknownObject(target));
        }
        if !self.objects.contains_key(&tile) {
            return Err(SceneError::UnknownObject(tile));
        }
        if self.failing_joins > 0 {
            self.failing_joins -= 1;
            return Err(SceneError::JoinFailed {
                target,
                tile,
                reason: "injected failure".to_string(),
            });
        }

        let source = self.objects.remove(&tile).ok_or(SceneError::UnknownObject(tile))?;
        let target_object = self.object_mut(target)?;
        let to_local = target_object.transform.affine().inverse();
        let baked = source.mesh.transformed(to_local * source.transform.affine());
        target_object.mesh.append(&baked);
        let welded = target_object.mesh.weld_vertices(weld_tolerance);
        debug!("Joined {tile} into {target}, welded {welded} vertices");
        Ok(())
    }

    fn mesh(&self, id: ObjectId) -> Option<TileMesh> {
        self.objects.get(&id).map(|object| object.mesh.clone())
    }

    fn transform(&self, id: ObjectId) -> Option<TileTransform> {
        self.objects.get(&id).map(|object| object.transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_join_bakes_into_target_frame() {
        let mut scene = MemoryScene::new();
        let plane = TileMesh::plane(1.0);
        let a = scene
            .instantiate("a", &plane, TileTransform::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO))
            .unwrap();
        let b = scene
            .instantiate("b", &plane, TileTransform::new(Vec3::new(11.0, 0.0, 0.0), Vec3::ZERO))
            .unwrap();

        scene.join(a, b, 0.01).unwrap();
        assert_eq!(scene.len(), 1);
        let joined = scene.object(a).unwrap();
        assert_eq!(joined.mesh.vertex_count(), 6);
        let (min, max) = joined.world_mesh().bounds().unwrap();
        assert!((min.x - 9.5).abs() < 1e-5);
        assert!((max.x - 11.5).abs() < 1e-5);
    }

    #[test]
    fn test_injected_join_failure_keeps_objects() {
        let mut scene = MemoryScene::new();
        let plane = TileMesh::plane(1.0);
        let a = scene.instantiate("a", &plane, TileTransform::default()).unwrap();
        let b = scene.instantiate("b", &plane, TileTransform::default()).unwrap();
        scene.fail_next_joins(1);
        assert!(matches!(scene.join(a, b, 0.01), Err(SceneError::JoinFailed { .. })));
        assert_eq!(scene.len(), 2);
        scene.join(a, b, 0.01).unwrap();
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_unknown_objects() {
        let mut scene = MemoryScene::new();
        assert_eq!(scene.remove(ObjectId(7)), Err(SceneError::UnknownObject(ObjectId(7))));
        assert!(scene.mesh(ObjectId(7)).is_none());
    }
}
