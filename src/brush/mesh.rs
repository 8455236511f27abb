//! Tile Mesh Geometry
//!
//! Minimal quad-mesh container for tile prototypes and the joined structure.
//! The only topology operation is welding coincident vertices after a join.

use std::collections::HashMap;

use glam::{Affine3A, IVec3, Vec3};

/// Smallest weld grid cell, so large coordinates stay inside `i32` cells.
const MIN_WELD_CELL: f32 = 1.0e-4;

/// A quad mesh: vertex positions plus faces of four vertex indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileMesh {
    /// Vertex positions
    pub vertices: Vec<Vec3>,
    /// Quads, counter-clockwise when viewed from the front
    pub faces: Vec<[u32; 4]>,
}

impl TileMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// A flat square of edge `size` in the local XY plane, centered on the
    /// origin and facing -Z (the placement-face side of a preview volume).
    pub fn plane(size: f32) -> Self {
        let h = size * 0.5;
        Self {
            vertices: vec![
                Vec3::new(-h, -h, 0.0),
                Vec3::new(-h, h, 0.0),
                Vec3::new(h, h, 0.0),
                Vec3::new(h, -h, 0.0),
            ],
            faces: vec![[0, 1, 2, 3]],
        }
    }

    /// An axis-aligned cube of edge `size` centered on the origin, faces outward.
    pub fn cube(size: f32) -> Self {
        let h = size * 0.5;
        let vertices = vec![
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(-h, -h, h),
            Vec3::new(h, -h, h),
            Vec3::new(h, h, h),
            Vec3::new(-h, h, h),
        ];
        let faces = vec![
            [0, 3, 2, 1], // -Z
            [4, 5, 6, 7], // +Z
            [0, 1, 5, 4], // -Y
            [2, 3, 7, 6], // +Y
            [1, 2, 6, 5], // +X
            [0, 4, 7, 3], // -X
        ];
        Self { vertices, faces }
    }

    /// Same geometry with every face wound the other way.
    pub fn flipped(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            faces: self.faces.iter().map(|&[a, b, c, d]| [a, d, c, b]).collect(),
        }
    }

    /// Copy with every vertex passed through `transform`.
    pub fn transformed(&self, transform: Affine3A) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| transform.transform_point3(*v)).collect(),
            faces: self.faces.clone(),
        }
    }

    /// Append another mesh's vertices and faces (no welding).
    pub fn append(&mut self, other: &TileMesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.faces
            .extend(other.faces.iter().map(|face| face.map(|i| i + base)));
    }

    /// Merge vertices closer than `tolerance`, remapping faces.
    ///
    /// Faces left with fewer than three distinct corners are dropped.
    /// Returns the number of vertices removed.
    pub fn weld_vertices(&mut self, tolerance: f32) -> usize {
        let before = self.vertices.len();
        let cell_size = tolerance.max(MIN_WELD_CELL);
        let cell_of = |v: Vec3| -> IVec3 { (v / cell_size).floor().as_ivec3() };

        let mut grid: HashMap<IVec3, Vec<u32>> = HashMap::new();
        let mut welded: Vec<Vec3> = Vec::with_capacity(before);
        let mut remap: Vec<u32> = Vec::with_capacity(before);

        for &vertex in &self.vertices {
            let cell = cell_of(vertex);
            let mut found = None;
            'search: for dx in -1..=1 {
                for dy in -1..=1 {
                    for dz in -1..=1 {
                        let Some(bucket) = grid.get(&cell.saturating_add(IVec3::new(dx, dy, dz))) else {
                            continue;
                        };
                        for &candidate in bucket {
                            if welded[candidate as usize].distance(vertex) <= tolerance {
                                found = Some(candidate);
                                break 'search;
                            }
                        }
                    }
                }
            }

            let index = match found {
                Some(index) => index,
                None => {
                    let index = welded.len() as u32;
                    welded.push(vertex);
                    grid.entry(cell).or_default().push(index);
                    index
                }
            };
            remap.push(index);
        }

        self.vertices = welded;
        self.faces = self
            .faces
            .iter()
            .map(|face| face.map(|i| remap[i as usize]))
            .filter(|face| {
                let mut distinct = face.to_vec();
                distinct.sort_unstable();
                distinct.dedup();
                distinct.len() >= 3
            })
            .collect();

        before - self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v))),
        )
    }
}
