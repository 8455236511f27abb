//! Raycast Module
//!
//! Resolves a pointer ray into a point on the horizontal plane the preview
//! currently sits on. Z is up.

use glam::Vec3;

/// Rays closer than this to parallel with the plane never hit it.
const PARALLEL_EPSILON: f32 = 1.0e-4;

/// A ray in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Ray start (camera position or near-plane point)
    pub origin: Vec3,
    /// Direction (need not be normalized)
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point along the ray at parameter `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Intersect a ray with the horizontal plane `z = height`.
///
/// # Returns
/// * `Some(Vec3)` - The hit point (its Z equals `height`)
/// * `None` - The ray is parallel to the plane or the plane is behind the origin
pub fn intersect_horizontal_plane(ray: &Ray, height: f32) -> Option<Vec3> {
    if ray.direction.z.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = (height - ray.origin.z) / ray.direction.z;
    if t < 0.0 {
        return None;
    }

    let mut hit = ray.at(t);
    hit.z = height;
    Some(hit)
}
