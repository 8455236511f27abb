//! Camera Module
//!
//! Turns host camera data into the two things the brush needs: cardinal
//! movement axes and pointer rays onto the preview plane.
//! This module is host-agnostic - the host supplies camera state through
//! [`CameraAccessor`].

pub mod raycast;
pub mod view_axes;

use glam::{Mat3, Vec2};

pub use raycast::{Ray, intersect_horizontal_plane};
pub use view_axes::ViewAxes;

/// Read access to the host's viewport camera.
pub trait CameraAccessor {
    /// Camera-to-world rotation, or `None` when no 3D view is available.
    fn view_rotation(&self) -> Option<Mat3>;

    /// World-space ray through a screen position, or `None` when it cannot be computed.
    fn screen_ray(&self, screen: Vec2) -> Option<Ray>;
}

/// A camera with a fixed orientation, for headless hosts and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedCamera {
    pub rotation: Option<Mat3>,
    /// Ray returned for every screen position
    pub ray: Option<Ray>,
}

impl CameraAccessor for FixedCamera {
    fn view_rotation(&self) -> Option<Mat3> {
        self.rotation
    }

    fn screen_ray(&self, _screen: Vec2) -> Option<Ray> {
        self.ray
    }
}
