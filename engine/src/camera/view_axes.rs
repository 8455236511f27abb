//! View Axes Module
//!
//! Collapses the camera orientation onto the closest cardinal world axes so
//! keyboard movement always runs along world X or world Y, whatever the view
//! yaw or pitch.

use glam::{Mat3, Vec2, Vec3};

/// Flattened directions shorter than this are treated as having no horizontal component.
const DEGENERATE_EPSILON: f32 = 1.0e-6;

/// Movement axes derived from the current view.
///
/// Both vectors are unit vectors along world X or world Y; neither ever has a Z component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewAxes {
    /// Direction moved by "forward"
    pub forward: Vec3,
    /// Direction moved by "right"
    pub right: Vec3,
}

impl Default for ViewAxes {
    /// Forward = +Y, right = +X (used when camera data is missing or invalid).
    fn default() -> Self {
        Self {
            forward: Vec3::Y,
            right: Vec3::X,
        }
    }
}

impl ViewAxes {
    /// Project a camera-to-world rotation onto cardinal movement axes.
    ///
    /// The camera looks down its local -Z with +X to the right and +Y up.
    /// Returns [`ViewAxes::default`] when no rotation is supplied or it contains
    /// non-finite values.
    pub fn from_view_rotation(view_rotation: Option<Mat3>) -> Self {
        let Some(rotation) = view_rotation.filter(|m| m.is_finite()) else {
            return Self::default();
        };

        let forward_world = rotation * Vec3::NEG_Z;
        let right_world = rotation * Vec3::X;
        let up_world = rotation * Vec3::Y;

        // Looking straight down (or up) leaves no horizontal forward; the screen's
        // up direction is what the user reads as forward then.
        let forward = dominant_axis(forward_world.truncate())
            .or_else(|| dominant_axis(up_world.truncate()));
        let Some(forward) = forward else {
            return Self::default();
        };

        let right = match dominant_axis(right_world.truncate()) {
            Some(right) if right.dot(forward) == 0.0 => right,
            // Diagonal views can tie both vectors onto the same axis
            _ => Vec3::new(forward.y, -forward.x, 0.0),
        };

        Self { forward, right }
    }

    /// Project from a camera accessor.
    pub fn from_camera(camera: &dyn super::CameraAccessor) -> Self {
        Self::from_view_rotation(camera.view_rotation())
    }
}

/// Snap a horizontal direction to +/-X or +/-Y, whichever component is larger.
///
/// Ties go to Y. Returns `None` for a zero-length direction.
fn dominant_axis(direction: Vec2) -> Option<Vec3> {
    if direction.length_squared() < DEGENERATE_EPSILON * DEGENERATE_EPSILON {
        return None;
    }
    if direction.x.abs() > direction.y.abs() {
        Some(Vec3::new(direction.x.signum(), 0.0, 0.0))
    } else {
        Some(Vec3::new(0.0, direction.y.signum(), 0.0))
    }
}
