//! Orbiting body state

use bevy::prelude::*;

/// Kinematic state of the body travelling along the orbit.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitalBody {
    pub position: Vec3,
    /// Self-rotation about the tilted axis, kept in `[0, 2π)`.
    pub spin: f32,
    /// Tilt of the rotation axis about world Z, relative to the orbit normal.
    pub axial_tilt: f32,
    pub phase: f32,
}

impl OrbitalBody {
    pub fn new(position: Vec3, axial_tilt: f32) -> Self {
        Self {
            position,
            spin: 0.0,
            axial_tilt,
            phase: 0.0,
        }
    }

    /// Orientation of the rotation axis, without spin.
    pub fn tilt_rotation(&self) -> Quat {
        Quat::from_rotation_z(self.axial_tilt)
    }

    /// Full orientation: spin about local Y, then tilt.
    pub fn rotation(&self) -> Quat {
        self.tilt_rotation() * Quat::from_rotation_y(self.spin)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).with_rotation(self.rotation())
    }
}

/// Marker for decorations that follow the orbiting body (equatorial plane,
/// rotation axis).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct AttachedToBody;
