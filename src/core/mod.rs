//! Camera setup shared by the scene and the control panel.

use bevy::prelude::*;

pub mod camera;

pub use camera::{MainCamera, reset_to_pose, side_view_pose};

/// Plugin spawning the main camera
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, camera::spawn_camera);
    }
}
