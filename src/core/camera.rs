//! Main camera and the side-view preset.
//!
//! The camera is driven by `bevy_panorbit_camera` around the world origin.
//! The side view looks along -X from `(distance, 0, 0)`, i.e. edge-on to
//! the ecliptic plane.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::config::SceneConfig;

/// Marker for the main 3D camera.
#[derive(Component)]
pub struct MainCamera;

/// Orbit-camera parameters around a focus point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraPose {
    /// World position of the camera when focused on the origin.
    pub fn translation(&self) -> Vec3 {
        Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0) * Vec3::new(0.0, 0.0, self.radius)
    }
}

/// Pose placing the camera on +X at `distance`, level with the ecliptic.
pub fn side_view_pose(distance: f32) -> CameraPose {
    CameraPose {
        radius: distance,
        yaw: FRAC_PI_2,
        pitch: 0.0,
    }
}

/// Reset a pan-orbit camera to `pose`, recentered on the origin.
pub fn reset_to_pose(camera: &mut PanOrbitCamera, pose: CameraPose) {
    camera.target_focus = Vec3::ZERO;
    camera.target_radius = pose.radius;
    camera.target_yaw = pose.yaw;
    camera.target_pitch = pose.pitch;
    camera.force_update = true;
}

pub fn spawn_camera(mut commands: Commands, config: Res<SceneConfig>) {
    let pose = side_view_pose(config.camera.side_view_distance);

    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(pose.radius),
        yaw: Some(pose.yaw),
        pitch: Some(pose.pitch),
        force_update: true,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.camera.fov_deg.to_radians(),
            near: config.camera.near,
            far: config.camera.far,
            ..default()
        }),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        pan_orbit,
        MainCamera,
        Transform::from_translation(pose.translation()).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Main Camera"),
    ));
}
