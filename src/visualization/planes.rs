//! Ecliptic and equatorial planes.
//!
//! Both are thin translucent boxes. The equatorial plane shares the earth's
//! tilt and follows it along the orbit.

use bevy::prelude::*;

use crate::config::SceneConfig;
use crate::orbital::{AttachedToBody, EllipticalOrbit};
use crate::ui::{Guide, GuideKind};
use crate::visualization::bodies::initial_earth_state;

const PLANE_THICKNESS: f32 = 0.01;
const PLANE_ALPHA: f32 = 0.5;

pub const ECLIPTIC_COLOR: Color = Color::srgba(1.0, 1.0, 0.0, PLANE_ALPHA);
pub const EQUATOR_COLOR: Color = Color::srgba(1.0, 0.647, 0.0, PLANE_ALPHA);

fn translucent(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

pub fn spawn_planes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
    orbit: Res<EllipticalOrbit>,
) {
    let extent = config.ecliptic_plane_extent;
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(extent, PLANE_THICKNESS, extent))),
        MeshMaterial3d(materials.add(translucent(ECLIPTIC_COLOR))),
        Transform::IDENTITY,
        Visibility::Inherited,
        GuideKind(Guide::EclipticPlane),
        Name::new("Ecliptic Plane"),
    ));

    let earth = initial_earth_state(&config, &orbit);
    let extent = config.equator_plane_extent;
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(extent, PLANE_THICKNESS, extent))),
        MeshMaterial3d(materials.add(translucent(EQUATOR_COLOR))),
        Transform::from_translation(earth.position).with_rotation(earth.tilt_rotation()),
        Visibility::Inherited,
        AttachedToBody,
        GuideKind(Guide::EquatorPlane),
        Name::new("Equator Plane"),
    ));
}
