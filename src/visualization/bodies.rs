//! Sun and earth meshes.

use bevy::prelude::*;

use crate::config::SceneConfig;
use crate::orbital::{EllipticalOrbit, OrbitalBody};

const SPHERE_SECTORS: u32 = 32;
const SPHERE_STACKS: u32 = 32;

/// Marker component for the sun entity
#[derive(Component)]
pub struct Sun;

/// Marker component for the earth entity
#[derive(Component)]
pub struct Earth;

/// Unlit textured material; the scene has no light sources.
fn textured_material(asset_server: &AssetServer, path: &str) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(asset_server.load(path.to_string())),
        unlit: true,
        ..default()
    }
}

/// The earth before the first tick: phase zero, no spin.
pub fn initial_earth_state(config: &SceneConfig, orbit: &EllipticalOrbit) -> OrbitalBody {
    OrbitalBody::new(orbit.position_at(0.0), config.axial_tilt_rad())
}

pub fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
    orbit: Res<EllipticalOrbit>,
) {
    let sun_mesh = Sphere::new(config.sun_radius)
        .mesh()
        .uv(SPHERE_SECTORS, SPHERE_STACKS);
    commands.spawn((
        Mesh3d(meshes.add(sun_mesh)),
        MeshMaterial3d(materials.add(textured_material(&asset_server, &config.sun_texture))),
        Transform::from_translation(orbit.primary_position()),
        Sun,
        Name::new("Sun"),
    ));

    let earth = initial_earth_state(&config, &orbit);
    let earth_mesh = Sphere::new(config.earth_radius)
        .mesh()
        .uv(SPHERE_SECTORS, SPHERE_STACKS);
    commands.spawn((
        Mesh3d(meshes.add(earth_mesh)),
        MeshMaterial3d(materials.add(textured_material(&asset_server, &config.earth_texture))),
        earth.transform(),
        earth,
        Earth,
        Name::new("Earth"),
    ));

    info!(
        "Spawned sun at {:?} and earth at {:?} (a = {}, b = {}, c = {:.3})",
        orbit.primary_position(),
        earth.position,
        orbit.semi_major_axis(),
        orbit.semi_minor_axis(),
        orbit.focal_offset()
    );
}
