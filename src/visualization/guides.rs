//! Dashed guide lines: the orbit curve and the two rotation axes.

use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore, GizmoLineStyle};
use bevy::prelude::*;

use crate::config::SceneConfig;
use crate::orbital::{AttachedToBody, EllipticalOrbit};
use crate::ui::{Guide, GuideKind, UIState};
use crate::visualization::bodies::initial_earth_state;

pub const ORBIT_COLOR: Color = Color::srgba(0.984, 1.0, 0.0, 0.7);
pub const AXIS_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.7);

/// Gizmo group for guides, drawn dashed.
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct GuideGizmos;

/// Sampled orbit polyline, built once at startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct OrbitCurve {
    pub points: Vec<Vec3>,
}

/// A rotation axis of the given length, drawn along the entity's local Y.
#[derive(Component, Clone, Copy, Debug)]
pub struct AxisMarker {
    pub length: f32,
}

/// Endpoints of an axis line centred on `transform`.
pub fn axis_endpoints(transform: &Transform, length: f32) -> (Vec3, Vec3) {
    let half = transform.rotation * Vec3::Y * (length / 2.0);
    (transform.translation - half, transform.translation + half)
}

pub fn configure_guide_gizmos(mut store: ResMut<GizmoConfigStore>) {
    let (config, _) = store.config_mut::<GuideGizmos>();
    config.line.style = GizmoLineStyle::Dashed {
        gap_scale: 4.0,
        line_scale: 8.0,
    };
    config.line.width = 1.5;
}

pub fn build_orbit_curve(
    mut commands: Commands,
    config: Res<SceneConfig>,
    orbit: Res<EllipticalOrbit>,
) {
    commands.insert_resource(OrbitCurve {
        points: orbit.sample_points(config.orbit_segments),
    });
}

pub fn spawn_axis_markers(
    mut commands: Commands,
    config: Res<SceneConfig>,
    orbit: Res<EllipticalOrbit>,
) {
    commands.spawn((
        Transform::from_translation(orbit.primary_position()),
        AxisMarker {
            length: config.sun_axis_length,
        },
        GuideKind(Guide::SunAxis),
        Name::new("Sun Axis"),
    ));

    let earth = initial_earth_state(&config, &orbit);
    commands.spawn((
        Transform::from_translation(earth.position).with_rotation(earth.tilt_rotation()),
        AxisMarker {
            length: config.earth_axis_length,
        },
        AttachedToBody,
        GuideKind(Guide::EarthAxis),
        Name::new("Earth Axis"),
    ));
}

/// Orbit polyline to draw, or `None` while the orbit guide is hidden.
pub fn visible_orbit<'a>(curve: &'a OrbitCurve, state: &UIState) -> Option<&'a [Vec3]> {
    state.show_orbit.then_some(curve.points.as_slice())
}

/// Line segments for every axis marker whose guide flag is on.
pub fn visible_axes<'a>(
    markers: impl IntoIterator<Item = (&'a Transform, &'a AxisMarker, &'a GuideKind)>,
    state: &UIState,
) -> Vec<(Vec3, Vec3)> {
    markers
        .into_iter()
        .filter(|(_, _, kind)| state.is_visible(kind.0))
        .map(|(transform, marker, _)| axis_endpoints(transform, marker.length))
        .collect()
}

pub fn draw_orbit_curve(
    mut gizmos: Gizmos<GuideGizmos>,
    curve: Res<OrbitCurve>,
    state: Res<UIState>,
) {
    if let Some(points) = visible_orbit(&curve, &state) {
        gizmos.linestrip(points.iter().copied(), ORBIT_COLOR);
    }
}

pub fn draw_axes(
    mut gizmos: Gizmos<GuideGizmos>,
    query: Query<(&Transform, &AxisMarker, &GuideKind)>,
    state: Res<UIState>,
) {
    for (start, end) in visible_axes(&query, &state) {
        gizmos.line(start, end, AXIS_COLOR);
    }
}
