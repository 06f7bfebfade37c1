//! Visualization module
//!
//! This module builds the static scene (sun, earth, planes) and draws the
//! dashed orbit and axis guides every frame.

use bevy::prelude::*;

pub mod bodies;
pub mod guides;
pub mod planes;

pub use guides::{GuideGizmos, OrbitCurve, draw_axes, draw_orbit_curve};

use crate::orbital::SimulationSet;

/// Plugin for visualization systems
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_gizmo_group::<GuideGizmos>()
            .init_resource::<OrbitCurve>()
            .add_systems(
                Startup,
                (
                    guides::configure_guide_gizmos,
                    guides::build_orbit_curve,
                    guides::spawn_axis_markers,
                    bodies::spawn_bodies,
                    planes::spawn_planes,
                ),
            )
            .add_systems(
                Update,
                (draw_orbit_curve, draw_axes).in_set(SimulationSet::Decorations),
            );
    }
}
