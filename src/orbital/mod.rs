//! Orbital mechanics module
//!
//! This module handles the orbit geometry, the simulation clock and the
//! per-frame kinematics of the orbiting body.

use bevy::prelude::*;

pub mod body;
pub mod ellipse;
pub mod time;
pub mod updater;

pub use body::{AttachedToBody, OrbitalBody};
pub use ellipse::EllipticalOrbit;
pub use time::{SimulationClock, advance_simulation_clock};
pub use updater::{OrbitalFrameUpdater, update_orbiting_body};

use crate::config::SceneConfig;

/// Frame phases, run in order every `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Apply queued control-panel actions.
    Controls,
    /// Advance the simulation clock.
    Clock,
    /// Move the orbiting body and its decorations.
    Kinematics,
    /// Visibility sync and guide drawing.
    Decorations,
}

/// Plugin for orbital mechanics and time management
pub struct OrbitalPlugin {
    pub orbit: EllipticalOrbit,
    pub updater: OrbitalFrameUpdater,
}

impl OrbitalPlugin {
    pub fn from_config(config: &SceneConfig, orbit: EllipticalOrbit) -> Self {
        Self {
            orbit,
            updater: OrbitalFrameUpdater {
                time_scale: config.time_scale,
                spin_step: config.spin_step_rad,
            },
        }
    }
}

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.orbit)
            .insert_resource(self.updater)
            .init_resource::<SimulationClock>()
            .configure_sets(
                Update,
                (
                    SimulationSet::Controls,
                    SimulationSet::Clock,
                    SimulationSet::Kinematics,
                    SimulationSet::Decorations,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    advance_simulation_clock.in_set(SimulationSet::Clock),
                    update_orbiting_body.in_set(SimulationSet::Kinematics),
                ),
            );
    }
}
