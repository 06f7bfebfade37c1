//! User interface module
//!
//! This module handles UI state management, the toggle panel and the
//! systems that apply panel actions to the scene.

use bevy::prelude::*;

use crate::orbital::SimulationSet;

pub mod actions;
pub mod panel;
pub mod state;
pub mod systems;

pub use actions::{ControlAction, apply_control_actions, keyboard_shortcuts};
pub use state::{Guide, GuideKind, UIState};
pub use systems::sync_guide_visibility;

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UIState>()
            .add_message::<ControlAction>()
            .add_systems(Startup, panel::spawn_control_panel)
            .add_systems(
                Update,
                (
                    keyboard_shortcuts.before(SimulationSet::Controls),
                    apply_control_actions.in_set(SimulationSet::Controls),
                    (sync_guide_visibility, panel::sync_running_checkbox)
                        .in_set(SimulationSet::Decorations),
                ),
            );
    }
}
