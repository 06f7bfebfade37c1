//! Control-panel actions
//!
//! Widgets and keyboard shortcuts never touch scene state directly. They
//! queue a [`ControlAction`], and [`apply_control_actions`] drains the queue
//! at the start of the next frame, before the clock and the orbit update.

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::config::SceneConfig;
use crate::core::{MainCamera, reset_to_pose, side_view_pose};
use crate::orbital::SimulationClock;
use crate::ui::state::{Guide, UIState};

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum ControlAction {
    SetVisibility(Guide, bool),
    SetRunning(bool),
    ToggleRunning,
    SideView,
}

/// Apply queued actions to the UI state, the clock and the camera.
pub fn apply_control_actions(
    mut actions: MessageReader<ControlAction>,
    mut state: ResMut<UIState>,
    mut clock: ResMut<SimulationClock>,
    config: Res<SceneConfig>,
    mut cameras: Query<&mut PanOrbitCamera, With<MainCamera>>,
) {
    for action in actions.read() {
        match *action {
            ControlAction::SetVisibility(guide, visible) => {
                if state.is_visible(guide) != visible {
                    state.set_visible(guide, visible);
                }
            }
            ControlAction::SetRunning(running) => set_running(&mut state, &mut clock, running),
            ControlAction::ToggleRunning => {
                let running = !clock.running;
                set_running(&mut state, &mut clock, running);
            }
            ControlAction::SideView => {
                let pose = side_view_pose(config.camera.side_view_distance);
                for mut camera in &mut cameras {
                    reset_to_pose(&mut camera, pose);
                }
                info!("Camera reset to side view");
            }
        }
    }
}

fn set_running(state: &mut UIState, clock: &mut SimulationClock, running: bool) {
    if clock.running == running {
        return;
    }
    clock.set_running(running);
    state.running = running;
    if running {
        info!("Simulation resumed at t = {:.2}s", clock.elapsed_secs);
    } else {
        info!("Simulation paused at t = {:.2}s", clock.elapsed_secs);
    }
}

/// Keyboard shortcuts: Space toggles running, V resets to the side view.
pub fn keyboard_shortcuts(
    input: Res<ButtonInput<KeyCode>>,
    mut actions: MessageWriter<ControlAction>,
) {
    if input.just_pressed(KeyCode::Space) {
        actions.write(ControlAction::ToggleRunning);
    }
    if input.just_pressed(KeyCode::KeyV) {
        actions.write(ControlAction::SideView);
    }
}
