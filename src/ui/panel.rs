//! Toggle panel built from feathers widgets.

use bevy::prelude::*;
use bevy::ui::Checked;
use bevy_feathers::controls::{ButtonProps, button, checkbox};
use bevy_feathers::theme::{ThemeBackgroundColor, ThemedText};
use bevy_feathers::tokens;
use bevy_ui_widgets::{Activate, ValueChange, observe};

use crate::ui::actions::ControlAction;
use crate::ui::state::{Guide, UIState};

/// Marker for the "Running" checkbox, kept in sync with keyboard toggles.
#[derive(Component)]
pub struct RunningToggle;

fn set_checked(commands: &mut Commands, entity: Entity, checked: bool) {
    let mut checkbox = commands.entity(entity);
    if checked {
        checkbox.insert(Checked);
    } else {
        checkbox.remove::<Checked>();
    }
}

fn guide_checkbox(guide: Guide) -> impl Bundle {
    (
        checkbox(Checked, Spawn((Text::new(guide.label()), ThemedText))),
        observe(
            move |change: On<ValueChange<bool>>,
                  mut commands: Commands,
                  mut actions: MessageWriter<ControlAction>| {
                set_checked(&mut commands, change.source, change.value);
                actions.write(ControlAction::SetVisibility(guide, change.value));
            },
        ),
    )
}

fn running_checkbox() -> impl Bundle {
    (
        checkbox(RunningToggle, Spawn((Text::new("Running"), ThemedText))),
        observe(
            |change: On<ValueChange<bool>>,
             mut commands: Commands,
             mut actions: MessageWriter<ControlAction>| {
                set_checked(&mut commands, change.source, change.value);
                actions.write(ControlAction::SetRunning(change.value));
            },
        ),
    )
}

fn side_view_button() -> impl Bundle {
    (
        button(
            ButtonProps::default(),
            (),
            Spawn((Text::new("Side view"), ThemedText)),
        ),
        observe(
            |_activate: On<Activate>, mut actions: MessageWriter<ControlAction>| {
                actions.write(ControlAction::SideView);
            },
        ),
    )
}

pub fn spawn_control_panel(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            right: Val::Px(8.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Start,
            row_gap: Val::Px(6.0),
            padding: UiRect::all(Val::Px(10.0)),
            ..default()
        },
        ThemeBackgroundColor(tokens::WINDOW_BG),
        Name::new("Control Panel"),
        children![
            guide_checkbox(Guide::EclipticPlane),
            guide_checkbox(Guide::EquatorPlane),
            guide_checkbox(Guide::SunAxis),
            guide_checkbox(Guide::EarthAxis),
            guide_checkbox(Guide::Orbit),
            running_checkbox(),
            side_view_button(),
        ],
    ));
}

/// Reflect running-state changes from other sources (keyboard) on the panel.
pub fn sync_running_checkbox(
    state: Res<UIState>,
    mut commands: Commands,
    toggles: Query<(Entity, Has<Checked>), With<RunningToggle>>,
) {
    if !state.is_changed() {
        return;
    }
    for (entity, checked) in &toggles {
        if checked != state.running {
            set_checked(&mut commands, entity, state.running);
        }
    }
}
