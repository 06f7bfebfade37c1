use anyhow::Context;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_feathers::FeathersPlugins;
use bevy_feathers::dark_theme::create_dark_theme;
use bevy_feathers::palette;
use bevy_feathers::theme::UiTheme;
use bevy_input_focus::directional_navigation::DirectionalNavigationPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod config;
mod core;
mod orbital;
mod ui;
mod visualization;

use crate::config::SceneConfig;
use crate::core::CameraPlugin;
use crate::orbital::OrbitalPlugin;
use crate::ui::UiPlugin;
use crate::visualization::VisualizationPlugin;

fn panel_theme() -> UiTheme {
    // Feathers initializes `UiTheme` but does not populate it by default.
    let mut theme = UiTheme(create_dark_theme());
    theme.set_color("feathers.text.main", palette::LIGHT_GRAY_1);
    theme.set_color("feathers.text.dim", palette::LIGHT_GRAY_2);
    theme.set_color("feathers.focus", palette::ACCENT);
    theme.set_color("feathers.button.bg", Color::srgba(0.06, 0.12, 0.16, 0.9));
    theme.set_color(
        "feathers.button.bg.hover",
        Color::srgba(0.08, 0.2, 0.26, 0.95),
    );
    theme.set_color(
        "feathers.button.bg.pressed",
        Color::srgba(0.1, 0.26, 0.32, 0.95),
    );
    theme.set_color("feathers.button.txt", Color::srgba(0.6, 1.0, 1.0, 1.0));
    theme
}

fn main() -> anyhow::Result<()> {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Sun and Earth".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Logging is up once DefaultPlugins are built, so load the scene after them.
    let config = SceneConfig::load().context("failed to load scene configuration")?;
    let orbit = match config.validate() {
        Ok(orbit) => orbit,
        Err(err) => {
            error!("Invalid scene configuration: {}", err);
            return Err(err).context("invalid scene configuration");
        }
    };
    info!(
        "Orbit a = {}, b = {}, focus at x = {}",
        orbit.semi_major_axis(),
        orbit.semi_minor_axis(),
        orbit.primary_offset()
    );

    app.insert_resource(ClearColor(Color::BLACK))
        .insert_resource(panel_theme())
        .add_plugins(FeathersPlugins)
        .add_plugins(DirectionalNavigationPlugin)
        .add_plugins(PanOrbitCameraPlugin);

    app.add_plugins(OrbitalPlugin::from_config(&config, orbit));
    app.insert_resource(config);
    app.add_plugins(CameraPlugin);
    app.add_plugins(UiPlugin);
    app.add_plugins(VisualizationPlugin);

    app.run();
    Ok(())
}
