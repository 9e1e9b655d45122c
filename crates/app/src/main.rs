//! Hunian - 3D property tour viewer

use bevy::prelude::*;
use bevy::window::WindowResolution;
use hunian_config::{DisplayConfig, TourConfig};

mod config;
mod frontend;
mod input;

use config::HunianConfig;
use hunian_scene::ScenePlugin;

fn main() {
    // Parse configuration from environment
    let config = HunianConfig::default();
    let tour_config = TourConfig::from_env();

    // Display configuration - single source of truth for window size
    let display_config = DisplayConfig::default();

    let window_config = Window {
        title: "Hunian".into(),
        resolution: WindowResolution::new(display_config.width, display_config.height),
        present_mode: bevy::window::PresentMode::AutoVsync,
        ..default()
    };

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(window_config),
                ..default()
            })
            .set(bevy::log::LogPlugin {
                level: bevy::log::Level::INFO,
                ..default()
            }),
    );

    info!(
        "Starting Hunian with {:?} bridge at {:.1}h",
        config.bridge_mode, tour_config.time_of_day
    );

    // Layout loading may warn, so it happens once logging is up
    let layout = config::load_layout(&tour_config);

    app.insert_resource(config)
        .insert_resource(display_config)
        .insert_resource(tour_config)
        .insert_resource(layout)
        .add_plugins(ScenePlugin)
        .add_plugins(frontend::FrontendPlugin)
        .add_plugins(input::InputPlugin)
        .run();
}
