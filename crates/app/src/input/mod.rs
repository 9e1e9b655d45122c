//! Input handling - keyboard shortcuts for the tour
//!
//! Mouse orbit and measurement clicks are handled inside the scene crate.

use bevy::input::InputSystems;
use bevy::prelude::*;

mod hotkeys;

use hotkeys::handle_tour_hotkeys;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        // Run in PreUpdate so the commands are dispatched this frame
        app.add_systems(PreUpdate, handle_tour_hotkeys.after(InputSystems));

        info!("Input plugin initialized");
    }
}
