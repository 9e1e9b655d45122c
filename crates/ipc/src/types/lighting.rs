//! Lighting state types.

use serde::{Deserialize, Serialize};

/// Environment preset selected from the time of day, sent by lowercase name
pub use daylight::EnvironmentPreset;

/// Lighting derived from the current time of day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightingInfo {
    /// Hours since midnight (0.0 - 24.0)
    pub time_of_day: f32,
    pub sun_position: [f32; 3],
    pub sun_intensity: f32,
    pub ambient_intensity: f32,
    pub preset: EnvironmentPreset,
    /// Daylight playback running
    pub playing: bool,
}
