//! Environment presets selected from the time of day.

use serde::{Deserialize, Serialize};

/// Named lighting/sky configuration bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentPreset {
    Dawn,
    Day,
    Sunset,
    Night,
}

impl EnvironmentPreset {
    pub const ALL: [EnvironmentPreset; 4] = [
        EnvironmentPreset::Dawn,
        EnvironmentPreset::Day,
        EnvironmentPreset::Sunset,
        EnvironmentPreset::Night,
    ];

    /// Lowercase name used in logs and the UI protocol
    pub fn name(&self) -> &'static str {
        match self {
            EnvironmentPreset::Dawn => "dawn",
            EnvironmentPreset::Day => "day",
            EnvironmentPreset::Sunset => "sunset",
            EnvironmentPreset::Night => "night",
        }
    }

    /// Background sky colour as sRGB (0.0-1.0)
    pub fn sky_color(&self) -> [f32; 3] {
        match self {
            EnvironmentPreset::Dawn => [0.95, 0.72, 0.6],
            EnvironmentPreset::Day => [0.53, 0.75, 0.95],
            EnvironmentPreset::Sunset => [0.85, 0.45, 0.3],
            EnvironmentPreset::Night => [0.03, 0.04, 0.1],
        }
    }

    /// Sun colour as sRGB (0.0-1.0)
    pub fn sun_color(&self) -> [f32; 3] {
        match self {
            EnvironmentPreset::Dawn => [1.0, 0.8, 0.6],
            EnvironmentPreset::Day => [1.0, 0.98, 0.95],
            EnvironmentPreset::Sunset => [1.0, 0.6, 0.35],
            // Moonlight
            EnvironmentPreset::Night => [0.6, 0.7, 1.0],
        }
    }

    /// Ambient fill colour as sRGB (0.0-1.0)
    pub fn ambient_color(&self) -> [f32; 3] {
        match self {
            EnvironmentPreset::Dawn => [0.9, 0.8, 0.85],
            EnvironmentPreset::Day => [0.6, 0.7, 1.0],
            EnvironmentPreset::Sunset => [0.9, 0.65, 0.6],
            EnvironmentPreset::Night => [0.3, 0.35, 0.6],
        }
    }
}

impl std::fmt::Display for EnvironmentPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_serde() {
        for preset in EnvironmentPreset::ALL {
            let json = serde_json::to_string(&preset).unwrap();
            assert_eq!(json, format!("\"{}\"", preset.name()));
        }
    }

    #[test]
    fn test_colors_in_unit_range() {
        for preset in EnvironmentPreset::ALL {
            for color in [preset.sky_color(), preset.sun_color(), preset.ambient_color()] {
                assert!(color.iter().all(|c| (0.0..=1.0).contains(c)));
            }
        }
    }
}
