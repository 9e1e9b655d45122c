//! Shared configuration for Hunian
//!
//! This crate provides the single source of truth for window dimensions,
//! tour settings read from the environment, and the property layout file
//! describing the rooms of a virtual tour.

use serde::{Deserialize, Serialize};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

mod error;
mod layout;
mod tour;

pub use error::ConfigError;
pub use layout::{PropertyLayout, RoomLayout, Viewpoint};
pub use tour::TourConfig;

/// Default window width in pixels
pub const DEFAULT_WIDTH: u32 = 1280;

/// Default window height in pixels
pub const DEFAULT_HEIGHT: u32 = 720;

/// Display configuration for window and rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct DisplayConfig {
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn test_partial_config_is_rejected() {
        assert!(serde_json::from_str::<DisplayConfig>(r#"{"width": 800}"#).is_err());
        let config: DisplayConfig =
            serde_json::from_str(r#"{"width": 800, "height": 600}"#).unwrap();
        assert_eq!((config.width, config.height), (800, 600));
    }
}
