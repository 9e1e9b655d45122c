//! Application configuration and bridge mode selection

use bevy::prelude::*;
use hunian_config::{PropertyLayout, TourConfig};

/// How the viewer talks to a host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BridgeMode {
    /// No host UI; outbound messages are logged and dropped
    #[default]
    Detached,
    /// JSON lines over stdin/stdout
    Stdio,
}

impl BridgeMode {
    /// Parse from environment variable HUNIAN_BRIDGE
    pub fn from_env() -> Self {
        Self::parse(std::env::var("HUNIAN_BRIDGE").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("stdio") => Self::Stdio,
            _ => Self::Detached,
        }
    }
}

/// Application configuration resource
#[derive(Resource, Clone)]
pub struct HunianConfig {
    pub bridge_mode: BridgeMode,
}

impl Default for HunianConfig {
    fn default() -> Self {
        Self {
            bridge_mode: BridgeMode::from_env(),
        }
    }
}

/// Load the configured layout file, falling back to the demo property.
/// Call after the log plugin is added so the fallback warning is visible.
pub fn load_layout(config: &TourConfig) -> PropertyLayout {
    let Some(path) = &config.layout_path else {
        return PropertyLayout::demo();
    };

    match PropertyLayout::load(path) {
        Ok(layout) => layout,
        Err(e) => {
            warn!("Failed to load layout {}: {}; using demo layout", path.display(), e);
            PropertyLayout::demo()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_mode_parse() {
        assert_eq!(BridgeMode::parse(Some("stdio")), BridgeMode::Stdio);
        assert_eq!(BridgeMode::parse(Some(" stdio\n")), BridgeMode::Stdio);
        assert_eq!(BridgeMode::parse(Some("websocket")), BridgeMode::Detached);
        assert_eq!(BridgeMode::parse(None), BridgeMode::Detached);
    }

    #[test]
    fn test_missing_layout_file_falls_back_to_demo() {
        let config = TourConfig {
            layout_path: Some("/nonexistent/hunian-layout.json".into()),
            ..Default::default()
        };
        assert_eq!(load_layout(&config), PropertyLayout::demo());
    }
}
