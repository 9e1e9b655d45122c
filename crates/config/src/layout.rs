//! Property layout: the rooms a virtual tour is built from.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

use crate::error::ConfigError;

/// Camera placement used when the tour focuses a room
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewpoint {
    /// Horizontal angle around the room centre in radians
    pub yaw: f32,
    /// Elevation above the floor plane in radians
    pub pitch: f32,
    /// Distance from the room centre
    pub distance: f32,
}

impl Default for Viewpoint {
    fn default() -> Self {
        Self {
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: 0.6,
            distance: 7.0,
        }
    }
}

/// One room of the property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomLayout {
    /// Stable identifier used by UI commands
    pub id: String,
    /// Display name
    pub name: String,
    /// Centre of the floor in world space (metres)
    pub center: [f32; 3],
    /// Width (x), wall height (y) and depth (z) in metres
    pub size: [f32; 3],
    #[serde(default)]
    pub viewpoint: Viewpoint,
}

/// Listing metadata plus its rooms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct PropertyLayout {
    pub property_name: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    pub rooms: Vec<RoomLayout>,
}

impl Default for PropertyLayout {
    fn default() -> Self {
        Self::demo()
    }
}

impl PropertyLayout {
    /// Built-in three room villa used when no layout file is configured
    pub fn demo() -> Self {
        Self {
            property_name: "Demo Villa".to_string(),
            reference: Some("DEMO-001".to_string()),
            location: Some("Canggu, Bali".to_string()),
            price: None,
            rooms: vec![
                RoomLayout {
                    id: "living".to_string(),
                    name: "Living room".to_string(),
                    center: [0.0, 0.0, 0.0],
                    size: [6.0, 3.0, 5.0],
                    viewpoint: Viewpoint::default(),
                },
                RoomLayout {
                    id: "kitchen".to_string(),
                    name: "Kitchen".to_string(),
                    center: [5.0, 0.0, -0.5],
                    size: [4.0, 3.0, 4.0],
                    viewpoint: Viewpoint {
                        yaw: 1.2,
                        pitch: 0.7,
                        distance: 6.0,
                    },
                },
                RoomLayout {
                    id: "bedroom".to_string(),
                    name: "Master bedroom".to_string(),
                    center: [0.0, 0.0, -5.0],
                    size: [6.0, 3.0, 5.0],
                    viewpoint: Viewpoint {
                        yaw: -0.6,
                        pitch: 0.65,
                        distance: 6.5,
                    },
                },
            ],
        }
    }

    /// Parse and validate a layout from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load and validate a layout file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let layout = Self::from_json(&json)?;
        tracing::info!(
            "Loaded layout '{}' with {} rooms from {}",
            layout.property_name,
            layout.rooms.len(),
            path.display()
        );
        Ok(layout)
    }

    /// Check ids are unique and dimensions are positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rooms.is_empty() {
            return Err(ConfigError::InvalidLayout("layout has no rooms".to_string()));
        }

        let mut seen = HashSet::new();
        for room in &self.rooms {
            if !seen.insert(room.id.as_str()) {
                return Err(ConfigError::InvalidLayout(format!(
                    "duplicate room id '{}'",
                    room.id
                )));
            }
            if room.size.iter().any(|d| !d.is_finite() || *d <= 0.0) {
                return Err(ConfigError::InvalidLayout(format!(
                    "room '{}' has a non-positive size",
                    room.id
                )));
            }
            if room.center.iter().any(|c| !c.is_finite()) {
                return Err(ConfigError::InvalidLayout(format!(
                    "room '{}' has a non-finite center",
                    room.id
                )));
            }
            let viewpoint = &room.viewpoint;
            if !viewpoint.distance.is_finite() || viewpoint.distance <= 0.0 {
                return Err(ConfigError::InvalidLayout(format!(
                    "room '{}' has a non-positive viewpoint distance",
                    room.id
                )));
            }
            if !viewpoint.yaw.is_finite() || !viewpoint.pitch.is_finite() {
                return Err(ConfigError::InvalidLayout(format!(
                    "room '{}' has a non-finite viewpoint angle",
                    room.id
                )));
            }
        }
        Ok(())
    }

    /// Look up a room by id
    pub fn room(&self, id: &str) -> Option<&RoomLayout> {
        self.rooms.iter().find(|room| room.id == id)
    }
}
