//! Tour description types.

use serde::{Deserialize, Serialize};

/// Room entry for the UI's room picker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomInfo {
    pub id: String,
    pub name: String,
}

/// Static tour data plus current tool state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourInfo {
    pub property_name: String,
    pub reference: Option<String>,
    pub rooms: Vec<RoomInfo>,
    pub measure_tool_active: bool,
    /// Completed measurements (non-empty when the UI reconnects)
    pub measurements: Vec<super::MeasurementInfo>,
}
