//! Command types for IPC messages.

use serde::{Deserialize, Serialize};

/// Camera control commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CameraCommand {
    Orbit { delta_x: f32, delta_y: f32 },
    Zoom { delta: f32 },
    /// Fly back to the overview
    Reset,
    SetAutoRotate { enabled: bool },
    /// Fly to a room's viewpoint
    FocusRoom { room_id: String },
}

/// Visitor-provided part of a WhatsApp inquiry. Property details and the
/// viewed room are filled in by the viewer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InquiryRequest {
    #[serde(default)]
    pub visitor_name: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    /// Append the tour's measurements to the message
    #[serde(default = "default_true")]
    pub include_measurements: bool,
}

fn default_true() -> bool {
    true
}
