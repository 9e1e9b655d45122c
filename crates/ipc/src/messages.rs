//! Main IPC message enums for communication between the viewer and UI.

use serde::{Deserialize, Serialize};

use crate::commands::{CameraCommand, InquiryRequest};
use crate::types::{LightingInfo, MeasurementInfo, TourInfo};

/// Messages from the viewer to the host UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ViewerToUi {
    /// Initial state sync when the UI connects
    Initialize {
        tour: TourInfo,
        lighting: LightingInfo,
    },

    /// Time of day or environment preset changed
    LightingChanged(LightingInfo),

    /// Measurement tool switched on or off
    MeasureToolChanged { active: bool },

    /// First point of a measurement recorded
    MeasurementStarted { point: [f32; 3] },

    /// Pending first point dropped without completing a measurement
    MeasurementCancelled,

    /// Second point recorded, measurement complete
    MeasurementAdded(MeasurementInfo),

    /// One measurement deleted
    MeasurementRemoved { id: String },

    /// All measurements deleted
    MeasurementsCleared,

    /// Camera is flying to a room
    RoomFocused { room_id: String },

    /// WhatsApp deep link ready for the UI to open
    InquiryLink { url: String, message: String },

    /// Error notification (shown as a toast)
    Error { code: String, message: String },
}

/// Messages from the host UI to the viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToViewer {
    /// Ask for a fresh `Initialize`
    RequestState,

    /// Time-of-day slider moved
    SetTimeOfDay { hours: f32 },

    /// Start or stop automatic daylight playback
    SetDaylightPlayback {
        playing: bool,
        #[serde(default)]
        hours_per_second: Option<f32>,
    },

    /// Toggle the measurement tool
    SetMeasureTool { active: bool },

    /// Click forwarded from the UI overlay, in viewport pixels
    MeasureClick { x: f32, y: f32 },

    /// Drop the pending first point
    CancelMeasurement,

    /// Delete one measurement
    RemoveMeasurement { id: String },

    /// Delete all measurements
    ClearMeasurements,

    /// Camera control
    CameraCommand(CameraCommand),

    /// Build a WhatsApp inquiry link for the current property
    RequestInquiry(InquiryRequest),
}
