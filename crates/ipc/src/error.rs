//! Error types for IPC operations.

/// Errors that can occur during IPC operations.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    #[error("Failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid message format: {0}")]
    InvalidFormat(String),
}

/// `code` values of [`crate::ViewerToUi::Error`]
pub mod error_codes {
    pub const UNKNOWN_ROOM: &str = "unknown_room";
    pub const UNKNOWN_MEASUREMENT: &str = "unknown_measurement";
    pub const INVALID_TIME: &str = "invalid_time";
    pub const INQUIRY_FAILED: &str = "inquiry_failed";
    pub const INVALID_MESSAGE: &str = "invalid_message";
}
