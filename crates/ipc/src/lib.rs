//! IPC message protocol for Hunian
//!
//! Defines all message types exchanged between the tour viewer and the host
//! UI (the marketplace web frontend). Messages are JSON, adjacently tagged as
//! `{"type": ..., "data": ...}`.

mod commands;
mod error;
mod messages;
mod types;

pub use commands::*;
pub use error::*;
pub use messages::*;
pub use types::*;

/// Serialize a message to a single line of JSON
pub fn encode<T: serde::Serialize>(msg: &T) -> Result<String, IpcError> {
    Ok(serde_json::to_string(msg)?)
}

/// Parse one line of JSON sent by the host UI
pub fn decode_ui_message(line: &str) -> Result<UiToViewer, IpcError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(IpcError::InvalidFormat("empty message".to_string()));
    }
    Ok(serde_json::from_str(line)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_tagged_message() {
        let msg = decode_ui_message(r#"{"type":"SetTimeOfDay","data":{"hours":18.5}}"#).unwrap();
        assert!(matches!(msg, UiToViewer::SetTimeOfDay { hours } if hours == 18.5));
    }

    #[test]
    fn test_decode_unit_variant() {
        let msg = decode_ui_message(r#"{"type":"ClearMeasurements"}"#).unwrap();
        assert!(matches!(msg, UiToViewer::ClearMeasurements));
    }

    #[test]
    fn test_decode_nested_camera_command() {
        let msg = decode_ui_message(
            r#"{"type":"CameraCommand","data":{"FocusRoom":{"room_id":"kitchen"}}}"#,
        )
        .unwrap();
        let UiToViewer::CameraCommand(CameraCommand::FocusRoom { room_id }) = &msg else {
            panic!("expected FocusRoom, got {msg:?}");
        };
        assert_eq!(room_id, "kitchen");
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(decode_ui_message("   "), Err(IpcError::InvalidFormat(_))));
        assert!(matches!(decode_ui_message("{\"type\":\"Nope\"}"), Err(IpcError::Serialize(_))));
    }

    #[test]
    fn test_encode_measurement_added() {
        let msg = ViewerToUi::MeasurementAdded(MeasurementInfo {
            id: "m-1".to_string(),
            start: [0.0, 0.0, 0.0],
            end: [0.5, 0.0, 0.0],
            distance: 0.5,
            label: "50 cm".to_string(),
        });
        let json: serde_json::Value = serde_json::from_str(&encode(&msg).unwrap()).unwrap();
        assert_eq!(json["type"], "MeasurementAdded");
        assert_eq!(json["data"]["label"], "50 cm");
        assert_eq!(json["data"]["end"][0], 0.5);
    }

    #[test]
    fn test_encode_preset_lowercase() {
        let msg = ViewerToUi::LightingChanged(LightingInfo {
            time_of_day: 6.0,
            sun_position: [10.0, 0.0, 5.0],
            sun_intensity: 0.4,
            ambient_intensity: 0.2,
            preset: EnvironmentPreset::Dawn,
            playing: false,
        });
        let json: serde_json::Value = serde_json::from_str(&encode(&msg).unwrap()).unwrap();
        assert_eq!(json["data"]["preset"], "dawn");
    }

    #[test]
    fn test_inquiry_request_defaults() {
        let msg = decode_ui_message(r#"{"type":"RequestInquiry","data":{}}"#).unwrap();
        let UiToViewer::RequestInquiry(request) = msg else {
            panic!("expected RequestInquiry");
        };
        assert!(request.include_measurements);
        assert_eq!(request.visitor_name, None);
    }
}
