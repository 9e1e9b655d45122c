//! Hotkey handling for Hunian
//!
//! Hotkeys produce the same commands the UI sends, so both paths go through
//! the scene's dispatcher:
//! - M: Toggle the measure tool
//! - Escape: Cancel a pending measurement
//! - Delete: Clear all measurements
//! - Space: Play/pause daylight
//! - [ / ]: One hour earlier / later
//! - R: Toggle camera self-rotation
//! - Home: Back to the whole-property view
//! - 1-9: Focus a room
//! - I: Ask the agent about the property

use bevy::prelude::*;
use hunian_config::PropertyLayout;
use hunian_ipc::{CameraCommand, InquiryRequest, UiToViewer};
use hunian_scene::{InboundUiMessages, MeasureToolState, OrbitCamera, SceneDaylight};

/// Hours moved by one bracket key press
const TIME_STEP_HOURS: f32 = 1.0;

/// Scene state that decides what a toggle key does
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    pub measure_active: bool,
    pub daylight_playing: bool,
    pub time_of_day: f32,
    pub auto_rotate: bool,
    pub room_ids: Vec<String>,
}

/// Command for a key press, if the key is bound
pub fn hotkey_command(key: KeyCode, ctx: &HotkeyContext) -> Option<UiToViewer> {
    let command = match key {
        KeyCode::KeyM => UiToViewer::SetMeasureTool {
            active: !ctx.measure_active,
        },
        KeyCode::Escape => UiToViewer::CancelMeasurement,
        KeyCode::Delete => UiToViewer::ClearMeasurements,
        KeyCode::Space => UiToViewer::SetDaylightPlayback {
            playing: !ctx.daylight_playing,
            hours_per_second: None,
        },
        KeyCode::BracketLeft => UiToViewer::SetTimeOfDay {
            hours: ctx.time_of_day - TIME_STEP_HOURS,
        },
        KeyCode::BracketRight => UiToViewer::SetTimeOfDay {
            hours: ctx.time_of_day + TIME_STEP_HOURS,
        },
        KeyCode::KeyR => UiToViewer::CameraCommand(CameraCommand::SetAutoRotate {
            enabled: !ctx.auto_rotate,
        }),
        KeyCode::Home => UiToViewer::CameraCommand(CameraCommand::Reset),
        KeyCode::KeyI => UiToViewer::RequestInquiry(InquiryRequest {
            include_measurements: true,
            ..Default::default()
        }),
        _ => {
            let room_id = ctx.room_ids.get(room_index(key)?)?;
            UiToViewer::CameraCommand(CameraCommand::FocusRoom {
                room_id: room_id.clone(),
            })
        }
    };
    Some(command)
}

/// Zero-based room slot for the digit keys 1-9
fn room_index(key: KeyCode) -> Option<usize> {
    const DIGITS: [KeyCode; 9] = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
    ];
    DIGITS.iter().position(|&digit| digit == key)
}

/// Turn this frame's key presses into UI commands
pub fn handle_tour_hotkeys(
    key_input: Res<ButtonInput<KeyCode>>,
    measure: Res<MeasureToolState>,
    daylight: Res<SceneDaylight>,
    layout: Res<PropertyLayout>,
    camera_query: Query<&OrbitCamera>,
    mut inbound: ResMut<InboundUiMessages>,
) {
    // Leave Ctrl/Alt chords to the window system
    let modifier = key_input.any_pressed([
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
        KeyCode::AltLeft,
        KeyCode::AltRight,
    ]);
    if modifier || key_input.get_just_pressed().next().is_none() {
        return;
    }

    let ctx = HotkeyContext {
        measure_active: measure.tool.is_active(),
        daylight_playing: daylight.cycle.playing,
        time_of_day: daylight.cycle.time_of_day(),
        auto_rotate: camera_query.iter().next().is_some_and(|orbit| orbit.auto_rotate),
        room_ids: layout.rooms.iter().map(|room| room.id.clone()).collect(),
    };

    for &key in key_input.get_just_pressed() {
        if let Some(command) = hotkey_command(key, &ctx) {
            debug!("Hotkey {:?} -> {:?}", key, command);
            inbound.push(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> HotkeyContext {
        HotkeyContext {
            time_of_day: 23.5,
            auto_rotate: true,
            room_ids: vec!["living".to_string(), "kitchen".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_toggles_flip_current_state() {
        assert!(matches!(
            hotkey_command(KeyCode::KeyM, &ctx()),
            Some(UiToViewer::SetMeasureTool { active: true })
        ));
        assert!(matches!(
            hotkey_command(KeyCode::KeyR, &ctx()),
            Some(UiToViewer::CameraCommand(CameraCommand::SetAutoRotate {
                enabled: false
            }))
        ));
    }

    #[test]
    fn test_time_step_passes_unwrapped_hours() {
        // Wrapping past midnight is done by the daylight cycle
        let Some(UiToViewer::SetTimeOfDay { hours }) =
            hotkey_command(KeyCode::BracketRight, &ctx())
        else {
            panic!("expected SetTimeOfDay");
        };
        assert_eq!(hours, 24.5);
    }

    #[test]
    fn test_digit_keys_focus_rooms() {
        let Some(UiToViewer::CameraCommand(CameraCommand::FocusRoom { room_id })) =
            hotkey_command(KeyCode::Digit2, &ctx())
        else {
            panic!("expected FocusRoom");
        };
        assert_eq!(room_id, "kitchen");
        assert!(hotkey_command(KeyCode::Digit3, &ctx()).is_none());
    }

    #[test]
    fn test_unbound_key() {
        assert!(hotkey_command(KeyCode::KeyQ, &ctx()).is_none());
    }
}
