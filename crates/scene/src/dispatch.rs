//! Handling of commands coming from the UI and from hotkeys

use bevy::prelude::*;
use hunian_config::{PropertyLayout, TourConfig};
use hunian_ipc::{CameraCommand, UiToViewer, ViewerToUi, error_codes};

use crate::camera::OrbitCamera;
use crate::inquiry::build_inquiry;
use crate::layout::{TourFocus, overview_goal, room_goal};
use crate::lighting::SceneDaylight;
use crate::measurement::{MeasureClick, MeasureToolState};
use crate::{InboundUiMessages, OutboundUiMessages, initialize_message};

/// Plugin that applies inbound UI commands each frame
pub struct DispatchPlugin;

impl Plugin for DispatchPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, dispatch_ui_messages);
    }
}

fn error(code: &str, message: impl Into<String>) -> ViewerToUi {
    ViewerToUi::Error {
        code: code.to_string(),
        message: message.into(),
    }
}

/// Drain `InboundUiMessages` and apply each command to the scene
#[allow(clippy::too_many_arguments)]
pub fn dispatch_ui_messages(
    mut inbound: ResMut<InboundUiMessages>,
    mut outbound: ResMut<OutboundUiMessages>,
    mut daylight: ResMut<SceneDaylight>,
    mut measure: ResMut<MeasureToolState>,
    mut focus: ResMut<TourFocus>,
    mut clicks: MessageWriter<MeasureClick>,
    mut camera_query: Query<&mut OrbitCamera>,
    layout: Res<PropertyLayout>,
    config: Res<TourConfig>,
) {
    for msg in inbound.drain() {
        match msg {
            UiToViewer::RequestState => {
                outbound.send(initialize_message(&layout, &measure, &daylight));
            }
            UiToViewer::SetTimeOfDay { hours } => {
                if daylight.set_time(hours) {
                    outbound.send(ViewerToUi::LightingChanged(daylight.info()));
                } else {
                    outbound.send(error(
                        error_codes::INVALID_TIME,
                        format!("Time of day must be a finite number of hours, got {hours}"),
                    ));
                }
            }
            UiToViewer::SetDaylightPlayback {
                playing,
                hours_per_second,
            } => {
                daylight.cycle.playing = playing;
                if let Some(speed) = hours_per_second {
                    if speed.is_finite() {
                        daylight.cycle.hours_per_second = speed;
                    } else {
                        warn!("Ignoring non-finite playback speed {}", speed);
                    }
                }
                info!(
                    "Daylight playback {} at {} h/s",
                    if playing { "started" } else { "paused" },
                    daylight.cycle.hours_per_second
                );
                outbound.send(ViewerToUi::LightingChanged(daylight.info()));
            }
            UiToViewer::SetMeasureTool { active } => {
                let discards = !active && !measure.tool.measurements().is_empty();
                measure.tool.set_active(active);
                info!("Measure tool {}", if active { "on" } else { "off" });
                outbound.send(ViewerToUi::MeasureToolChanged { active });
                if discards {
                    outbound.send(ViewerToUi::MeasurementsCleared);
                }
            }
            UiToViewer::MeasureClick { x, y } => {
                clicks.write(MeasureClick {
                    viewport_position: Vec2::new(x, y),
                });
            }
            UiToViewer::CancelMeasurement => {
                if measure.tool.cancel_pending() {
                    debug!("Pending measurement cancelled");
                    outbound.send(ViewerToUi::MeasurementCancelled);
                }
            }
            UiToViewer::RemoveMeasurement { id } => match measure.tool.remove(&id) {
                Some(removed) => {
                    info!("Removed measurement {}", removed.id);
                    outbound.send(ViewerToUi::MeasurementRemoved { id });
                }
                None => {
                    outbound.send(error(
                        error_codes::UNKNOWN_MEASUREMENT,
                        format!("No measurement with id '{id}'"),
                    ));
                }
            },
            UiToViewer::ClearMeasurements => {
                measure.tool.clear();
                outbound.send(ViewerToUi::MeasurementsCleared);
            }
            UiToViewer::CameraCommand(cmd) => {
                handle_camera_command(cmd, &mut camera_query, &layout, &mut focus, &mut outbound);
            }
            UiToViewer::RequestInquiry(request) => {
                let result = build_inquiry(
                    &request,
                    &layout,
                    focus.room_id.as_deref(),
                    &measure.tool,
                    &config,
                );
                match result {
                    Ok((url, message)) => {
                        info!("Inquiry link built for '{}'", layout.property_name);
                        outbound.send(ViewerToUi::InquiryLink { url, message });
                    }
                    Err(e) => {
                        warn!("Inquiry failed: {}", e);
                        outbound.send(error(error_codes::INQUIRY_FAILED, e.to_string()));
                    }
                }
            }
        }
    }
}

fn handle_camera_command(
    cmd: CameraCommand,
    camera_query: &mut Query<&mut OrbitCamera>,
    layout: &PropertyLayout,
    focus: &mut TourFocus,
    outbound: &mut OutboundUiMessages,
) {
    match cmd {
        CameraCommand::Orbit { delta_x, delta_y } => {
            for mut orbit in camera_query.iter_mut() {
                orbit.orbit_by(Vec2::new(delta_x, delta_y));
            }
        }
        CameraCommand::Zoom { delta } => {
            for mut orbit in camera_query.iter_mut() {
                orbit.zoom_by(delta);
            }
        }
        CameraCommand::Reset => {
            let goal = overview_goal(layout);
            for mut orbit in camera_query.iter_mut() {
                orbit.fly_to(goal);
            }
            focus.room_id = None;
        }
        CameraCommand::SetAutoRotate { enabled } => {
            for mut orbit in camera_query.iter_mut() {
                orbit.auto_rotate = enabled;
            }
        }
        CameraCommand::FocusRoom { room_id } => {
            let Some(room) = layout.room(&room_id) else {
                outbound.send(error(
                    error_codes::UNKNOWN_ROOM,
                    format!("No room with id '{room_id}'"),
                ));
                return;
            };

            let goal = room_goal(room);
            for mut orbit in camera_query.iter_mut() {
                orbit.fly_to(goal);
            }
            info!("Focusing {}", room.name);
            focus.room_id = Some(room_id.clone());
            outbound.send(ViewerToUi::RoomFocused { room_id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunian_ipc::InquiryRequest;
    use measuring::glam::Vec3 as MVec3;

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<InboundUiMessages>()
            .init_resource::<OutboundUiMessages>()
            .init_resource::<SceneDaylight>()
            .init_resource::<MeasureToolState>()
            .init_resource::<TourFocus>()
            .insert_resource(PropertyLayout::demo())
            .insert_resource(TourConfig {
                agent_whatsapp: Some("+62 812 3456 789".to_string()),
                ..Default::default()
            })
            .add_message::<MeasureClick>()
            .add_systems(Update, dispatch_ui_messages);
        app.world_mut().spawn(OrbitCamera::default());
        app
    }

    fn run(app: &mut App, msgs: Vec<UiToViewer>) -> Vec<ViewerToUi> {
        app.world_mut()
            .resource_mut::<InboundUiMessages>()
            .messages
            .extend(msgs);
        app.update();
        app.world_mut().resource_mut::<OutboundUiMessages>().drain()
    }

    fn error_code(msg: &ViewerToUi) -> Option<&str> {
        match msg {
            ViewerToUi::Error { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    #[test]
    fn test_set_time_of_day() {
        let mut app = test_app();
        let out = run(&mut app, vec![UiToViewer::SetTimeOfDay { hours: 26.0 }]);
        let [ViewerToUi::LightingChanged(info)] = out.as_slice() else {
            panic!("expected LightingChanged, got {out:?}");
        };
        assert_eq!(info.time_of_day, 2.0);
        assert!(app.world().resource::<SceneDaylight>().dirty);
    }

    #[test]
    fn test_set_time_of_day_rejects_nan() {
        let mut app = test_app();
        let out = run(&mut app, vec![UiToViewer::SetTimeOfDay { hours: f32::NAN }]);
        assert_eq!(error_code(&out[0]), Some(error_codes::INVALID_TIME));
        assert_eq!(
            app.world().resource::<SceneDaylight>().cycle.time_of_day(),
            12.0
        );
    }

    #[test]
    fn test_playback() {
        let mut app = test_app();
        run(
            &mut app,
            vec![UiToViewer::SetDaylightPlayback {
                playing: true,
                hours_per_second: Some(3.0),
            }],
        );
        let daylight = app.world().resource::<SceneDaylight>();
        assert!(daylight.cycle.playing);
        assert_eq!(daylight.cycle.hours_per_second, 3.0);
    }

    #[test]
    fn test_measure_tool_toggle_and_remove() {
        let mut app = test_app();
        let out = run(&mut app, vec![UiToViewer::SetMeasureTool { active: true }]);
        assert!(matches!(
            out[0],
            ViewerToUi::MeasureToolChanged { active: true }
        ));

        {
            let mut measure = app.world_mut().resource_mut::<MeasureToolState>();
            measure.tool.click(Some(MVec3::ZERO));
            measure.tool.click(Some(MVec3::X));
        }

        let out = run(
            &mut app,
            vec![
                UiToViewer::RemoveMeasurement {
                    id: "m-1".to_string(),
                },
                UiToViewer::RemoveMeasurement {
                    id: "m-1".to_string(),
                },
            ],
        );
        assert!(matches!(&out[0], ViewerToUi::MeasurementRemoved { id } if id == "m-1"));
        assert_eq!(error_code(&out[1]), Some(error_codes::UNKNOWN_MEASUREMENT));
    }

    #[test]
    fn test_measure_tool_off_discards_measurements() {
        let mut app = test_app();
        {
            let mut measure = app.world_mut().resource_mut::<MeasureToolState>();
            measure.tool.set_active(true);
            measure.tool.click(Some(MVec3::ZERO));
            measure.tool.click(Some(MVec3::X));
        }

        let out = run(&mut app, vec![UiToViewer::SetMeasureTool { active: false }]);
        assert!(matches!(
            out.as_slice(),
            [
                ViewerToUi::MeasureToolChanged { active: false },
                ViewerToUi::MeasurementsCleared
            ]
        ));
        let measure = app.world().resource::<MeasureToolState>();
        assert!(measure.tool.measurements().is_empty());

        // Nothing left to clear the second time
        let out = run(&mut app, vec![UiToViewer::SetMeasureTool { active: false }]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_cancel_pending_measurement() {
        let mut app = test_app();
        {
            let mut measure = app.world_mut().resource_mut::<MeasureToolState>();
            measure.tool.set_active(true);
            measure.tool.click(Some(MVec3::ZERO));
        }

        let out = run(&mut app, vec![UiToViewer::CancelMeasurement]);
        assert!(matches!(out.as_slice(), [ViewerToUi::MeasurementCancelled]));
        let measure = app.world().resource::<MeasureToolState>();
        assert!(measure.tool.pending_start().is_none());
        assert!(measure.tool.is_active());

        // Nothing pending, nothing reported
        let out = run(&mut app, vec![UiToViewer::CancelMeasurement]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_clear_measurements() {
        let mut app = test_app();
        {
            let mut measure = app.world_mut().resource_mut::<MeasureToolState>();
            measure.tool.set_active(true);
            measure.tool.click(Some(MVec3::ZERO));
        }
        let out = run(&mut app, vec![UiToViewer::ClearMeasurements]);
        assert!(matches!(out[0], ViewerToUi::MeasurementsCleared));
        let measure = app.world().resource::<MeasureToolState>();
        assert!(measure.tool.pending_start().is_none());
    }

    #[test]
    fn test_focus_room() {
        let mut app = test_app();
        let out = run(
            &mut app,
            vec![UiToViewer::CameraCommand(CameraCommand::FocusRoom {
                room_id: "bedroom".to_string(),
            })],
        );
        assert!(matches!(&out[0], ViewerToUi::RoomFocused { room_id } if room_id == "bedroom"));
        assert_eq!(
            app.world().resource::<TourFocus>().room_id.as_deref(),
            Some("bedroom")
        );

        let mut query = app.world_mut().query::<&OrbitCamera>();
        let orbit = query.single(app.world()).unwrap();
        assert!(orbit.goal.is_some());
    }

    #[test]
    fn test_focus_unknown_room() {
        let mut app = test_app();
        let out = run(
            &mut app,
            vec![UiToViewer::CameraCommand(CameraCommand::FocusRoom {
                room_id: "garage".to_string(),
            })],
        );
        assert_eq!(error_code(&out[0]), Some(error_codes::UNKNOWN_ROOM));
        assert!(app.world().resource::<TourFocus>().room_id.is_none());
    }

    #[test]
    fn test_inquiry_mentions_focused_room() {
        let mut app = test_app();
        app.world_mut().resource_mut::<TourFocus>().room_id = Some("kitchen".to_string());

        let out = run(
            &mut app,
            vec![UiToViewer::RequestInquiry(InquiryRequest::default())],
        );
        let ViewerToUi::InquiryLink { url, message } = &out[0] else {
            panic!("expected InquiryLink, got {out:?}");
        };
        assert!(url.starts_with("https://wa.me/628123456789?text="));
        assert!(message.contains("Currently viewing: Kitchen"));
    }

    #[test]
    fn test_request_state() {
        let mut app = test_app();
        let out = run(&mut app, vec![UiToViewer::RequestState]);
        assert!(matches!(out[0], ViewerToUi::Initialize { .. }));
    }
}
