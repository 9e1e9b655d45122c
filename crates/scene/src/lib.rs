//! 3D property tour scene for Hunian
//!
//! This crate owns everything that lives inside the Bevy world: the room
//! geometry, the orbit camera, time-of-day lighting, the measurement tool and
//! the handling of UI commands. The app crate feeds UI messages in through
//! [`InboundUiMessages`] and forwards [`OutboundUiMessages`] to the frontend.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use hunian_config::{PropertyLayout, TourConfig};
use hunian_ipc::{RoomInfo, TourInfo, UiToViewer, ViewerToUi};

mod camera;
mod dispatch;
mod inquiry;
mod layout;
mod lighting;
mod measurement;

pub use camera::{CameraControllerPlugin, CameraGoal, MainCamera, OrbitCamera};
pub use dispatch::{DispatchPlugin, dispatch_ui_messages};
pub use inquiry::{build_inquiry, inquiry_details};
pub use layout::{
    Measurable, PropertyLayoutPlugin, RoomPart, TourFocus, overview_goal, room_boxes, room_goal,
};
pub use lighting::{LightingPlugin, SceneDaylight, SunLight};
pub use measurement::{
    MeasureClick, MeasureToolState, MeasurementLabel, MeasurementPlugin, click_ray,
    measurement_info, mesh_raycast_data,
};

/// Resource for queuing messages to send to the UI
/// The app crate drains this and hands it to the frontend bridge
#[derive(Resource, Default)]
pub struct OutboundUiMessages {
    pub messages: Vec<ViewerToUi>,
}

impl OutboundUiMessages {
    /// Queue a message to be sent to the UI
    pub fn send(&mut self, msg: ViewerToUi) {
        self.messages.push(msg);
    }

    /// Take all queued messages, leaving the queue empty
    pub fn drain(&mut self) -> Vec<ViewerToUi> {
        std::mem::take(&mut self.messages)
    }
}

/// Commands from the UI and from hotkeys, handled once per frame
#[derive(Resource, Default)]
pub struct InboundUiMessages {
    pub messages: Vec<UiToViewer>,
}

impl InboundUiMessages {
    pub fn push(&mut self, msg: UiToViewer) {
        self.messages.push(msg);
    }

    pub fn drain(&mut self) -> Vec<UiToViewer> {
        std::mem::take(&mut self.messages)
    }
}

/// Full tour state, sent on startup and whenever the UI asks for it
pub fn initialize_message(
    layout: &PropertyLayout,
    measure: &MeasureToolState,
    daylight: &SceneDaylight,
) -> ViewerToUi {
    ViewerToUi::Initialize {
        tour: TourInfo {
            property_name: layout.property_name.clone(),
            reference: layout.reference.clone(),
            rooms: layout
                .rooms
                .iter()
                .map(|room| RoomInfo {
                    id: room.id.clone(),
                    name: room.name.clone(),
                })
                .collect(),
            measure_tool_active: measure.tool.is_active(),
            measurements: measure
                .tool
                .measurements()
                .iter()
                .map(measurement_info)
                .collect(),
        },
        lighting: daylight.info(),
    }
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        // Resources inserted by the app before this plugin take precedence
        let config = app
            .world()
            .get_resource::<TourConfig>()
            .cloned()
            .unwrap_or_default();
        if !app.world().contains_resource::<SceneDaylight>() {
            app.insert_resource(SceneDaylight::from_config(&config));
        }
        app.insert_resource(config);

        app.init_resource::<OutboundUiMessages>();
        app.init_resource::<InboundUiMessages>();

        app.add_plugins(PropertyLayoutPlugin);
        app.add_plugins(CameraControllerPlugin);
        app.add_plugins(LightingPlugin);
        app.add_plugins(MeasurementPlugin);
        app.add_plugins(DispatchPlugin);

        app.add_systems(Startup, (setup_camera, send_initial_state));
    }
}

/// Spawn the tour camera looking at the whole property
fn setup_camera(mut commands: Commands, layout: Res<PropertyLayout>, config: Res<TourConfig>) {
    // TonyMcMapFace requires tonemapping_luts which needs zstd
    let orbit_camera = OrbitCamera {
        auto_rotate: config.auto_rotate_speed > 0.0,
        auto_rotate_speed: config.auto_rotate_speed,
        ..OrbitCamera::from_goal(overview_goal(&layout))
    };
    let camera_position = orbit_camera.calculate_position();
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(camera_position).looking_at(orbit_camera.target, Vec3::Y),
        Tonemapping::Reinhard,
        MainCamera,
        orbit_camera,
    ));

    info!("Tour camera spawned for '{}'", layout.property_name);
}

fn send_initial_state(
    layout: Res<PropertyLayout>,
    measure: Res<MeasureToolState>,
    daylight: Res<SceneDaylight>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    outbound.send(initialize_message(&layout, &measure, &daylight));
}
