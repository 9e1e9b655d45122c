//! Point-to-point measurement in the tour scene
//!
//! A left click (or a `MeasureClick` from the UI) is turned into a world ray
//! through the main camera's viewport. The ray is tested against every
//! `Measurable` mesh and the nearest hit is fed to the measurement tool.
//! Completed measurements are drawn as gizmo lines with a floating distance
//! label at their midpoint.

use bevy::input::mouse::MouseButton;
use bevy::mesh::{Indices, VertexAttributeValues};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use hunian_ipc::{MeasurementInfo, ViewerToUi};
use measuring::{
    ClickOutcome, Measurement, MeasurementTool, MeshRaycastData, Ray, nearest_hit,
    raycast_mesh_world,
};

use crate::OutboundUiMessages;
use crate::camera::MainCamera;
use crate::layout::Measurable;

const LINE_COLOR: Color = Color::srgb(1.0, 0.8, 0.1);
const PENDING_COLOR: Color = Color::srgb(0.2, 0.9, 1.0);
const ENDPOINT_RADIUS: f32 = 0.04;

/// Measurement tool resource
#[derive(Resource, Default)]
pub struct MeasureToolState {
    pub tool: MeasurementTool,
}

/// A click to measure at, in logical viewport pixels (origin top-left)
#[derive(Message, Debug, Clone, Copy)]
pub struct MeasureClick {
    pub viewport_position: Vec2,
}

/// UI label floating over a measurement
#[derive(Component)]
pub struct MeasurementLabel {
    pub measurement_id: String,
}

/// Plugin for the measurement tool
pub struct MeasurementPlugin;

impl Plugin for MeasurementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MeasureToolState>()
            .add_message::<MeasureClick>()
            .add_systems(
                Update,
                (
                    handle_measure_mouse_input,
                    process_measure_clicks.after(handle_measure_mouse_input),
                    draw_measurements.after(process_measure_clicks),
                    sync_measurement_labels.after(process_measure_clicks),
                ),
            );
    }
}

/// Protocol view of a measurement
pub fn measurement_info(measurement: &Measurement) -> MeasurementInfo {
    MeasurementInfo {
        id: measurement.id.clone(),
        start: measurement.start.to_array(),
        end: measurement.end.to_array(),
        distance: measurement.distance,
        label: measurement.label(),
    }
}

/// Extract triangle data from a Bevy mesh. Returns `None` for meshes without
/// float3 positions or indices.
pub fn mesh_raycast_data(mesh: &Mesh) -> Option<MeshRaycastData> {
    let positions = match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
        Some(VertexAttributeValues::Float32x3(v)) => v,
        _ => return None,
    };

    let indices = match mesh.indices() {
        Some(Indices::U32(i)) => i.clone(),
        Some(Indices::U16(i)) => i.iter().map(|&x| x as u32).collect(),
        None => return None,
    };

    Some(MeshRaycastData::new(
        positions.iter().map(|&p| measuring_vec(Vec3::from(p))).collect(),
        indices,
    ))
}

/// Build the pick ray for a viewport position
pub fn click_ray(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    viewport_position: Vec2,
) -> Option<Ray> {
    let ray = camera
        .viewport_to_world(camera_transform, viewport_position)
        .ok()?;
    Ray::new(measuring_vec(ray.origin), measuring_vec(*ray.direction))
}

fn measuring_vec(v: Vec3) -> measuring::glam::Vec3 {
    measuring::glam::Vec3::from_array(v.to_array())
}

fn scene_vec(v: measuring::glam::Vec3) -> Vec3 {
    Vec3::from_array(v.to_array())
}

/// Turn left clicks into measure clicks while the tool is active
fn handle_measure_mouse_input(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    state: Res<MeasureToolState>,
    mut clicks: MessageWriter<MeasureClick>,
) {
    if !state.tool.is_active() || !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    if let Some(cursor) = window.cursor_position() {
        clicks.write(MeasureClick {
            viewport_position: cursor,
        });
    }
}

/// Raycast each click and advance the measurement tool
fn process_measure_clicks(
    mut clicks: MessageReader<MeasureClick>,
    mut state: ResMut<MeasureToolState>,
    mut outbound: ResMut<OutboundUiMessages>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mesh_query: Query<(&Mesh3d, &GlobalTransform), With<Measurable>>,
    meshes: Res<Assets<Mesh>>,
) {
    if !state.tool.is_active() {
        clicks.clear();
        return;
    }

    let Ok((camera, camera_transform)) = camera_query.single() else {
        clicks.clear();
        return;
    };

    for click in clicks.read() {
        let hit = click_ray(camera, camera_transform, click.viewport_position).and_then(|ray| {
            nearest_hit(mesh_query.iter().filter_map(|(mesh_handle, transform)| {
                let mesh = meshes.get(&mesh_handle.0)?;
                let data = mesh_raycast_data(mesh)?;
                let world_from_local = measuring::glam::Affine3A::from_cols_array(
                    &transform.affine().to_cols_array(),
                );
                raycast_mesh_world(&ray, &data, &world_from_local)
            }))
        });

        match state.tool.click(hit.map(|h| h.point)) {
            ClickOutcome::Ignored => {
                debug!("Measure click at {:?} hit nothing", click.viewport_position);
            }
            ClickOutcome::Started(point) => {
                outbound.send(ViewerToUi::MeasurementStarted {
                    point: point.to_array(),
                });
            }
            ClickOutcome::Completed(measurement) => {
                info!("Measured {} ({})", measurement.id, measurement.label());
                outbound.send(ViewerToUi::MeasurementAdded(measurement_info(&measurement)));
            }
        }
    }
}

/// Draw completed measurements and the pending first point
fn draw_measurements(mut gizmos: Gizmos, state: Res<MeasureToolState>) {
    for measurement in state.tool.measurements() {
        let start = scene_vec(measurement.start);
        let end = scene_vec(measurement.end);
        gizmos.line(start, end, LINE_COLOR);
        gizmos.sphere(Isometry3d::from_translation(start), ENDPOINT_RADIUS, LINE_COLOR);
        gizmos.sphere(Isometry3d::from_translation(end), ENDPOINT_RADIUS, LINE_COLOR);
    }

    if let Some(pending) = state.tool.pending_start() {
        gizmos.sphere(
            Isometry3d::from_translation(scene_vec(pending)),
            ENDPOINT_RADIUS * 1.5,
            PENDING_COLOR,
        );
    }
}

/// Keep one label per measurement, positioned over its midpoint
fn sync_measurement_labels(
    mut commands: Commands,
    state: Res<MeasureToolState>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut labels: Query<(Entity, &MeasurementLabel, &mut Node, &mut Visibility)>,
) {
    let measurements = state.tool.measurements();

    // Despawn labels whose measurement is gone
    for (entity, label, _, _) in labels.iter() {
        if !measurements.iter().any(|m| m.id == label.measurement_id) {
            commands.entity(entity).despawn();
        }
    }

    let camera = camera_query.single().ok();
    let screen_position = |measurement: &Measurement| {
        let (camera, transform) = camera?;
        camera
            .world_to_viewport(transform, scene_vec(measurement.midpoint()))
            .ok()
    };

    for measurement in measurements {
        let position = screen_position(measurement);
        let existing = labels
            .iter_mut()
            .find(|(_, label, _, _)| label.measurement_id == measurement.id);

        match existing {
            Some((_, _, mut node, mut visibility)) => {
                if let Some(position) = position {
                    node.left = Val::Px(position.x);
                    node.top = Val::Px(position.y);
                    *visibility = Visibility::Inherited;
                } else {
                    // Midpoint behind the camera
                    *visibility = Visibility::Hidden;
                }
            }
            None => {
                let position = position.unwrap_or(Vec2::ZERO);
                commands.spawn((
                    Text::new(measurement.label()),
                    TextColor(Color::WHITE),
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(position.x),
                        top: Val::Px(position.y),
                        padding: UiRect::axes(Val::Px(6.0), Val::Px(2.0)),
                        ..default()
                    },
                    MeasurementLabel {
                        measurement_id: measurement.id.clone(),
                    },
                ));
            }
        }
    }
}
