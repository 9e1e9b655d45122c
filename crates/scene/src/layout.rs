//! Property layout - builds room geometry from the layout file

use bevy::prelude::*;
use hunian_config::{PropertyLayout, RoomLayout};

use crate::camera::CameraGoal;

/// Thickness of floors and walls in metres
const WALL_THICKNESS: f32 = 0.1;

/// Marker for geometry the measurement tool can hit
#[derive(Component)]
pub struct Measurable;

/// Tags geometry with the room it belongs to
#[derive(Component)]
pub struct RoomPart {
    pub room_id: String,
}

/// Room the camera is currently focused on, if any
#[derive(Resource, Default)]
pub struct TourFocus {
    pub room_id: Option<String>,
}

/// Plugin that spawns the rooms of the current `PropertyLayout`
pub struct PropertyLayoutPlugin;

impl Plugin for PropertyLayoutPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PropertyLayout>()
            .init_resource::<TourFocus>()
            .add_systems(Startup, spawn_rooms);
    }
}

/// Camera view for one room
pub fn room_goal(room: &RoomLayout) -> CameraGoal {
    let [x, y, z] = room.center;
    CameraGoal {
        // Look at the middle of the room, not the floor
        target: Vec3::new(x, y + room.size[1] * 0.5, z),
        yaw: room.viewpoint.yaw,
        pitch: room.viewpoint.pitch,
        distance: room.viewpoint.distance,
    }
}

/// Camera view showing the whole property
pub fn overview_goal(layout: &PropertyLayout) -> CameraGoal {
    let mut min = Vec3::splat(f32::MAX);
    let mut max = Vec3::splat(f32::MIN);
    for room in &layout.rooms {
        let center = Vec3::from_array(room.center);
        let half = Vec3::new(room.size[0] * 0.5, 0.0, room.size[2] * 0.5);
        min = min.min(center - half);
        max = max.max(center + half + Vec3::Y * room.size[1]);
    }

    if layout.rooms.is_empty() {
        min = Vec3::ZERO;
        max = Vec3::ZERO;
    }

    let extent = (max - min).max_element();
    CameraGoal {
        target: (min + max) * 0.5,
        yaw: std::f32::consts::FRAC_PI_4,
        pitch: 0.75,
        distance: extent * 1.4 + 4.0,
    }
}

/// Floor slab and four walls for a room, as (size, center) boxes
pub fn room_boxes(room: &RoomLayout) -> Vec<(Vec3, Vec3)> {
    let center = Vec3::from_array(room.center);
    let [width, height, depth] = room.size;
    let wall_y = center.y + height * 0.5;

    vec![
        // Floor, top surface at the room's floor level
        (
            Vec3::new(width, WALL_THICKNESS, depth),
            center - Vec3::Y * (WALL_THICKNESS * 0.5),
        ),
        // North / south walls
        (
            Vec3::new(width, height, WALL_THICKNESS),
            Vec3::new(center.x, wall_y, center.z - depth * 0.5),
        ),
        (
            Vec3::new(width, height, WALL_THICKNESS),
            Vec3::new(center.x, wall_y, center.z + depth * 0.5),
        ),
        // West / east walls
        (
            Vec3::new(WALL_THICKNESS, height, depth),
            Vec3::new(center.x - width * 0.5, wall_y, center.z),
        ),
        (
            Vec3::new(WALL_THICKNESS, height, depth),
            Vec3::new(center.x + width * 0.5, wall_y, center.z),
        ),
    ]
}

fn spawn_rooms(
    mut commands: Commands,
    layout: Res<PropertyLayout>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.76, 0.64, 0.5),
        perceptual_roughness: 0.8,
        ..default()
    });
    // Translucent walls keep the interior visible from the orbit camera
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.92, 0.9, 0.86, 0.35),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.9,
        ..default()
    });

    for room in &layout.rooms {
        for (index, (size, center)) in room_boxes(room).into_iter().enumerate() {
            let (material, part) = if index == 0 {
                (floor_material.clone(), "floor")
            } else {
                (wall_material.clone(), "wall")
            };

            commands.spawn((
                Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
                MeshMaterial3d(material),
                Transform::from_translation(center),
                Name::new(format!("{} {}", room.name, part)),
                Measurable,
                RoomPart {
                    room_id: room.id.clone(),
                },
            ));
        }
    }

    info!(
        "Spawned {} rooms for '{}'",
        layout.rooms.len(),
        layout.property_name
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_goal_targets_room_middle() {
        let layout = PropertyLayout::demo();
        let kitchen = layout.room("kitchen").unwrap();
        let goal = room_goal(kitchen);
        assert_eq!(goal.target, Vec3::new(5.0, 1.5, -0.5));
        assert_eq!(goal.distance, kitchen.viewpoint.distance);
    }

    #[test]
    fn test_overview_covers_all_rooms() {
        let layout = PropertyLayout::demo();
        let goal = overview_goal(&layout);
        // Demo spans x -3..7, z -7.5..2.5, y 0..3
        assert!((goal.target - Vec3::new(2.0, 1.5, -2.5)).length() < 1e-5);
        assert!((goal.distance - (10.0 * 1.4 + 4.0)).abs() < 1e-4);
    }

    #[test]
    fn test_room_boxes_enclose_room() {
        let room = &PropertyLayout::demo().rooms[0];
        let boxes = room_boxes(room);
        assert_eq!(boxes.len(), 5);

        let (floor_size, floor_center) = boxes[0];
        assert_eq!(floor_size, Vec3::new(6.0, WALL_THICKNESS, 5.0));
        assert!((floor_center.y + floor_size.y * 0.5).abs() < 1e-6);

        let (_, north_center) = boxes[1];
        assert_eq!(north_center, Vec3::new(0.0, 1.5, -2.5));
    }
}
