//! Tour camera controller
//!
//! Controls:
//! - Middle mouse drag: Orbit around target
//! - Shift + Middle mouse drag: Pan
//! - Scroll wheel: Dolly (zoom)
//!
//! While idle the camera slowly rotates around its target. Room focus and
//! reset requests fly the camera to a goal view with exponential smoothing.

use std::f32::consts::{PI, TAU};

use bevy::input::mouse::{MouseButton, MouseMotion, MouseWheel};
use bevy::prelude::*;

/// Seconds without user input before self-rotation resumes
const AUTO_ROTATE_RESUME_DELAY: f32 = 3.0;

/// Smoothing rate of fly-to transitions (1/s)
const TRANSITION_RATE: f32 = 4.0;

/// Transition ends once every parameter is this close to the goal
const TRANSITION_EPSILON: f32 = 1e-3;

/// Pitch limit just short of straight up/down
const MAX_PITCH: f32 = 1.5;

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// A view the camera can fly to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraGoal {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

/// Camera orbit controller state
#[derive(Component)]
pub struct OrbitCamera {
    /// Point the camera orbits around
    pub target: Vec3,
    /// Distance from target
    pub distance: f32,
    /// Horizontal angle (yaw) in radians
    pub yaw: f32,
    /// Vertical angle (pitch) in radians
    pub pitch: f32,
    /// Orbit sensitivity (radians per pixel)
    pub orbit_sensitivity: f32,
    /// Pan sensitivity (units per pixel, scaled by distance)
    pub pan_sensitivity: f32,
    /// Zoom sensitivity (distance units per scroll line)
    pub zoom_sensitivity: f32,
    /// Minimum distance from target
    pub min_distance: f32,
    /// Maximum distance from target
    pub max_distance: f32,
    /// Self-rotation enabled
    pub auto_rotate: bool,
    /// Self-rotation speed in radians per second
    pub auto_rotate_speed: f32,
    /// Seconds since the user last moved the camera
    pub idle_secs: f32,
    /// Active fly-to transition
    pub goal: Option<CameraGoal>,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 12.0,
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: 0.7,
            orbit_sensitivity: 0.005,
            pan_sensitivity: 0.002,
            zoom_sensitivity: 1.0,
            min_distance: 0.5,
            max_distance: 60.0,
            auto_rotate: true,
            auto_rotate_speed: 0.15,
            idle_secs: AUTO_ROTATE_RESUME_DELAY,
            goal: None,
        }
    }
}

impl OrbitCamera {
    /// Start the camera at a goal view
    pub fn from_goal(goal: CameraGoal) -> Self {
        Self {
            target: goal.target,
            yaw: goal.yaw,
            pitch: goal.pitch,
            distance: goal.distance,
            ..Default::default()
        }
    }

    /// Calculate camera position from orbit parameters
    pub fn calculate_position(&self) -> Vec3 {
        // Pitch is angle from horizontal, yaw is angle around Y axis
        let horizontal_distance = self.distance * self.pitch.cos();
        let y = self.distance * self.pitch.sin();
        let x = horizontal_distance * self.yaw.sin();
        let z = horizontal_distance * self.yaw.cos();

        self.target + Vec3::new(x, y, z)
    }

    /// Rotate by a drag delta in pixels. Cancels any transition.
    pub fn orbit_by(&mut self, delta: Vec2) {
        self.yaw -= delta.x * self.orbit_sensitivity;
        self.pitch = (self.pitch - delta.y * self.orbit_sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
        self.mark_interaction();
    }

    /// Dolly by scroll lines (positive = closer). Cancels any transition.
    pub fn zoom_by(&mut self, scroll: f32) {
        // Scale zoom speed by current distance for consistent feel
        let zoom_amount = scroll * self.zoom_sensitivity * (self.distance * 0.1);
        self.distance = (self.distance - zoom_amount).clamp(self.min_distance, self.max_distance);
        self.mark_interaction();
    }

    /// Begin flying to `goal`. Self-rotation waits until the idle delay has
    /// passed again.
    pub fn fly_to(&mut self, goal: CameraGoal) {
        self.idle_secs = 0.0;
        self.goal = Some(CameraGoal {
            pitch: goal.pitch.clamp(-MAX_PITCH, MAX_PITCH),
            distance: goal.distance.clamp(self.min_distance, self.max_distance),
            ..goal
        });
    }

    fn mark_interaction(&mut self) {
        self.idle_secs = 0.0;
        self.goal = None;
    }

    /// Advance the transition and self-rotation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.idle_secs += dt;

        if let Some(goal) = self.goal {
            if self.step_towards(&goal, dt) {
                self.goal = None;
            }
            return;
        }

        if self.auto_rotate && self.idle_secs >= AUTO_ROTATE_RESUME_DELAY {
            self.yaw = (self.yaw + self.auto_rotate_speed * dt).rem_euclid(TAU);
        }
    }

    /// Move a fraction of the way to `goal`. Returns true once it has arrived.
    fn step_towards(&mut self, goal: &CameraGoal, dt: f32) -> bool {
        let alpha = 1.0 - (-TRANSITION_RATE * dt).exp();

        self.target = self.target.lerp(goal.target, alpha);
        self.yaw += shortest_angle(self.yaw, goal.yaw) * alpha;
        self.pitch += (goal.pitch - self.pitch) * alpha;
        self.distance += (goal.distance - self.distance) * alpha;

        let arrived = self.target.distance(goal.target) < TRANSITION_EPSILON
            && shortest_angle(self.yaw, goal.yaw).abs() < TRANSITION_EPSILON
            && (goal.pitch - self.pitch).abs() < TRANSITION_EPSILON
            && (goal.distance - self.distance).abs() < TRANSITION_EPSILON;

        if arrived {
            self.target = goal.target;
            self.yaw = goal.yaw;
            self.pitch = goal.pitch;
            self.distance = goal.distance;
        }
        arrived
    }
}

/// Signed difference `to - from` wrapped into [-PI, PI)
fn shortest_angle(from: f32, to: f32) -> f32 {
    (to - from + PI).rem_euclid(TAU) - PI
}

/// Plugin for tour camera controls
pub struct CameraControllerPlugin;

impl Plugin for CameraControllerPlugin {
    fn build(&self, app: &mut App) {
        // Orbit and pan both read MouseMotion, so they must run sequentially
        app.add_systems(
            Update,
            (
                camera_orbit_system,
                camera_pan_system.after(camera_orbit_system),
                camera_zoom_system,
                camera_tick_system
                    .after(camera_orbit_system)
                    .after(camera_pan_system)
                    .after(camera_zoom_system),
                update_camera_transform.after(camera_tick_system),
            ),
        );
    }
}

/// Handle orbit (middle mouse drag without shift)
fn camera_orbit_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    key_input: Res<ButtonInput<KeyCode>>,
    mut motion_events: MessageReader<MouseMotion>,
    mut camera_query: Query<&mut OrbitCamera>,
) {
    if !mouse_button.pressed(MouseButton::Middle) {
        motion_events.clear();
        return;
    }

    let shift_held =
        key_input.pressed(KeyCode::ShiftLeft) || key_input.pressed(KeyCode::ShiftRight);

    if shift_held {
        motion_events.clear();
        return; // Pan mode, not orbit
    }

    let mut delta = Vec2::ZERO;
    for event in motion_events.read() {
        delta += event.delta;
    }

    if delta == Vec2::ZERO {
        return;
    }

    for mut orbit in camera_query.iter_mut() {
        orbit.orbit_by(delta);
    }
}

/// Handle pan (shift + middle mouse drag)
fn camera_pan_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    key_input: Res<ButtonInput<KeyCode>>,
    mut motion_events: MessageReader<MouseMotion>,
    mut camera_query: Query<(&mut OrbitCamera, &Transform)>,
) {
    if !mouse_button.pressed(MouseButton::Middle) {
        motion_events.clear();
        return;
    }

    let shift_held =
        key_input.pressed(KeyCode::ShiftLeft) || key_input.pressed(KeyCode::ShiftRight);

    if !shift_held {
        motion_events.clear();
        return; // Orbit mode, not pan
    }

    let mut delta = Vec2::ZERO;
    for event in motion_events.read() {
        delta += event.delta;
    }

    if delta == Vec2::ZERO {
        return;
    }

    for (mut orbit, transform) in camera_query.iter_mut() {
        // Pan in camera's local XY plane
        let right = transform.rotation * Vec3::X;
        let up = transform.rotation * Vec3::Y;

        // Scale pan by distance so it feels consistent at different zoom levels
        let pan_scale = orbit.pan_sensitivity * orbit.distance;

        // Move target (negative to feel like dragging the scene)
        let pan_offset = (-right * delta.x + up * delta.y) * pan_scale;
        orbit.target += pan_offset;
        orbit.mark_interaction();
    }
}

/// Handle zoom (scroll wheel)
fn camera_zoom_system(
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut OrbitCamera>,
) {
    let mut scroll_delta = 0.0;
    for event in scroll_events.read() {
        scroll_delta += event.y;
    }

    if scroll_delta == 0.0 {
        return;
    }

    for mut orbit in camera_query.iter_mut() {
        orbit.zoom_by(scroll_delta);
    }
}

/// Per-frame self-rotation and fly-to interpolation
fn camera_tick_system(time: Res<Time>, mut camera_query: Query<&mut OrbitCamera>) {
    let dt = time.delta_secs();
    for mut orbit in camera_query.iter_mut() {
        orbit.tick(dt);
    }
}

/// Update camera transform from orbit state
fn update_camera_transform(
    mut camera_query: Query<(&OrbitCamera, &mut Transform), With<MainCamera>>,
) {
    for (orbit, mut transform) in camera_query.iter_mut() {
        let position = orbit.calculate_position();
        *transform = Transform::from_translation(position).looking_at(orbit.target, Vec3::Y);
    }
}
