//! Time-of-day sun/sky lighting

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use daylight::{DaylightCycle, DaylightModel, EnvironmentPreset, LightingState};
use hunian_config::TourConfig;
use hunian_ipc::{LightingInfo, ViewerToUi};

use crate::OutboundUiMessages;

/// Illuminance of the sun at intensity 1.0 (lux)
const SUN_ILLUMINANCE: f32 = 10000.0;

/// Ambient brightness at intensity 1.0
const AMBIENT_BRIGHTNESS: f32 = 1250.0;

/// Marker component for the sun directional light
#[derive(Component)]
pub struct SunLight;

/// Resource holding the time of day and the model that turns it into light
#[derive(Resource)]
pub struct SceneDaylight {
    pub cycle: DaylightCycle,
    pub model: DaylightModel,
    /// Flag indicating the time changed and lights need to be updated
    pub dirty: bool,
    /// Preset last reported to the UI
    last_preset: Option<EnvironmentPreset>,
}

impl Default for SceneDaylight {
    fn default() -> Self {
        Self {
            cycle: DaylightCycle::default(),
            model: DaylightModel::default(),
            dirty: true, // Apply on first frame
            last_preset: None,
        }
    }
}

impl SceneDaylight {
    /// Daylight starting at the configured hour and playback speed
    pub fn from_config(config: &TourConfig) -> Self {
        let mut cycle = DaylightCycle::at(config.time_of_day);
        cycle.hours_per_second = config.playback_speed;
        Self {
            cycle,
            ..Default::default()
        }
    }

    /// Jump to an hour. Returns false for non-finite input.
    pub fn set_time(&mut self, hours: f32) -> bool {
        let changed = self.cycle.set_time(hours);
        self.dirty |= changed;
        changed
    }

    /// Lighting for the current hour
    pub fn state(&self) -> LightingState {
        self.cycle.lighting(&self.model)
    }

    /// Protocol view of the current lighting
    pub fn info(&self) -> LightingInfo {
        let state = self.state();
        LightingInfo {
            time_of_day: self.cycle.time_of_day(),
            sun_position: state.sun_position.to_array(),
            sun_intensity: state.sun_intensity,
            ambient_intensity: state.ambient_intensity,
            preset: state.preset,
            playing: self.cycle.playing,
        }
    }

    /// Record `preset` as reported. Returns true if it differs from the last one.
    fn note_preset(&mut self, preset: EnvironmentPreset) -> bool {
        let changed = self.last_preset != Some(preset);
        self.last_preset = Some(preset);
        changed
    }
}

fn srgb(color: [f32; 3]) -> Color {
    Color::srgb(color[0], color[1], color[2])
}

/// Plugin for time-of-day scene lighting
pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneDaylight>()
            .add_systems(Startup, setup_lighting)
            .add_systems(Update, (advance_daylight, update_lighting).chain());
    }
}

/// Spawn the sun light and ambient light
fn setup_lighting(mut commands: Commands, daylight: Res<SceneDaylight>) {
    let state = daylight.state();
    let sun_position = Vec3::from_array(state.sun_position.to_array());

    commands.spawn((
        DirectionalLight {
            illuminance: state.sun_intensity * SUN_ILLUMINANCE,
            color: srgb(state.preset.sun_color()),
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(sun_position).looking_at(Vec3::ZERO, Vec3::Y),
        SunLight,
    ));

    // Global ambient light is a resource, not an entity
    commands.insert_resource(GlobalAmbientLight {
        color: srgb(state.preset.ambient_color()),
        brightness: state.ambient_intensity * AMBIENT_BRIGHTNESS,
        ..default()
    });
    commands.insert_resource(ClearColor(srgb(state.preset.sky_color())));

    info!(
        "Scene lighting initialized at {:.2}h ({})",
        daylight.cycle.time_of_day(),
        state.preset
    );
}

/// Advance playback and tell the UI when the preset band changes
fn advance_daylight(
    time: Res<Time>,
    mut daylight: ResMut<SceneDaylight>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    if !daylight.cycle.advance(time.delta_secs()) {
        return;
    }
    daylight.dirty = true;

    let preset = daylight.state().preset;
    if daylight.note_preset(preset) {
        debug!("Daylight playback entered {}", preset);
        outbound.send(ViewerToUi::LightingChanged(daylight.info()));
    }
}

/// Apply the lighting state when the time has changed
fn update_lighting(
    mut daylight: ResMut<SceneDaylight>,
    mut sun_query: Query<(&mut DirectionalLight, &mut Transform), With<SunLight>>,
    mut ambient_light: ResMut<GlobalAmbientLight>,
    mut clear_color: ResMut<ClearColor>,
) {
    if !daylight.dirty {
        return;
    }

    let state = daylight.state();
    let sun_position = Vec3::from_array(state.sun_position.to_array());

    for (mut light, mut transform) in sun_query.iter_mut() {
        light.illuminance = state.sun_intensity * SUN_ILLUMINANCE;
        light.color = srgb(state.preset.sun_color());
        *transform = Transform::from_translation(sun_position).looking_at(Vec3::ZERO, Vec3::Y);
    }

    ambient_light.color = srgb(state.preset.ambient_color());
    ambient_light.brightness = state.ambient_intensity * AMBIENT_BRIGHTNESS;
    clear_color.0 = srgb(state.preset.sky_color());

    daylight.note_preset(state.preset);
    daylight.dirty = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = TourConfig {
            time_of_day: 18.0,
            playback_speed: 2.0,
            ..Default::default()
        };
        let daylight = SceneDaylight::from_config(&config);
        assert_eq!(daylight.cycle.time_of_day(), 18.0);
        assert_eq!(daylight.cycle.hours_per_second, 2.0);
        assert!(daylight.dirty);
    }

    #[test]
    fn test_info_reflects_state() {
        let mut daylight = SceneDaylight::default();
        daylight.set_time(6.0);
        let info = daylight.info();
        assert_eq!(info.time_of_day, 6.0);
        assert_eq!(info.preset, EnvironmentPreset::Dawn);
        assert!(!info.playing);
    }

    #[test]
    fn test_set_time_rejects_nan() {
        let mut daylight = SceneDaylight::default();
        daylight.dirty = false;
        assert!(!daylight.set_time(f32::NAN));
        assert!(!daylight.dirty);
    }

    #[test]
    fn test_note_preset_reports_changes_once() {
        let mut daylight = SceneDaylight::default();
        assert!(daylight.note_preset(EnvironmentPreset::Day));
        assert!(!daylight.note_preset(EnvironmentPreset::Day));
        assert!(daylight.note_preset(EnvironmentPreset::Sunset));
    }
}
