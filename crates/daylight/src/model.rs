//! Sun orbit and banded intensity curve.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use crate::preset::EnvironmentPreset;

/// Hours in one day/night cycle
pub const HOURS_PER_DAY: f32 = 24.0;

/// Default radius of the sun's circular path around the scene origin
pub const DEFAULT_ORBIT_RADIUS: f32 = 10.0;

/// Default depth offset of the sun's orbit plane
pub const DEFAULT_ORBIT_DEPTH: f32 = 5.0;

/// Default upper bound for the sun intensity while above the horizon
pub const DEFAULT_MAX_SUN_INTENSITY: f32 = 1.0;

// Band boundaries in hours
const DAWN_START: f32 = 5.0;
const DAY_START: f32 = 7.0;
const SUNSET_START: f32 = 17.0;
const NIGHT_START: f32 = 19.0;

const NIGHT_SUN: f32 = 0.1;
const NIGHT_AMBIENT: f32 = 0.1;
const DAY_SUN: f32 = 1.0;
const DAY_AMBIENT: f32 = 0.4;

/// Lighting derived from a time of day. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingState {
    /// World-space position of the sun (the directional light looks from here to the origin)
    pub sun_position: Vec3,
    /// Unitless sun strength, >= 0
    pub sun_intensity: f32,
    /// Unitless ambient fill strength, >= 0
    pub ambient_intensity: f32,
    /// Discrete environment bundle for sky and light colours
    pub preset: EnvironmentPreset,
}

impl LightingState {
    /// True if the sun sits below the horizon plane
    pub fn sun_below_horizon(&self) -> bool {
        self.sun_position.y < 0.0
    }
}

/// Parameters of the sun orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaylightModel {
    /// Radius of the sun's circle in the vertical plane
    pub orbit_radius: f32,
    /// Constant z coordinate of the sun
    pub orbit_depth: f32,
    /// Cap applied to the sun intensity while the sun is above the horizon
    pub max_sun_intensity: f32,
}

impl Default for DaylightModel {
    fn default() -> Self {
        Self {
            orbit_radius: DEFAULT_ORBIT_RADIUS,
            orbit_depth: DEFAULT_ORBIT_DEPTH,
            max_sun_intensity: DEFAULT_MAX_SUN_INTENSITY,
        }
    }
}

impl DaylightModel {
    /// Sun position for the given hour.
    ///
    /// Midnight puts the sun straight below the origin, noon straight above it.
    pub fn sun_position(&self, time_of_day: f32) -> Vec3 {
        let hour = wrap_hour(time_of_day);
        let angle = hour / HOURS_PER_DAY * TAU;
        Vec3::new(
            self.orbit_radius * (angle - FRAC_PI_2).cos(),
            self.orbit_radius * (angle - FRAC_PI_2).sin(),
            self.orbit_depth,
        )
    }

    /// Compute the full lighting state for the given hour.
    pub fn lighting_at(&self, time_of_day: f32) -> LightingState {
        let hour = wrap_hour(time_of_day);
        let sun_position = self.sun_position(hour);
        let (band_sun, ambient_intensity, preset) = band_values(hour);

        let sun_intensity = if sun_position.y < 0.0 {
            // Fade out proportionally to how far the sun has sunk
            let depth_factor = (1.0 + sun_position.y / self.orbit_radius).max(0.0);
            band_sun * depth_factor
        } else {
            band_sun.min(self.max_sun_intensity)
        };

        LightingState {
            sun_position,
            sun_intensity,
            ambient_intensity,
            preset,
        }
    }
}

/// Lighting for `time_of_day` using the default orbit.
pub fn lighting_at(time_of_day: f32) -> LightingState {
    DaylightModel::default().lighting_at(time_of_day)
}

/// Preset for `time_of_day`, without computing the rest of the state.
pub fn environment_preset(time_of_day: f32) -> EnvironmentPreset {
    band_values(wrap_hour(time_of_day)).2
}

/// Wrap any finite hour into [0, 24). Non-finite input maps to midnight.
pub fn wrap_hour(time_of_day: f32) -> f32 {
    if !time_of_day.is_finite() {
        return 0.0;
    }
    let hour = time_of_day.rem_euclid(HOURS_PER_DAY);
    // rem_euclid can round tiny negatives up to exactly 24.0
    if hour >= HOURS_PER_DAY { 0.0 } else { hour }
}

/// (sun, ambient, preset) before the horizon adjustment
fn band_values(hour: f32) -> (f32, f32, EnvironmentPreset) {
    if (DAWN_START..DAY_START).contains(&hour) {
        let t = (hour - DAWN_START) / (DAY_START - DAWN_START);
        (lerp(0.0, 0.8, t), lerp(0.1, 0.3, t), EnvironmentPreset::Dawn)
    } else if (DAY_START..SUNSET_START).contains(&hour) {
        (DAY_SUN, DAY_AMBIENT, EnvironmentPreset::Day)
    } else if (SUNSET_START..NIGHT_START).contains(&hour) {
        let t = (hour - SUNSET_START) / (NIGHT_START - SUNSET_START);
        (lerp(1.0, 0.0, t), lerp(0.4, 0.2, t), EnvironmentPreset::Sunset)
    } else {
        (NIGHT_SUN, NIGHT_AMBIENT, EnvironmentPreset::Night)
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn samples(start: f32, end: f32) -> Vec<f32> {
        let steps = 200;
        (0..steps)
            .map(|i| start + (end - start) * i as f32 / steps as f32)
            .collect()
    }

    #[test]
    fn test_dawn_intensity_rises_within_bounds() {
        let mut previous = f32::MIN;
        for t in samples(5.0, 7.0) {
            let state = lighting_at(t);
            assert!(state.sun_intensity >= previous, "dropped at t={t}");
            assert!((0.0..=0.8).contains(&state.sun_intensity));
            previous = state.sun_intensity;
        }
    }

    #[test]
    fn test_sunset_intensity_falls_within_bounds() {
        let mut previous = f32::MAX;
        for t in samples(17.0, 19.0) {
            let state = lighting_at(t);
            assert!(state.sun_intensity <= previous, "rose at t={t}");
            assert!((0.0..=1.0).contains(&state.sun_intensity));
            previous = state.sun_intensity;
        }
    }

    #[test]
    fn test_preset_band_boundaries() {
        assert_eq!(environment_preset(4.999), EnvironmentPreset::Night);
        assert_eq!(environment_preset(5.0), EnvironmentPreset::Dawn);
        assert_eq!(environment_preset(6.999), EnvironmentPreset::Dawn);
        assert_eq!(environment_preset(7.0), EnvironmentPreset::Day);
        assert_eq!(environment_preset(16.999), EnvironmentPreset::Day);
        assert_eq!(environment_preset(17.0), EnvironmentPreset::Sunset);
        assert_eq!(environment_preset(18.999), EnvironmentPreset::Sunset);
        assert_eq!(environment_preset(19.0), EnvironmentPreset::Night);
        assert_eq!(environment_preset(0.0), EnvironmentPreset::Night);
        assert_eq!(environment_preset(23.99), EnvironmentPreset::Night);
    }

    #[test]
    fn test_noon_sun_is_overhead() {
        let state = lighting_at(12.0);
        assert!(state.sun_position.x.abs() < EPSILON);
        assert!((state.sun_position.y - DEFAULT_ORBIT_RADIUS).abs() < EPSILON);
        assert_eq!(state.sun_position.z, DEFAULT_ORBIT_DEPTH);
        assert_eq!(state.sun_intensity, 1.0);
        assert_eq!(state.ambient_intensity, 0.4);
        assert_eq!(state.preset, EnvironmentPreset::Day);
    }

    #[test]
    fn test_midnight_sun_is_fully_faded() {
        let state = lighting_at(0.0);
        assert!(state.sun_below_horizon());
        assert!((state.sun_position.y + DEFAULT_ORBIT_RADIUS).abs() < EPSILON);
        assert!(state.sun_intensity.abs() < EPSILON);
        assert_eq!(state.ambient_intensity, NIGHT_AMBIENT);
    }

    #[test]
    fn test_intensity_cap_above_horizon() {
        let model = DaylightModel {
            max_sun_intensity: 0.5,
            ..Default::default()
        };
        assert_eq!(model.lighting_at(12.0).sun_intensity, 0.5);
        // Dawn below horizon is unaffected by the cap
        let early = model.lighting_at(5.5);
        assert!(early.sun_below_horizon());
        assert!(early.sun_intensity < 0.5);
    }

    #[test]
    fn test_intensities_never_negative() {
        for t in samples(0.0, 24.0) {
            let state = lighting_at(t);
            assert!(state.sun_intensity >= 0.0);
            assert!(state.ambient_intensity >= 0.0);
        }
    }

    #[test]
    fn test_repeatable_output() {
        for t in [0.0, 5.25, 6.5, 12.0, 17.75, 21.3] {
            let a = lighting_at(t);
            let b = lighting_at(t);
            assert_eq!(
                a.sun_position.to_array().map(f32::to_bits),
                b.sun_position.to_array().map(f32::to_bits)
            );
            assert_eq!(a.sun_intensity.to_bits(), b.sun_intensity.to_bits());
            assert_eq!(a.ambient_intensity.to_bits(), b.ambient_intensity.to_bits());
            assert_eq!(a.preset, b.preset);
        }
    }

    #[test]
    fn test_wrap_hour() {
        assert_eq!(wrap_hour(24.0), 0.0);
        assert_eq!(wrap_hour(25.5), 1.5);
        assert_eq!(wrap_hour(-1.0), 23.0);
        assert_eq!(wrap_hour(f32::NAN), 0.0);
        assert_eq!(wrap_hour(f32::INFINITY), 0.0);
    }
}
