//! Time of day state, driven by a slider or by automatic playback.

use crate::model::{DaylightModel, LightingState, wrap_hour};

/// Default time shown when a tour opens
pub const DEFAULT_TIME_OF_DAY: f32 = 12.0;

/// Default playback speed in simulated hours per real second
pub const DEFAULT_HOURS_PER_SECOND: f32 = 0.5;

/// Current time of day and playback settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaylightCycle {
    time_of_day: f32,
    /// Advance automatically every frame
    pub playing: bool,
    /// Playback speed
    pub hours_per_second: f32,
}

impl Default for DaylightCycle {
    fn default() -> Self {
        Self {
            time_of_day: DEFAULT_TIME_OF_DAY,
            playing: false,
            hours_per_second: DEFAULT_HOURS_PER_SECOND,
        }
    }
}

impl DaylightCycle {
    /// Create a paused cycle at the given hour
    pub fn at(time_of_day: f32) -> Self {
        let mut cycle = Self::default();
        cycle.set_time(time_of_day);
        cycle
    }

    /// Current hour in [0, 24)
    pub fn time_of_day(&self) -> f32 {
        self.time_of_day
    }

    /// Set the hour, wrapping into [0, 24).
    ///
    /// Returns false and keeps the previous value for NaN or infinite input.
    pub fn set_time(&mut self, time_of_day: f32) -> bool {
        if !time_of_day.is_finite() {
            tracing::warn!("Ignoring non-finite time of day: {}", time_of_day);
            return false;
        }
        self.time_of_day = wrap_hour(time_of_day);
        true
    }

    /// Advance by `delta_secs` of real time when playing.
    ///
    /// Returns true if the time changed.
    pub fn advance(&mut self, delta_secs: f32) -> bool {
        if !self.playing || delta_secs <= 0.0 || self.hours_per_second == 0.0 {
            return false;
        }
        self.set_time(self.time_of_day + self.hours_per_second * delta_secs)
    }

    /// Lighting for the current hour
    pub fn lighting(&self, model: &DaylightModel) -> LightingState {
        model.lighting_at(self.time_of_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::EnvironmentPreset;

    #[test]
    fn test_default_is_paused_noon() {
        let cycle = DaylightCycle::default();
        assert_eq!(cycle.time_of_day(), 12.0);
        assert!(!cycle.playing);
    }

    #[test]
    fn test_set_time_wraps() {
        let mut cycle = DaylightCycle::default();
        assert!(cycle.set_time(26.0));
        assert_eq!(cycle.time_of_day(), 2.0);
        assert!(cycle.set_time(-2.0));
        assert_eq!(cycle.time_of_day(), 22.0);
    }

    #[test]
    fn test_set_time_rejects_nan() {
        let mut cycle = DaylightCycle::at(8.0);
        assert!(!cycle.set_time(f32::NAN));
        assert_eq!(cycle.time_of_day(), 8.0);
    }

    #[test]
    fn test_advance_only_when_playing() {
        let mut cycle = DaylightCycle::at(10.0);
        assert!(!cycle.advance(1.0));
        assert_eq!(cycle.time_of_day(), 10.0);

        cycle.playing = true;
        cycle.hours_per_second = 2.0;
        assert!(cycle.advance(0.5));
        assert_eq!(cycle.time_of_day(), 11.0);
    }

    #[test]
    fn test_advance_wraps_past_midnight() {
        let mut cycle = DaylightCycle::at(23.5);
        cycle.playing = true;
        cycle.hours_per_second = 1.0;
        cycle.advance(1.0);
        assert_eq!(cycle.time_of_day(), 0.5);
        assert_eq!(
            cycle.lighting(&DaylightModel::default()).preset,
            EnvironmentPreset::Night
        );
    }
}
