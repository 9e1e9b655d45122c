//! Tour settings read from the environment.

use std::path::PathBuf;
use std::str::FromStr;

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Default hour shown when the tour opens
pub const DEFAULT_TIME_OF_DAY: f32 = 12.0;

/// Default daylight playback speed (simulated hours per second)
pub const DEFAULT_PLAYBACK_SPEED: f32 = 0.5;

/// Default camera self-rotation speed in radians per second
pub const DEFAULT_AUTO_ROTATE_SPEED: f32 = 0.15;

/// Country code applied to local agent numbers (Indonesia)
pub const DEFAULT_COUNTRY_CODE: &str = "62";

/// Settings for one tour session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct TourConfig {
    /// Initial time of day in hours
    pub time_of_day: f32,
    /// Daylight playback speed
    pub playback_speed: f32,
    /// Camera self-rotation speed; 0 disables it
    pub auto_rotate_speed: f32,
    /// Listing agent's WhatsApp number, in any common notation
    pub agent_whatsapp: Option<String>,
    /// Country code for numbers written with a trunk `0`
    pub default_country_code: String,
    /// Property layout file; the demo layout is used when unset
    pub layout_path: Option<PathBuf>,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            time_of_day: DEFAULT_TIME_OF_DAY,
            playback_speed: DEFAULT_PLAYBACK_SPEED,
            auto_rotate_speed: DEFAULT_AUTO_ROTATE_SPEED,
            agent_whatsapp: None,
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
            layout_path: None,
        }
    }
}

impl TourConfig {
    /// Read `HUNIAN_*` environment variables on top of the defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(hours) = parse_var(&lookup, "HUNIAN_TIME_OF_DAY") {
            config.time_of_day = hours;
        }
        if let Some(speed) = parse_var(&lookup, "HUNIAN_PLAYBACK_SPEED") {
            config.playback_speed = speed;
        }
        if let Some(speed) = parse_var(&lookup, "HUNIAN_AUTO_ROTATE") {
            config.auto_rotate_speed = speed;
        }
        if let Some(phone) = lookup("HUNIAN_AGENT_WHATSAPP").filter(|v| !v.trim().is_empty()) {
            config.agent_whatsapp = Some(phone);
        }
        if let Some(code) = lookup("HUNIAN_COUNTRY_CODE").filter(|v| !v.trim().is_empty()) {
            config.default_country_code = code.trim().to_string();
        }
        if let Some(path) = lookup("HUNIAN_LAYOUT").filter(|v| !v.trim().is_empty()) {
            config.layout_path = Some(PathBuf::from(path));
        }

        config
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring unparsable {}={:?}, using default", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        assert_eq!(TourConfig::from_lookup(|_| None), TourConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = TourConfig::from_lookup(lookup_from(&[
            ("HUNIAN_TIME_OF_DAY", "18.5"),
            ("HUNIAN_PLAYBACK_SPEED", " 2 "),
            ("HUNIAN_AUTO_ROTATE", "0"),
            ("HUNIAN_AGENT_WHATSAPP", "+62 812 0000 1111"),
            ("HUNIAN_COUNTRY_CODE", "65"),
            ("HUNIAN_LAYOUT", "tours/villa.json"),
        ]));
        assert_eq!(config.time_of_day, 18.5);
        assert_eq!(config.playback_speed, 2.0);
        assert_eq!(config.auto_rotate_speed, 0.0);
        assert_eq!(config.agent_whatsapp.as_deref(), Some("+62 812 0000 1111"));
        assert_eq!(config.default_country_code, "65");
        assert_eq!(config.layout_path, Some(PathBuf::from("tours/villa.json")));
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let config = TourConfig::from_lookup(lookup_from(&[
            ("HUNIAN_TIME_OF_DAY", "noon"),
            ("HUNIAN_AGENT_WHATSAPP", "  "),
        ]));
        assert_eq!(config.time_of_day, DEFAULT_TIME_OF_DAY);
        assert_eq!(config.agent_whatsapp, None);
    }
}
