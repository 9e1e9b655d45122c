//! Distance label formatting.

/// Format a distance in metres for a measurement label.
///
/// Below one metre the value is shown in whole centimetres, otherwise in
/// metres with two decimals.
pub fn format_distance(meters: f32) -> String {
    if meters < 1.0 {
        format!("{:.0} cm", meters * 100.0)
    } else {
        format!("{:.2} m", meters)
    }
}
