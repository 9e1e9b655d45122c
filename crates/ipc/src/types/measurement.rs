//! Measurement types.

use serde::{Deserialize, Serialize};

/// A completed point-to-point measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementInfo {
    pub id: String,
    pub start: [f32; 3],
    pub end: [f32; 3],
    /// Distance in metres
    pub distance: f32,
    /// Formatted label, e.g. "1.24 m"
    pub label: String,
}
