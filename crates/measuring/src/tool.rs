//! Two-click measurement state machine.
//!
//! The tool is `Idle` until a click lands on geometry, then `Pending` with the
//! first point recorded. The next click on geometry completes a
//! [`Measurement`] and returns the tool to `Idle`. Clicks that hit nothing are
//! ignored in both states.

use glam::Vec3;

use crate::format::format_distance;

/// A completed point-to-point measurement. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Unique identifier within one tool instance (`m-<n>`)
    pub id: String,
    pub start: Vec3,
    pub end: Vec3,
    /// Euclidean distance between `start` and `end` in metres
    pub distance: f32,
}

impl Measurement {
    fn new(id: String, start: Vec3, end: Vec3) -> Self {
        Self {
            id,
            start,
            end,
            distance: start.distance(end),
        }
    }

    /// Formatted distance label
    pub fn label(&self) -> String {
        format_distance(self.distance)
    }

    /// Where the floating label sits
    pub fn midpoint(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }
}

/// Tool state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureState {
    Idle,
    /// First point recorded, waiting for the second
    Pending(Vec3),
}

/// What a click did to the tool
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Tool inactive or the click missed all geometry
    Ignored,
    /// First point recorded
    Started(Vec3),
    /// Second point recorded, measurement appended
    Completed(Measurement),
}

/// In-memory measurement list plus the pending first click.
///
/// Nothing is persisted. Turning the tool off discards all measurements.
#[derive(Debug, Clone, Default)]
pub struct MeasurementTool {
    active: bool,
    pending: Option<Vec3>,
    measurements: Vec<Measurement>,
    next_id: u64,
}

impl MeasurementTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enable or disable the tool. Disabling drops every measurement and any
    /// pending first point.
    pub fn set_active(&mut self, active: bool) {
        if !active && (self.pending.is_some() || !self.measurements.is_empty()) {
            tracing::debug!(
                "Measurement tool deactivated, {} measurement(s) discarded",
                self.measurements.len()
            );
            self.clear();
        }
        self.active = active;
    }

    pub fn state(&self) -> MeasureState {
        match self.pending {
            Some(start) => MeasureState::Pending(start),
            None => MeasureState::Idle,
        }
    }

    pub fn pending_start(&self) -> Option<Vec3> {
        self.pending
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Feed the result of casting a click into the scene.
    ///
    /// `hit` is the intersection point, or `None` if the ray missed.
    pub fn click(&mut self, hit: Option<Vec3>) -> ClickOutcome {
        if !self.active {
            return ClickOutcome::Ignored;
        }
        let Some(point) = hit else {
            return ClickOutcome::Ignored;
        };

        match self.pending.take() {
            None => {
                self.pending = Some(point);
                ClickOutcome::Started(point)
            }
            Some(start) => {
                self.next_id += 1;
                let measurement = Measurement::new(format!("m-{}", self.next_id), start, point);
                tracing::debug!(
                    "Measurement {} completed: {}",
                    measurement.id,
                    measurement.label()
                );
                self.measurements.push(measurement.clone());
                ClickOutcome::Completed(measurement)
            }
        }
    }

    /// Drop the pending first point without leaving the tool
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Remove one measurement by id. Returns the removed measurement.
    pub fn remove(&mut self, id: &str) -> Option<Measurement> {
        let index = self.measurements.iter().position(|m| m.id == id)?;
        Some(self.measurements.remove(index))
    }

    /// Remove all measurements and any pending point
    pub fn clear(&mut self) {
        self.measurements.clear();
        self.pending = None;
    }

    /// One line per measurement, e.g. `"m-1: 3.20 m"`
    pub fn summary_lines(&self) -> Vec<String> {
        self.measurements
            .iter()
            .map(|m| format!("{}: {}", m.id, m.label()))
            .collect()
    }
}
