//! Point-to-point measurement for the Hunian tour viewer
//!
//! - [`tool::MeasurementTool`] - two-click state machine producing [`tool::Measurement`]s
//! - [`raycast`] - ray construction and ray-triangle picking
//! - [`format`] - human-readable distance labels

pub mod format;
pub mod raycast;
pub mod tool;

pub use glam;

pub use format::*;
pub use raycast::*;
pub use tool::*;
