//! Day/night lighting model for the Hunian tour viewer
//!
//! This crate maps a continuous time of day (hours since midnight) to the
//! lighting of a property scene:
//! - [`model::DaylightModel`] - sun orbit and banded intensity curve
//! - [`preset::EnvironmentPreset`] - discrete dawn/day/sunset/night bundles
//! - [`cycle::DaylightCycle`] - slider-driven or automatically advancing time
//!
//! Everything here is pure math with no engine dependency, so the viewer and
//! tests share the same numbers.

pub mod cycle;
pub mod model;
pub mod preset;

pub use cycle::*;
pub use model::*;
pub use preset::*;
