//! Type definitions for IPC messages.

mod lighting;
mod measurement;
mod tour;

pub use lighting::*;
pub use measurement::*;
pub use tour::*;
