//! # Radar Core
//!
//! Simulation core for a radar-style display of moving entities.
//!
//! The host UI owns the window, the timer and the painting. Once per timer
//! tick it calls [`Radar::tick`], which moves every entity one step with
//! billiard-style reflection off the scene bounds, then rebuilds the list of
//! entities visible through the current view.
//!
//! ## Modules
//!
//! - [`entity`]: entity state, ids and colors
//! - [`motion`]: creation, stepping and the entity collection
//! - [`visibility`]: the per-tick label -> position snapshot
//! - [`command`]: host input as explicit messages
//! - [`config`]: JSON configuration
//! - [`radar`]: the tick pipeline tying it together
//!
//! ## Usage
//!
//! ```
//! use radar_core::{Command, Radar, RadarConfig};
//!
//! let mut radar = Radar::new(RadarConfig::default());
//! radar.apply(Command::Resize(5));
//!
//! for line in radar.tick().lines() {
//!     println!("{line}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export the geometry crate for hosts
pub use radar_space;

pub mod command;
pub mod config;
pub mod entity;
pub mod hash;
pub mod motion;
pub mod radar;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use config::{ConfigError, RadarConfig};
pub use entity::{Color, ColorParseError, Entity, EntityId};
pub use motion::{EntityMotionModel, MotionParams};
pub use radar::Radar;
pub use visibility::{filter, VisibilitySnapshot};
