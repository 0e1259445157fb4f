//! The radar: per-tick pipeline over the motion model and visibility filter.
//!
//! Each [`Radar::tick`] runs two phases:
//!
//! 1. **STEP**: advance every entity one step inside the scene bounds
//!    (skipped while paused)
//! 2. **FILTER**: rebuild the visibility snapshot against the scene region
//!    visible through the view
//!
//! Host input arrives as [`Command`]s applied between ticks. Everything runs
//! on the caller's thread.
//!
//! # Example
//!
//! ```
//! use radar_core::{Command, Radar, RadarConfig};
//!
//! let mut radar = Radar::new(RadarConfig {
//!     initial_count: 3,
//!     seed: 42,
//!     ..Default::default()
//! });
//!
//! radar.apply(Command::SetSpeed(5.0));
//! for _ in 0..10 {
//!     radar.tick();
//! }
//!
//! assert_eq!(radar.tick_count(), 10);
//! assert!(radar.snapshot().len() <= 3);
//! ```

use glam::Vec2;
use radar_space::{SceneRect, ViewTransform};
use tracing::{debug, trace};

use crate::command::Command;
use crate::config::RadarConfig;
use crate::entity::{Color, Entity};
use crate::motion::EntityMotionModel;
use crate::visibility::{filter, VisibilitySnapshot};

/// Orchestrates motion, view state and visibility for one radar display.
#[derive(Debug, Clone)]
pub struct Radar {
    model: EntityMotionModel,
    /// Confinement region for motion.
    bounds: SceneRect,
    /// Host view size in pixels.
    view_size: Vec2,
    view: ViewTransform,
    snapshot: VisibilitySnapshot,
    tick: u64,
    paused: bool,
    config: RadarConfig,
}

impl Radar {
    /// Creates a radar and spawns `config.initial_count` entities.
    ///
    /// The view starts at the size of the configured scene. The config is
    /// used as given; call [`RadarConfig::validate`] first for untrusted
    /// input.
    #[must_use]
    pub fn new(config: RadarConfig) -> Self {
        let bounds = config.scene;
        let mut model = EntityMotionModel::new(config.motion_params(), config.seed);
        model.resize(config.initial_count, &bounds);

        let mut radar = Self {
            model,
            bounds,
            view_size: bounds.size().max(Vec2::ZERO),
            view: ViewTransform::new(config.zoom),
            snapshot: VisibilitySnapshot::new(),
            tick: 0,
            paused: false,
            config,
        };
        radar.refresh_snapshot();
        radar
    }

    /// Runs one tick and returns the fresh snapshot.
    pub fn tick(&mut self) -> &VisibilitySnapshot {
        if !self.paused {
            self.model.step_all(&self.bounds);
            self.tick += 1;
        }
        self.refresh_snapshot();
        trace!(
            tick = self.tick,
            visible = self.snapshot.len(),
            total = self.model.len(),
            "radar tick"
        );
        &self.snapshot
    }

    /// Applies a host command.
    ///
    /// Takes effect immediately for state queries; positions change only on
    /// the next [`Radar::tick`].
    pub fn apply(&mut self, command: Command) {
        debug!(command = command.name(), "applying command");
        match command {
            Command::SetSpeed(speed) => self.set_speed_all(speed),
            Command::SetColor(color) => self.set_color_all(color),
            Command::Resize(count) => self.resize(count),
            Command::SetSceneBounds(bounds) => self.set_bounds(bounds),
            Command::ResizeViewport { width, height } => self.resize_viewport(width, height),
            Command::Zoom { delta, anchor } => {
                self.view.wheel(delta, anchor, self.view_size, &self.bounds);
            }
            Command::Pan { delta } => self.view.pan(delta, self.view_size, &self.bounds),
            Command::Pause => self.paused = true,
            Command::Resume => self.paused = false,
        }
    }

    /// Sets the speed of every live entity.
    pub fn set_speed_all(&mut self, speed: f32) {
        self.model.set_speed_all(speed);
    }

    /// Sets the color of every live entity.
    pub fn set_color_all(&mut self, color: Color) {
        self.model.set_color_all(color);
    }

    /// Grows or shrinks the entity collection inside the current bounds.
    pub fn resize(&mut self, count: usize) {
        self.model.resize(count, &self.bounds);
    }

    /// Replaces the confinement bounds.
    pub fn set_bounds(&mut self, bounds: SceneRect) {
        debug!(?bounds, "scene bounds changed");
        self.bounds = bounds;
    }

    /// The host view was resized: the scene follows the view size.
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        self.view_size = Vec2::new(width, height).max(Vec2::ZERO);
        self.set_bounds(SceneRect::from_origin_size(Vec2::ZERO, self.view_size));
    }

    /// Snapshot built by the most recent tick.
    #[must_use]
    pub fn snapshot(&self) -> &VisibilitySnapshot {
        &self.snapshot
    }

    /// Scene region currently visible through the view.
    #[must_use]
    pub fn viewport(&self) -> SceneRect {
        self.view.visible_rect(self.view_size, &self.bounds)
    }

    /// Current confinement bounds.
    #[must_use]
    pub fn bounds(&self) -> SceneRect {
        self.bounds
    }

    /// Host view size in pixels.
    #[must_use]
    pub fn view_size(&self) -> Vec2 {
        self.view_size
    }

    /// Zoom and pan state.
    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Entities in creation order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        self.model.entities()
    }

    /// The underlying motion model.
    #[must_use]
    pub fn model(&self) -> &EntityMotionModel {
        &self.model
    }

    /// Mutable access to the motion model, for placing entities directly.
    pub fn model_mut(&mut self) -> &mut EntityMotionModel {
        &mut self.model
    }

    /// Number of ticks that advanced the entities.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Returns true while ticks leave entities in place.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Seed used for entity placement.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Configuration the radar was built from.
    #[must_use]
    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    /// Deterministic hash of the radar state.
    #[must_use]
    pub fn state_hash(&self) -> u64 {
        crate::hash::hash_radar(self)
    }

    fn refresh_snapshot(&mut self) {
        let viewport = self.viewport();
        self.snapshot = filter(self.model.entities(), &viewport);
    }
}

impl Default for Radar {
    fn default() -> Self {
        Self::new(RadarConfig::default())
    }
}
