//! Command messages from the host UI.
//!
//! Host controls (count spinner, speed slider, color picker, view resize,
//! wheel and drag) are translated into [`Command`]s and applied
//! synchronously with [`crate::Radar::apply`] between ticks.

use glam::Vec2;
use radar_space::SceneRect;
use serde::{Deserialize, Serialize};

use crate::entity::Color;

/// A mutation requested by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Set the speed of every live entity.
    SetSpeed(f32),
    /// Set the display color of every live entity.
    SetColor(Color),
    /// Grow or shrink the entity collection to this count.
    Resize(usize),
    /// Replace the confinement bounds; the view size is unchanged.
    SetSceneBounds(SceneRect),
    /// The host view was resized to `width` x `height` pixels.
    ///
    /// The scene bounds follow the view: `(0, 0)` to `(width, height)`.
    ResizeViewport {
        /// New view width in pixels
        width: f32,
        /// New view height in pixels
        height: f32,
    },
    /// One mouse wheel event over the view.
    Zoom {
        /// Wheel delta; positive zooms in, anything else zooms out
        delta: i32,
        /// Cursor position in view pixels
        anchor: Vec2,
    },
    /// Drag the view content by a pixel delta.
    Pan {
        /// Drag delta in view pixels
        delta: Vec2,
    },
    /// Stop advancing entities on tick.
    Pause,
    /// Resume advancing entities on tick.
    Resume,
}

impl Command {
    /// Short name used in log output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetSpeed(_) => "set_speed",
            Self::SetColor(_) => "set_color",
            Self::Resize(_) => "resize",
            Self::SetSceneBounds(_) => "set_scene_bounds",
            Self::ResizeViewport { .. } => "resize_viewport",
            Self::Zoom { .. } => "zoom",
            Self::Pan { .. } => "pan",
            Self::Pause => "pause",
            Self::Resume => "resume",
        }
    }
}
