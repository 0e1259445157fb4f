//! # Radar Space
//!
//! Scene geometry for the radarscope simulation.
//!
//! The scene is a 2D plane with `x` growing right and `y` growing down (screen
//! convention), so a rectangle's `top` is its minimum `y`. Two things live here:
//!
//! - [`SceneRect`]: axis-aligned rectangles used for confinement bounds,
//!   entity bounding boxes and the visible viewport
//! - [`ViewTransform`]: zoom and pan state mapping a host view onto the scene
//!
//! ## Quick Start
//!
//! ```
//! use glam::Vec2;
//! use radar_space::{SceneRect, ViewTransform, ZoomLimits};
//!
//! let scene = SceneRect::from_origin_size(Vec2::ZERO, Vec2::new(800.0, 600.0));
//! let mut view = ViewTransform::new(ZoomLimits::default());
//!
//! // Zoom in once around the middle of an 800x600 view
//! let view_size = Vec2::new(800.0, 600.0);
//! view.wheel(120, Vec2::new(400.0, 300.0), view_size, &scene);
//!
//! let visible = view.visible_rect(view_size, &scene);
//! assert!(visible.width() < scene.width());
//! assert!(scene.intersects(&visible));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod view;

pub use view::{ViewTransform, ZoomLimits};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in scene coordinates.
///
/// Edges are inclusive: a point on the border is contained, and rectangles
/// that only touch along an edge or corner intersect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneRect {
    /// Minimum corner (left, top)
    pub min: Vec2,
    /// Maximum corner (right, bottom)
    pub max: Vec2,
}

impl SceneRect {
    /// Create a rectangle from min/max corners.
    #[must_use]
    pub const fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Create the square of half-size `half_extent` centered on `center`.
    #[must_use]
    pub fn around(center: Vec2, half_extent: f32) -> Self {
        let half = Vec2::splat(half_extent);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Left edge (minimum x).
    #[must_use]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    /// Right edge (maximum x).
    #[must_use]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    /// Top edge (minimum y).
    #[must_use]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    /// Bottom edge (maximum y).
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Width of the rectangle; negative when the corners are inverted.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle; negative when the corners are inverted.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Get the size of the rectangle.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Get the center of the rectangle.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Returns true if the rectangle has no area.
    ///
    /// NaN extents count as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Check if a point is inside the rectangle (edges included).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Closed-interval intersection test.
    ///
    /// Degenerate rectangles (zero width or height) still intersect anything
    /// they touch; callers that need "empty means nothing" check
    /// [`SceneRect::is_empty`] first.
    #[must_use]
    pub fn intersects(&self, other: &SceneRect) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Return the rectangle moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Shrink the rectangle by `margin` on every side.
    ///
    /// The result may be inverted when the margin exceeds half the size.
    #[must_use]
    pub fn inset(&self, margin: f32) -> Self {
        let margin = Vec2::splat(margin);
        Self {
            min: self.min + margin,
            max: self.max - margin,
        }
    }
}

impl Default for SceneRect {
    fn default() -> Self {
        Self::from_origin_size(Vec2::ZERO, Vec2::new(1024.0, 768.0))
    }
}

/// Clamp `value` into `[lo, hi]` without panicking on an inverted range.
///
/// When `lo > hi` the lower bound wins, so an entity wider than its bounds
/// settles on the left/top edge instead of oscillating.
#[must_use]
pub fn bound(lo: f32, value: f32, hi: f32) -> f32 {
    lo.max(value.min(hi))
}
