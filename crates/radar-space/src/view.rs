//! View navigation: zoom and pan over the scene.
//!
//! A host view of `view_size` pixels shows the scene region starting at
//! `origin` and spanning `view_size / zoom` scene units. Zooming keeps the
//! scene point under the cursor fixed; panning drags the content along with
//! the pointer. The visible origin is kept inside the scene the way
//! scrollbars would: when the visible region is larger than the scene on an
//! axis, the scene is centered on that axis instead.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{bound, SceneRect};

/// Zoom range and per-step multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    /// Smallest zoom level (1.0 shows the scene at its native size)
    pub min: f32,
    /// Largest zoom level
    pub max: f32,
    /// Multiplier applied per wheel step
    pub factor: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 7.0,
            factor: 1.12,
        }
    }
}

impl ZoomLimits {
    /// Returns true if the limits describe a usable zoom range.
    ///
    /// Requires finite values, `0 < min <= max`, and `factor > 1`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.factor.is_finite()
            && self.min > 0.0
            && self.min <= self.max
            && self.factor > 1.0
    }
}

/// Zoom and pan state of the host view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    zoom: f32,
    origin: Vec2,
    limits: ZoomLimits,
}

impl ViewTransform {
    /// Create a view at zoom 1.0 (clamped into the limits) looking at the
    /// scene origin.
    ///
    /// Invalid limits are replaced by [`ZoomLimits::default`].
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        let limits = if limits.is_valid() {
            limits
        } else {
            warn!(?limits, "invalid zoom limits, using defaults");
            ZoomLimits::default()
        };
        Self {
            zoom: bound(limits.min, 1.0, limits.max),
            origin: Vec2::ZERO,
            limits,
        }
    }

    /// Current zoom level.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Stored top-left scene point of the view (before clamping).
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Zoom limits in effect.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Apply one wheel event.
    ///
    /// A positive `delta` zooms in by one factor step, anything else zooms
    /// out by one step. The scene point under `anchor` (view pixels) stays
    /// under it unless clamping to the scene moves the view.
    ///
    /// Returns the new zoom level.
    pub fn wheel(&mut self, delta: i32, anchor: Vec2, view_size: Vec2, scene: &SceneRect) -> f32 {
        let origin = self.effective_origin(view_size, scene);
        let anchored = origin + anchor / self.zoom;

        let next = if delta > 0 {
            self.zoom * self.limits.factor
        } else {
            self.zoom / self.limits.factor
        };
        self.zoom = bound(self.limits.min, next, self.limits.max);
        self.origin = clamp_origin(anchored - anchor / self.zoom, view_size / self.zoom, scene);
        self.zoom
    }

    /// Drag the content by `delta` view pixels.
    pub fn pan(&mut self, delta: Vec2, view_size: Vec2, scene: &SceneRect) {
        let origin = self.effective_origin(view_size, scene);
        self.origin = clamp_origin(origin - delta / self.zoom, view_size / self.zoom, scene);
    }

    /// Scene region visible through a view of `view_size` pixels.
    #[must_use]
    pub fn visible_rect(&self, view_size: Vec2, scene: &SceneRect) -> SceneRect {
        let visible = view_size / self.zoom;
        SceneRect::from_origin_size(clamp_origin(self.origin, visible, scene), visible)
    }

    fn effective_origin(&self, view_size: Vec2, scene: &SceneRect) -> Vec2 {
        clamp_origin(self.origin, view_size / self.zoom, scene)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

fn clamp_origin(origin: Vec2, visible: Vec2, scene: &SceneRect) -> Vec2 {
    Vec2::new(
        clamp_axis(origin.x, visible.x, scene.min.x, scene.max.x),
        clamp_axis(origin.y, visible.y, scene.min.y, scene.max.y),
    )
}

fn clamp_axis(origin: f32, visible: f32, lo: f32, hi: f32) -> f32 {
    if visible <= hi - lo {
        bound(lo, origin, hi - visible)
    } else {
        (lo + hi - visible) * 0.5
    }
}
