//! Entity types for the radar simulation.
//!
//! - [`EntityId`]: stable identifier, also the source of the display label
//! - [`Color`]: display color, carried by entities but never read by motion
//! - [`Entity`]: kinematic state of one tracked object
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use radar_core::entity::{Entity, EntityId};
//!
//! let plane = Entity::new(EntityId::new(3), "Airplane", Vec2::new(10.0, 20.0), 90.0)
//!     .with_speed(4.0);
//!
//! assert_eq!(plane.label(), "Airplane3");
//! assert_eq!(plane.speed(), 4.0);
//! ```

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use radar_space::SceneRect;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Speed assigned to freshly created entities.
pub const DEFAULT_SPEED: f32 = 2.0;

/// Half-size of an entity's bounding box (a 20x20 square).
pub const DEFAULT_HALF_EXTENT: f32 = 10.0;

/// Unique identifier for an entity.
///
/// Identifiers are assigned sequentially by the motion model and are never
/// reused while the entity is alive.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates a new `EntityId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Color
// =============================================================================

/// Error returned when a color string is not in `#rrggbb` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {input:?}: expected #rrggbb")]
pub struct ColorParseError {
    input: String,
}

/// 24-bit RGB display color.
///
/// Serialized as a `#rrggbb` string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure blue, the default entity color.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Pure red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Pure green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);

    /// Creates a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLUE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_string(),
        };
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

// =============================================================================
// Entity
// =============================================================================

/// One tracked moving object.
///
/// Position is in scene coordinates; heading is in degrees measured from the
/// +x axis toward +y. Boundary reflection wraps it back into `[0, 360)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    id: EntityId,
    label: String,
    /// Scene position of the bounding box center.
    pub position: Vec2,
    /// Direction of travel in degrees.
    pub heading: f32,
    speed: f32,
    color: Color,
    half_extent: f32,
}

impl Entity {
    /// Creates an entity labeled `{prefix}{id}` with default speed, color and
    /// extent.
    #[must_use]
    pub fn new(id: EntityId, prefix: &str, position: Vec2, heading: f32) -> Self {
        Self {
            id,
            label: format!("{prefix}{id}"),
            position,
            heading,
            speed: DEFAULT_SPEED,
            color: Color::default(),
            half_extent: DEFAULT_HALF_EXTENT,
        }
    }

    /// Builder: set the speed.
    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Builder: set the color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builder: set the bounding box half-size.
    #[must_use]
    pub fn with_half_extent(mut self, half_extent: f32) -> Self {
        self.half_extent = half_extent;
        self
    }

    /// Returns the entity's identifier.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Distance travelled per step.
    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Sets the distance travelled per step; applies from the next step.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Display color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Sets the display color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Half-size of the bounding box.
    #[must_use]
    pub const fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Bounding box translated to the current position.
    #[must_use]
    pub fn bounding_box(&self) -> SceneRect {
        SceneRect::around(self.position, self.half_extent)
    }
}
