//! Radar configuration.
//!
//! Loaded from JSON; every field is optional and falls back to the defaults
//! below.
//!
//! ```
//! use radar_core::config::RadarConfig;
//!
//! let config = RadarConfig::from_json_str(r#"{ "initial_count": 5, "seed": 7 }"#).unwrap();
//! assert_eq!(config.initial_count, 5);
//! assert_eq!(config.tick_interval_ms, 100);
//! ```

use radar_space::{SceneRect, ZoomLimits};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entity::{Color, DEFAULT_HALF_EXTENT, DEFAULT_SPEED};
use crate::motion::MotionParams;

/// Errors from loading or validating a [`RadarConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid JSON for a config.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Speed was negative or not finite.
    #[error("default speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f32),
    /// Half extent was negative or not finite.
    #[error("half extent must be finite and non-negative, got {0}")]
    InvalidHalfExtent(f32),
    /// Tick interval of zero.
    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,
    /// Scene bounds with non-finite corners.
    #[error("scene bounds must be finite, got {0:?}")]
    InvalidScene(SceneRect),
    /// Zoom limits that cannot describe a zoom range.
    #[error("zoom limits must satisfy 0 < min <= max and factor > 1, got {0:?}")]
    InvalidZoom(ZoomLimits),
}

/// Configuration for a [`crate::Radar`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Seed for entity placement
    pub seed: u64,
    /// Entities created at startup
    pub initial_count: usize,
    /// Speed of new entities
    pub default_speed: f32,
    /// Bounding box half-size of new entities
    pub half_extent: f32,
    /// Label prefix, followed by the entity id
    pub label_prefix: String,
    /// Color of new entities
    pub color: Color,
    /// Tick period the host scheduler should use
    pub tick_interval_ms: u64,
    /// Initial scene bounds; the view starts at the same size
    pub scene: SceneRect,
    /// Zoom range of the view
    pub zoom: ZoomLimits,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            initial_count: 20,
            default_speed: DEFAULT_SPEED,
            half_extent: DEFAULT_HALF_EXTENT,
            label_prefix: "Airplane".to_string(),
            color: Color::BLUE,
            tick_interval_ms: 100,
            scene: SceneRect::default(),
            zoom: ZoomLimits::default(),
        }
    }
}

impl RadarConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and the matching
    /// variant for values rejected by [`RadarConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the values describe a runnable radar.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.default_speed.is_finite() && self.default_speed >= 0.0) {
            return Err(ConfigError::InvalidSpeed(self.default_speed));
        }
        if !(self.half_extent.is_finite() && self.half_extent >= 0.0) {
            return Err(ConfigError::InvalidHalfExtent(self.half_extent));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if !(self.scene.min.is_finite() && self.scene.max.is_finite()) {
            return Err(ConfigError::InvalidScene(self.scene));
        }
        if !self.zoom.is_valid() {
            return Err(ConfigError::InvalidZoom(self.zoom));
        }
        Ok(())
    }

    /// Motion parameters for entities created under this config.
    #[must_use]
    pub fn motion_params(&self) -> MotionParams {
        MotionParams {
            default_speed: self.default_speed,
            half_extent: self.half_extent,
            label_prefix: self.label_prefix.clone(),
            color: self.color,
        }
    }
}
