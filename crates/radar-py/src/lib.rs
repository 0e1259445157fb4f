//! # Radarscope Python Bindings
//!
//! PyO3 bindings exposing the radar core to a Python host UI.
//!
//! ## Usage
//!
//! ```python
//! import radarscope
//!
//! radarscope.enable_logging("debug")
//!
//! radar = radarscope.Radar(count=20, speed=2.0, seed=42, width=1024.0, height=768.0)
//!
//! # Wire these to the settings panel
//! radar.set_speed(5.0)
//! radar.set_color("#ff8800")
//! radar.resize(30)
//!
//! # Call from the host timer (every radar.tick_interval_ms)
//! for line in radar.tick():
//!     print(line)  # "Airplane3: (412.5, 87.25)"
//!
//! # Positions for painting, flat [x0, y0, x1, y1, ...]
//! xy = radar.positions().reshape(-1, 2)
//! ```

use std::collections::BTreeMap;

use glam::Vec2;
use numpy::{PyArray1, ToPyArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use radar_core::{Color, Command, Entity, Radar, RadarConfig};
use radar_space::SceneRect;

/// Radar simulation wrapper for Python.
#[pyclass(name = "Radar")]
pub struct PyRadar {
    inner: Radar,
}

#[pymethods]
impl PyRadar {
    /// Create a radar over a `width` x `height` scene.
    #[new]
    #[pyo3(signature = (count=20, speed=2.0, seed=0, width=1024.0, height=768.0))]
    fn new(count: usize, speed: f32, seed: u64, width: f32, height: f32) -> PyResult<Self> {
        let config = RadarConfig {
            seed,
            initial_count: count,
            default_speed: speed,
            scene: SceneRect::from_origin_size(Vec2::ZERO, Vec2::new(width, height)),
            ..Default::default()
        };
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            inner: Radar::new(config),
        })
    }

    /// Create a radar from a JSON config string.
    ///
    /// Raises `ValueError` on malformed or invalid config.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config =
            RadarConfig::from_json_str(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            inner: Radar::new(config),
        })
    }

    /// Advance one tick and return the display lines of visible entities.
    ///
    /// Releases the GIL during computation.
    fn tick(&mut self, py: Python<'_>) -> Vec<String> {
        py.allow_threads(|| self.inner.tick().lines())
    }

    /// Visible entities from the last tick as `{label: (x, y)}`.
    fn snapshot(&self) -> BTreeMap<String, (f32, f32)> {
        self.inner
            .snapshot()
            .iter()
            .map(|(label, pos)| (label.to_string(), (pos.x, pos.y)))
            .collect()
    }

    /// All entity positions as a flat numpy array `[x0, y0, x1, y1, ...]`.
    fn positions<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        let flat: Vec<f32> = self
            .inner
            .entities()
            .iter()
            .flat_map(|e| [e.position.x, e.position.y])
            .collect();
        flat.to_pyarray(py)
    }

    /// Full state of every entity, in creation order.
    fn entities(&self) -> Vec<PyEntityState> {
        self.inner.entities().iter().map(PyEntityState::from).collect()
    }

    /// Set the speed of every entity.
    fn set_speed(&mut self, speed: f32) {
        self.inner.apply(Command::SetSpeed(speed));
    }

    /// Set the color of every entity from a `#rrggbb` string.
    fn set_color(&mut self, color: &str) -> PyResult<()> {
        let color: Color = color
            .parse()
            .map_err(|e: radar_core::ColorParseError| PyValueError::new_err(e.to_string()))?;
        self.inner.apply(Command::SetColor(color));
        Ok(())
    }

    /// Grow or shrink to `count` entities.
    fn resize(&mut self, count: usize) {
        self.inner.apply(Command::Resize(count));
    }

    /// Notify that the host view was resized.
    fn resize_viewport(&mut self, width: f32, height: f32) {
        self.inner.apply(Command::ResizeViewport { width, height });
    }

    /// Apply one wheel event at `anchor` (view pixels).
    #[pyo3(signature = (delta, anchor=(0.0, 0.0)))]
    fn zoom(&mut self, delta: i32, anchor: (f32, f32)) {
        self.inner.apply(Command::Zoom {
            delta,
            anchor: Vec2::new(anchor.0, anchor.1),
        });
    }

    /// Drag the view content by a pixel delta.
    fn pan(&mut self, dx: f32, dy: f32) {
        self.inner.apply(Command::Pan {
            delta: Vec2::new(dx, dy),
        });
    }

    /// Stop moving entities on tick.
    fn pause(&mut self) {
        self.inner.apply(Command::Pause);
    }

    /// Resume moving entities on tick.
    fn resume(&mut self) {
        self.inner.apply(Command::Resume);
    }

    /// Deterministic hash of the current state.
    fn state_hash(&self) -> u64 {
        self.inner.state_hash()
    }

    /// Visible scene region as `(left, top, right, bottom)`.
    #[getter]
    fn viewport(&self) -> (f32, f32, f32, f32) {
        let r = self.inner.viewport();
        (r.left(), r.top(), r.right(), r.bottom())
    }

    /// Current zoom level.
    #[getter]
    fn zoom_level(&self) -> f32 {
        self.inner.view().zoom()
    }

    /// Number of ticks that moved entities.
    #[getter]
    fn tick_count(&self) -> u64 {
        self.inner.tick_count()
    }

    /// Whether ticks are paused.
    #[getter]
    fn paused(&self) -> bool {
        self.inner.is_paused()
    }

    /// Number of live entities.
    #[getter]
    fn count(&self) -> usize {
        self.inner.entities().len()
    }

    /// Timer period the host should use, in milliseconds.
    #[getter]
    fn tick_interval_ms(&self) -> u64 {
        self.inner.config().tick_interval_ms
    }

    fn __repr__(&self) -> String {
        format!(
            "Radar(count={}, tick={}, paused={})",
            self.inner.entities().len(),
            self.inner.tick_count(),
            self.inner.is_paused()
        )
    }
}

/// Read-only copy of one entity's state.
#[pyclass(frozen, name = "EntityState")]
#[derive(Clone)]
pub struct PyEntityState {
    /// Entity id.
    #[pyo3(get)]
    pub id: u64,
    /// Display label.
    #[pyo3(get)]
    pub label: String,
    /// X position.
    #[pyo3(get)]
    pub x: f32,
    /// Y position.
    #[pyo3(get)]
    pub y: f32,
    /// Heading in degrees.
    #[pyo3(get)]
    pub heading: f32,
    /// Distance per tick.
    #[pyo3(get)]
    pub speed: f32,
    /// Color as `#rrggbb`.
    #[pyo3(get)]
    pub color: String,
}

impl From<&Entity> for PyEntityState {
    fn from(e: &Entity) -> Self {
        Self {
            id: e.id().as_u64(),
            label: e.label().to_string(),
            x: e.position.x,
            y: e.position.y,
            heading: e.heading,
            speed: e.speed(),
            color: e.color().to_string(),
        }
    }
}

#[pymethods]
impl PyEntityState {
    /// Get position as (x, y) tuple.
    #[getter]
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn __repr__(&self) -> String {
        format!(
            "EntityState({}, x={:.2}, y={:.2}, heading={:.2})",
            self.label, self.x, self.y, self.heading
        )
    }
}

/// Install a stderr log subscriber at `level`.
///
/// Returns `False` if a subscriber was already installed.
#[pyfunction]
#[pyo3(signature = (level="info"))]
fn enable_logging(level: &str) -> PyResult<bool> {
    let level: tracing::Level = level
        .parse()
        .map_err(|_| PyValueError::new_err(format!("unknown log level: {level}")))?;
    Ok(tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init()
        .is_ok())
}

/// Python module definition.
#[pymodule]
fn _radarscope(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRadar>()?;
    m.add_class::<PyEntityState>()?;
    m.add_function(wrap_pyfunction!(enable_logging, m)?)?;
    Ok(())
}
