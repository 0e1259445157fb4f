//! Visibility filter: which entities are on screen.
//!
//! An entity is visible when its bounding box, translated to its current
//! position, intersects the viewport. Intersection is closed: a box touching
//! the viewport edge counts. An empty viewport (zero or negative width or
//! height) shows nothing.
//!
//! The result is a [`VisibilitySnapshot`] keyed by label, rebuilt from scratch
//! on every call.

use std::collections::BTreeMap;
use std::fmt;

use glam::Vec2;
use radar_space::SceneRect;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Label -> position map of the entities visible in one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibilitySnapshot {
    positions: BTreeMap<String, Vec2>,
}

impl VisibilitySnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of a visible entity by label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<Vec2> {
        self.positions.get(label).copied()
    }

    /// Returns true if the labeled entity is visible.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.positions.contains_key(label)
    }

    /// Number of visible entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Visible labels, sorted.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.positions.keys().map(String::as_str)
    }

    /// `(label, position)` pairs, sorted by label.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Vec2)> + '_ {
        self.positions.iter().map(|(label, pos)| (label.as_str(), *pos))
    }

    /// Display lines in the form `label: (x, y)`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.iter().map(|(label, pos)| format_line(label, pos)).collect()
    }

    fn insert(&mut self, label: &str, position: Vec2) {
        self.positions.insert(label.to_string(), position);
    }
}

impl fmt::Display for VisibilitySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, pos) in self.iter() {
            writeln!(f, "{}", format_line(label, pos))?;
        }
        Ok(())
    }
}

fn format_line(label: &str, pos: Vec2) -> String {
    format!("{label}: ({}, {})", pos.x, pos.y)
}

/// Builds the snapshot of `entities` visible through `viewport`.
#[must_use]
pub fn filter<'a, I>(entities: I, viewport: &SceneRect) -> VisibilitySnapshot
where
    I: IntoIterator<Item = &'a Entity>,
{
    let mut snapshot = VisibilitySnapshot::new();
    if viewport.is_empty() {
        return snapshot;
    }

    for entity in entities {
        if viewport.intersects(&entity.bounding_box()) {
            snapshot.insert(entity.label(), entity.position);
        }
    }
    snapshot
}
