//! State hashing for determinism verification.
//!
//! Two radars built from the same config and fed the same commands must
//! produce the same hash after every tick.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use glam::Vec2;
use radar_space::SceneRect;

use crate::entity::Entity;
use crate::radar::Radar;

/// Compute a deterministic hash of radar state.
///
/// Covers the tick counter, seed, pause flag, bounds, view state and every
/// entity field. Floats are hashed by their bit patterns.
#[must_use]
pub fn hash_radar(radar: &Radar) -> u64 {
    let mut hasher = DefaultHasher::new();

    radar.tick_count().hash(&mut hasher);
    radar.seed().hash(&mut hasher);
    radar.is_paused().hash(&mut hasher);

    hash_rect(&radar.bounds(), &mut hasher);
    hash_vec2(radar.view_size(), &mut hasher);
    radar.view().zoom().to_bits().hash(&mut hasher);
    hash_vec2(radar.view().origin(), &mut hasher);

    radar.entities().len().hash(&mut hasher);
    for entity in radar.entities() {
        hash_entity(entity, &mut hasher);
    }

    hasher.finish()
}

fn hash_entity<H: Hasher>(entity: &Entity, hasher: &mut H) {
    entity.id().hash(hasher);
    entity.label().hash(hasher);
    hash_vec2(entity.position, hasher);
    entity.heading.to_bits().hash(hasher);
    entity.speed().to_bits().hash(hasher);
    entity.color().hash(hasher);
    entity.half_extent().to_bits().hash(hasher);
}

fn hash_rect<H: Hasher>(rect: &SceneRect, hasher: &mut H) {
    hash_vec2(rect.min, hasher);
    hash_vec2(rect.max, hasher);
}

fn hash_vec2<H: Hasher>(v: Vec2, hasher: &mut H) {
    v.x.to_bits().hash(hasher);
    v.y.to_bits().hash(hasher);
}
