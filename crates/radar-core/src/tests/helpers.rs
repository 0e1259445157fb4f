//! Test helper functions for setting up radars and entities.

use glam::Vec2;
use radar_space::SceneRect;

use crate::config::RadarConfig;
use crate::entity::{Entity, EntityId};
use crate::radar::Radar;

/// Square scene `(0, 0)` to `(size, size)`.
pub fn square(size: f32) -> SceneRect {
    SceneRect::from_origin_size(Vec2::ZERO, Vec2::splat(size))
}

/// Radar with no entities over a `size` x `size` scene.
pub fn empty_radar(size: f32, seed: u64) -> Radar {
    Radar::new(RadarConfig {
        seed,
        initial_count: 0,
        scene: square(size),
        ..Default::default()
    })
}

/// Places an entity at `position` with the next free id.
///
/// Returns the new entity's id.
pub fn place(radar: &mut Radar, position: Vec2, heading: f32, speed: f32, half: f32) -> EntityId {
    let id = EntityId::new(radar.entities().len() as u64);
    let prefix = radar.config().label_prefix.clone();
    radar.model_mut().push(
        Entity::new(id, &prefix, position, heading)
            .with_speed(speed)
            .with_half_extent(half),
    );
    id
}

/// Label of the entity with `id` under the default prefix.
pub fn label(id: EntityId) -> String {
    format!("Airplane{id}")
}

/// Snapshot of ids and positions for comparing runs.
pub fn positions(radar: &Radar) -> Vec<(EntityId, Vec2, f32)> {
    radar
        .entities()
        .iter()
        .map(|e| (e.id(), e.position, e.heading))
        .collect()
}
