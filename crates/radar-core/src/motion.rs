//! Entity motion: creation, stepping and boundary reflection.
//!
//! Every step moves an entity `speed` units along its heading, then reflects
//! it off the scene bounds. The two axes use different reflection rules:
//!
//! - horizontal wall: `heading = 180 - heading`
//! - vertical wall: `heading = -heading`
//!
//! Both checks run on every step, so an entity that reaches a corner reflects
//! on both axes at once. After reflection the position is clamped so the
//! bounding box lies inside the bounds, and the heading is wrapped back into
//! `[0, 360)`.
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use radar_core::motion::{EntityMotionModel, MotionParams};
//! use radar_space::SceneRect;
//!
//! let bounds = SceneRect::from_origin_size(Vec2::ZERO, Vec2::new(400.0, 300.0));
//! let mut model = EntityMotionModel::new(MotionParams::default(), 42);
//!
//! model.resize(5, &bounds);
//! model.step_all(&bounds);
//!
//! assert_eq!(model.len(), 5);
//! ```

use glam::Vec2;
use radar_space::{bound, SceneRect};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::{Color, Entity, EntityId, DEFAULT_HALF_EXTENT, DEFAULT_SPEED};

/// Parameters applied to every entity the model creates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionParams {
    /// Speed of new entities
    pub default_speed: f32,
    /// Bounding box half-size of new entities
    pub half_extent: f32,
    /// Label prefix, followed by the entity id
    pub label_prefix: String,
    /// Color of new entities
    pub color: Color,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            default_speed: DEFAULT_SPEED,
            half_extent: DEFAULT_HALF_EXTENT,
            label_prefix: "Airplane".to_string(),
            color: Color::default(),
        }
    }
}

/// Creates an entity at a uniformly random position inside `bounds` with a
/// uniformly random heading in `[0, 360)`.
///
/// Degenerate bounds (zero or negative width/height) place the entity on
/// the minimum edge of that axis.
pub fn create<R: Rng + ?Sized>(
    id: EntityId,
    bounds: &SceneRect,
    params: &MotionParams,
    rng: &mut R,
) -> Entity {
    let position = Vec2::new(
        sample_span(rng, bounds.left(), bounds.right()),
        sample_span(rng, bounds.top(), bounds.bottom()),
    );
    let heading = rng.gen_range(0.0..360.0);

    Entity::new(id, &params.label_prefix, position, heading)
        .with_speed(params.default_speed)
        .with_half_extent(params.half_extent)
        .with_color(params.color)
}

/// Advances one entity by a single step and reflects it off `bounds`.
pub fn step(entity: &mut Entity, bounds: &SceneRect) {
    let radians = entity.heading.to_radians();
    entity.position += Vec2::new(radians.cos(), radians.sin()) * entity.speed();

    let half = entity.half_extent();

    if entity.position.x - half < bounds.left() || entity.position.x + half > bounds.right() {
        entity.heading = wrap_heading(180.0 - entity.heading);
        entity.position.x = bound(
            bounds.left() + half,
            entity.position.x,
            bounds.right() - half,
        );
    }

    if entity.position.y - half < bounds.top() || entity.position.y + half > bounds.bottom() {
        entity.heading = wrap_heading(-entity.heading);
        entity.position.y = bound(
            bounds.top() + half,
            entity.position.y,
            bounds.bottom() - half,
        );
    }
}

/// Wraps a heading in degrees into `[0, 360)`.
fn wrap_heading(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn sample_span<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

// =============================================================================
// EntityMotionModel
// =============================================================================

/// Owns the tracked entities and advances them.
///
/// Entities are stored in creation order. Ids are `0..len`: growth appends
/// sequential ids and shrinking removes from the end, so an id is never
/// reused while its entity is alive.
#[derive(Debug, Clone)]
pub struct EntityMotionModel {
    entities: Vec<Entity>,
    params: MotionParams,
    rng: ChaCha8Rng,
}

impl EntityMotionModel {
    /// Creates an empty model with a deterministic RNG seeded from `seed`.
    #[must_use]
    pub fn new(params: MotionParams, seed: u64) -> Self {
        Self {
            entities: Vec::new(),
            params,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates an entity with this model's parameters and RNG.
    ///
    /// The entity is returned, not stored; see [`EntityMotionModel::resize`].
    pub fn create(&mut self, id: EntityId, bounds: &SceneRect) -> Entity {
        create(id, bounds, &self.params, &mut self.rng)
    }

    /// Appends a hand-placed entity. Its id must be the next sequential one.
    #[cfg(test)]
    pub(crate) fn push(&mut self, entity: Entity) {
        assert_eq!(entity.id().as_u64(), self.entities.len() as u64);
        self.entities.push(entity);
    }

    /// Advances every entity by one step.
    pub fn step_all(&mut self, bounds: &SceneRect) {
        for entity in &mut self.entities {
            step(entity, bounds);
        }
    }

    /// Sets the speed of every live entity.
    ///
    /// Entities created later still use [`MotionParams::default_speed`].
    pub fn set_speed_all(&mut self, speed: f32) {
        for entity in &mut self.entities {
            entity.set_speed(speed);
        }
    }

    /// Sets the color of every live entity.
    pub fn set_color_all(&mut self, color: Color) {
        for entity in &mut self.entities {
            entity.set_color(color);
        }
    }

    /// Grows or shrinks the collection to `new_count` entities.
    ///
    /// New entities get sequential ids continuing from the current length
    /// and random placement inside `bounds`. Shrinking drops the most
    /// recently added entities first.
    pub fn resize(&mut self, new_count: usize, bounds: &SceneRect) {
        let old_count = self.entities.len();
        if new_count == old_count {
            return;
        }

        while self.entities.len() < new_count {
            let id = EntityId::new(self.entities.len() as u64);
            let entity = self.create(id, bounds);
            self.entities.push(entity);
        }
        self.entities.truncate(new_count);

        debug!(old_count, new_count, "resized entity collection");
    }

    /// Entities in creation order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Look up an entity by id.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if there are no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f32) -> SceneRect {
        SceneRect::from_origin_size(Vec2::ZERO, Vec2::splat(size))
    }

    fn plane(position: Vec2, heading: f32, speed: f32) -> Entity {
        Entity::new(EntityId::new(0), "Airplane", position, heading).with_speed(speed)
    }

    mod create_tests {
        use super::*;

        #[test]
        fn create_samples_inside_bounds() {
            let bounds = SceneRect::from_min_max(Vec2::new(-50.0, 10.0), Vec2::new(50.0, 30.0));
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            for i in 0..200 {
                let e = create(EntityId::new(i), &bounds, &MotionParams::default(), &mut rng);
                assert!(e.position.x >= -50.0 && e.position.x < 50.0);
                assert!(e.position.y >= 10.0 && e.position.y < 30.0);
                assert!((0.0..360.0).contains(&e.heading));
                assert_eq!(e.speed(), 2.0);
            }
        }

        #[test]
        fn create_uses_params() {
            let params = MotionParams {
                default_speed: 5.0,
                half_extent: 3.0,
                label_prefix: "Jet".to_string(),
                color: Color::RED,
            };
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            let e = create(EntityId::new(4), &square(100.0), &params, &mut rng);
            assert_eq!(e.label(), "Jet4");
            assert_eq!(e.speed(), 5.0);
            assert_eq!(e.half_extent(), 3.0);
            assert_eq!(e.color(), Color::RED);
        }

        #[test]
        fn create_with_degenerate_bounds_does_not_panic() {
            let bounds = SceneRect::from_min_max(Vec2::new(5.0, 5.0), Vec2::new(5.0, 2.0));
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            let e = create(EntityId::new(0), &bounds, &MotionParams::default(), &mut rng);
            assert_eq!(e.position, Vec2::new(5.0, 5.0));
        }

        #[test]
        fn same_seed_same_entities() {
            let mut a = EntityMotionModel::new(MotionParams::default(), 99);
            let mut b = EntityMotionModel::new(MotionParams::default(), 99);
            a.resize(10, &square(500.0));
            b.resize(10, &square(500.0));
            assert_eq!(a.entities(), b.entities());
        }
    }

    mod step_tests {
        use super::*;

        #[test]
        fn step_moves_along_heading() {
            let mut e = plane(Vec2::new(50.0, 50.0), 90.0, 3.0);
            step(&mut e, &square(100.0));
            assert!((e.position.x - 50.0).abs() < 1e-5);
            assert!((e.position.y - 53.0).abs() < 1e-5);
            assert_eq!(e.heading, 90.0);
        }

        #[test]
        fn right_wall_reflects_heading_to_180() {
            let bounds = square(100.0);
            let mut e = plane(Vec2::new(90.0, 50.0), 0.0, 5.0);
            step(&mut e, &bounds);
            assert_eq!(e.heading, 180.0);
            assert_eq!(e.position.x, 90.0);
            assert_eq!(e.position.y, 50.0);
        }

        #[test]
        fn left_wall_uses_180_minus_heading() {
            let mut e = plane(Vec2::new(11.0, 50.0), 170.0, 5.0);
            step(&mut e, &square(100.0));
            assert_eq!(e.heading, 10.0);
            assert_eq!(e.position.x, 10.0);
        }

        #[test]
        fn bottom_wall_negates_heading() {
            let mut e = plane(Vec2::new(50.0, 89.0), 90.0, 5.0);
            step(&mut e, &square(100.0));
            assert_eq!(e.heading, 270.0);
            assert_eq!(e.position.y, 90.0);
        }

        #[test]
        fn top_wall_negates_heading() {
            let mut e = plane(Vec2::new(50.0, 11.0), 270.0, 5.0);
            step(&mut e, &square(100.0));
            assert_eq!(e.heading, 90.0);
            assert_eq!(e.position.y, 10.0);
        }

        #[test]
        fn corner_reflects_both_axes() {
            let mut e = plane(Vec2::new(89.0, 89.0), 45.0, 5.0);
            step(&mut e, &square(100.0));
            // 180 - 45 = 135, then -135 wraps to 225
            assert_eq!(e.heading, 225.0);
            assert_eq!(e.position, Vec2::new(90.0, 90.0));
        }

        #[test]
        fn bounds_change_applies_on_next_step() {
            let mut e = plane(Vec2::new(150.0, 50.0), 90.0, 0.0);
            step(&mut e, &square(100.0));
            assert_eq!(e.position.x, 90.0);
        }

        #[test]
        fn narrow_bounds_clamp_to_low_edge() {
            let bounds = SceneRect::from_origin_size(Vec2::ZERO, Vec2::new(5.0, 100.0));
            let mut e = plane(Vec2::new(2.0, 50.0), 0.0, 1.0);
            step(&mut e, &bounds);
            assert_eq!(e.position.x, 10.0);
        }

        #[test]
        fn heading_stays_wrapped_over_long_bounce() {
            let bounds = SceneRect::from_origin_size(Vec2::ZERO, Vec2::new(300.0, 200.0));
            let mut e = plane(Vec2::new(150.0, 100.0), 37.0, 9.0);
            for _ in 0..200_000 {
                step(&mut e, &bounds);
                assert!((0.0..360.0).contains(&e.heading), "heading {}", e.heading);
            }
        }

        #[test]
        fn wrap_heading_handles_tiny_negatives() {
            assert_eq!(wrap_heading(-1e-9), 0.0);
            assert_eq!(wrap_heading(-90.0), 270.0);
            assert_eq!(wrap_heading(540.0), 180.0);
        }

        #[test]
        fn zero_speed_inside_bounds_stays_put() {
            let mut e = plane(Vec2::new(40.0, 40.0), 33.0, 0.0);
            step(&mut e, &square(100.0));
            assert_eq!(e.position, Vec2::new(40.0, 40.0));
            assert_eq!(e.heading, 33.0);
        }
    }

    mod model_tests {
        use super::*;

        #[test]
        fn resize_grows_with_sequential_ids() {
            let mut model = EntityMotionModel::new(MotionParams::default(), 1);
            model.resize(3, &square(100.0));
            let ids: Vec<u64> = model.entities().iter().map(|e| e.id().as_u64()).collect();
            assert_eq!(ids, vec![0, 1, 2]);
            model.resize(5, &square(100.0));
            let ids: Vec<u64> = model.entities().iter().map(|e| e.id().as_u64()).collect();
            assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        }

        #[test]
        fn resize_shrinks_lifo() {
            let mut model = EntityMotionModel::new(MotionParams::default(), 1);
            model.resize(5, &square(100.0));
            let first_two = model.entities()[..2].to_vec();
            model.resize(2, &square(100.0));
            assert_eq!(model.entities(), first_two.as_slice());
        }

        #[test]
        fn resize_same_count_is_noop() {
            let mut model = EntityMotionModel::new(MotionParams::default(), 1);
            model.resize(4, &square(100.0));
            let before = model.entities().to_vec();
            model.resize(4, &square(100.0));
            assert_eq!(model.entities(), before.as_slice());
        }

        #[test]
        fn resize_to_zero_empties() {
            let mut model = EntityMotionModel::new(MotionParams::default(), 1);
            model.resize(4, &square(100.0));
            model.resize(0, &square(100.0));
            assert!(model.is_empty());
            model.step_all(&square(100.0));
        }

        #[test]
        fn set_speed_all_moves_exact_distance() {
            let bounds = square(10_000.0);
            let mut model = EntityMotionModel::new(MotionParams::default(), 3);
            for i in 0..8u8 {
                let heading = f32::from(i) * 45.0;
                let e = Entity::new(EntityId::new(u64::from(i)), "P", Vec2::splat(5000.0), heading);
                model.push(e);
            }
            model.set_speed_all(7.0);
            let before: Vec<Vec2> = model.entities().iter().map(|e| e.position).collect();
            model.step_all(&bounds);
            for (e, start) in model.entities().iter().zip(before) {
                assert!((e.position.distance(start) - 7.0).abs() < 1e-3);
            }
        }

        #[test]
        fn set_color_all_changes_color_only() {
            let mut model = EntityMotionModel::new(MotionParams::default(), 3);
            model.resize(3, &square(100.0));
            let before = model.entities().to_vec();
            model.set_color_all(Color::GREEN);
            for (e, old) in model.entities().iter().zip(before) {
                assert_eq!(e.color(), Color::GREEN);
                assert_eq!(e.position, old.position);
                assert_eq!(e.heading, old.heading);
            }
        }

        #[test]
        fn get_by_id() {
            let mut model = EntityMotionModel::new(MotionParams::default(), 3);
            model.resize(3, &square(100.0));
            assert_eq!(model.get(EntityId::new(1)).map(Entity::label), Some("Airplane1"));
            assert!(model.get(EntityId::new(3)).is_none());
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn position_stays_contained(
                seed in any::<u64>(),
                width in 20.0f32..2000.0,
                height in 20.0f32..2000.0,
                speed in 0.0f32..50.0,
                steps in 1usize..200,
            ) {
                let bounds = SceneRect::from_origin_size(Vec2::ZERO, Vec2::new(width, height));
                let mut model = EntityMotionModel::new(MotionParams::default(), seed);
                model.resize(5, &bounds);
                model.set_speed_all(speed);

                let inner = bounds.inset(DEFAULT_HALF_EXTENT);
                for _ in 0..steps {
                    model.step_all(&bounds);
                    for e in model.entities() {
                        prop_assert!(e.position.x >= inner.left() - 1e-3);
                        prop_assert!(e.position.x <= inner.right() + 1e-3);
                        prop_assert!(e.position.y >= inner.top() - 1e-3);
                        prop_assert!(e.position.y <= inner.bottom() + 1e-3);
                    }
                }
            }
        }
    }
}
