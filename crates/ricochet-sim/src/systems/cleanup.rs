//! Cleanup system: removes projectiles that left the world bounds.

use hecs::{Entity, World};

use ricochet_core::components::Projectile;
use ricochet_core::types::Transform;

/// Remove projectiles farther than `world_radius` from the origin.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, world_radius: f32, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let radius_sq = world_radius * world_radius;

    for (entity, transform) in world.query_mut::<&Transform>().with::<&Projectile>() {
        if transform.translation.length_squared() > radius_sq {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
