//! Kinematic integration system.
//!
//! Updates Transform from Velocity each tick: position += velocity * dt.
//! Entities holding an unresolved hit stay put; the hit resolver places them.

use hecs::World;

use ricochet_core::components::HitResult;
use ricochet_core::types::{Transform, Velocity};

/// Run kinematic integration for all in-flight entities.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (transform, velocity)) in world
        .query_mut::<(&mut Transform, &Velocity)>()
        .without::<&HitResult>()
    {
        transform.translation += velocity.0 * dt;
    }
}
