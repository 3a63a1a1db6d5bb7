//! Snapshot system: queries the ECS world and builds a SimSnapshot.
//!
//! Read-only: never modifies the world.

use hecs::World;

use ricochet_core::components::{HitResult, Projectile, RicochetTag};
use ricochet_core::events::HitEvent;
use ricochet_core::state::{ProjectileView, SignalView, SimSnapshot};
use ricochet_core::types::{SimTime, Transform, Velocity};

/// Build a complete SimSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    events: Vec<HitEvent>,
    signal: SignalView,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        projectiles: build_projectiles(world),
        events,
        signal,
    }
}

/// Build ProjectileView list, sorted by entity id for stable output.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(
            &Transform,
            Option<&Velocity>,
            Option<&RicochetTag>,
            Option<&HitResult>,
        )>()
        .with::<&Projectile>()
        .iter()
        .map(|(entity, (transform, velocity, ricochet, hit))| ProjectileView {
            id: entity.to_bits().get(),
            position: transform.translation,
            velocity: velocity.map(|v| v.0),
            ricochet: ricochet.is_some(),
            hit_pending: hit.is_some(),
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
