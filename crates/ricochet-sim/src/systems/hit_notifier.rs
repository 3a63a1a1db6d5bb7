//! Hit notifier: tells struck actors about projectiles that just hit them.
//!
//! Runs over the entities that acquired a hit result since the last pass.
//! Only entities tagged with `FireHitEventTag` are reported, and only to
//! actors that expose the projectile-hit capability. Nothing in the world
//! is modified here, so the resolver's outcome is the same whether or not
//! any callback ran.

use hecs::{Entity, World};
use log::debug;

use ricochet_core::components::{FireHitEventTag, HitResult};
use ricochet_core::events::HitEvent;

use crate::actors::{ActorRegistry, EntityView};

/// Notify struck actors for each newly hit entity. Returns the number of
/// callbacks invoked.
pub fn run(
    world: &World,
    added: &[Entity],
    actors: &mut ActorRegistry,
    events: &mut Vec<HitEvent>,
) -> usize {
    let mut notified = 0;

    for &entity in added {
        let Ok(entity_ref) = world.entity(entity) else {
            continue;
        };
        if !entity_ref.has::<FireHitEventTag>() {
            continue;
        }
        // Copy out so no component borrow is held across the callback.
        let Some(hit) = entity_ref.get::<&HitResult>().map(|hit| *hit) else {
            continue;
        };
        let Some(actor_id) = hit.actor else {
            continue;
        };
        let Some(actor) = actors.get_mut(actor_id) else {
            debug!("hit on {entity:?} references missing actor {actor_id:?}");
            continue;
        };
        let Some(receiver) = actor.projectile_hit_receiver() else {
            continue;
        };

        receiver.on_projectile_hit(EntityView::new(world, entity), &hit);
        notified += 1;
        events.push(HitEvent::ActorNotified {
            entity: entity.to_bits().get(),
            actor: actor_id,
        });
    }

    notified
}
