//! World objects outside the ECS that projectiles can strike.
//!
//! Actors opt into hit notifications through the [`ProjectileHitReceiver`]
//! capability. An actor without it is a valid hit target that simply does
//! not react.

use std::collections::HashMap;

use hecs::{Component, Entity, World};

use ricochet_core::components::{ActorId, HitResult};

/// A world object that can be referenced by a hit result.
pub trait Actor: Send {
    fn name(&self) -> &str;

    /// The projectile-hit capability, if this actor has one.
    fn projectile_hit_receiver(&mut self) -> Option<&mut dyn ProjectileHitReceiver> {
        None
    }
}

/// Capability: react synchronously when a projectile strikes this actor.
pub trait ProjectileHitReceiver {
    fn on_projectile_hit(&mut self, projectile: EntityView<'_>, hit: &HitResult);
}

/// Read-only view of one entity, handed to hit callbacks.
#[derive(Clone, Copy)]
pub struct EntityView<'w> {
    world: &'w World,
    entity: Entity,
}

impl<'w> EntityView<'w> {
    pub fn new(world: &'w World, entity: Entity) -> Self {
        Self { world, entity }
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// Stable numeric id, as used in events and snapshots.
    pub fn id(&self) -> u64 {
        self.entity.to_bits().get()
    }

    pub fn is_alive(&self) -> bool {
        self.world.contains(self.entity)
    }

    /// Whether the entity carries a component (or tag) of type `T`.
    pub fn has<T: Component>(&self) -> bool {
        self.world
            .entity(self.entity)
            .map(|entity| entity.has::<T>())
            .unwrap_or(false)
    }

    /// Copy of the entity's `T` component, if present.
    pub fn get<T: Component + Clone>(&self) -> Option<T> {
        self.world
            .get::<&T>(self.entity)
            .ok()
            .map(|component| (*component).clone())
    }
}

/// Owner of all actors, keyed by the handles stored in hit results.
#[derive(Default)]
pub struct ActorRegistry {
    actors: HashMap<ActorId, Box<dyn Actor>>,
    next_id: u32,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, actor: impl Actor + 'static) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        self.actors.insert(id, Box::new(actor));
        id
    }

    /// Remove an actor; hit results that still reference it become dangling.
    pub fn remove(&mut self, id: ActorId) -> Option<Box<dyn Actor>> {
        self.actors.remove(&id)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut (dyn Actor + 'static)> {
        self.actors.get_mut(&id).map(|actor| actor.as_mut())
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
