//! Simulation engine.
//!
//! `ProjectileSim` owns the hecs world and the collaborators the hit systems
//! need (collision scene, materials, actors, signal bus), runs all systems
//! in a fixed order each tick, and produces `SimSnapshot`s. Completely
//! headless, enabling deterministic testing.

use glam::Vec3;
use hecs::{CommandBuffer, Entity, World};
use log::warn;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use ricochet_core::components::{FireHitEventTag, HitResult};
use ricochet_core::constants::{SIGNAL_ON_GET_HIT, TICK_RATE, WORLD_RADIUS};
use ricochet_core::events::HitEvent;
use ricochet_core::materials::MaterialLibrary;
use ricochet_core::state::{SignalView, SimSnapshot};
use ricochet_core::types::{SimTime, Transform, Velocity};

use crate::actors::ActorRegistry;
use crate::error::SimError;
use crate::signals::SignalBus;
use crate::systems;
use crate::systems::hit_resolver::ResolverConfig;
use crate::systems::hit_signal::HitSignalReactor;
use crate::systems::trace::{CollisionScene, PlaneScene, TraceHit};
use crate::world_setup::{self, ProjectileSpawn, VolleySpawn};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Ticks per simulated second.
    pub tick_rate: u32,
    /// Projectiles beyond this distance from the origin are despawned.
    pub world_radius: f32,
    pub resolver: ResolverConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            world_radius: WORLD_RADIUS,
            resolver: ResolverConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / f64::from(self.tick_rate.max(1))
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct ProjectileSim {
    world: World,
    time: SimTime,
    config: SimConfig,
    rng: ChaCha8Rng,
    scene: Box<dyn CollisionScene>,
    materials: MaterialLibrary,
    actors: ActorRegistry,
    signals: SignalBus,
    hit_reactor: HitSignalReactor,
    /// Structural changes queued by the resolver, applied once per tick.
    commands: CommandBuffer,
    /// Entities that acquired a hit result since the last notifier pass.
    added_hits: Vec<Entity>,
    trace_hits: Vec<TraceHit>,
    despawn_buffer: Vec<Entity>,
    events: Vec<HitEvent>,
}

impl ProjectileSim {
    /// Create a new engine with an empty collision scene.
    pub fn new(config: SimConfig) -> Self {
        let mut signals = SignalBus::new();
        let hit_reactor = HitSignalReactor::subscribe(&mut signals);
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            scene: Box::new(PlaneScene::new()),
            materials: MaterialLibrary::new(),
            actors: ActorRegistry::new(),
            signals,
            hit_reactor,
            commands: CommandBuffer::new(),
            added_hits: Vec::new(),
            trace_hits: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn set_scene(&mut self, scene: impl CollisionScene + 'static) {
        self.scene = Box::new(scene);
    }

    pub fn materials_mut(&mut self) -> &mut MaterialLibrary {
        &mut self.materials
    }

    pub fn actors_mut(&mut self) -> &mut ActorRegistry {
        &mut self.actors
    }

    pub fn signals_mut(&mut self) -> &mut SignalBus {
        &mut self.signals
    }

    pub fn spawn_projectile(&mut self, spawn: ProjectileSpawn) -> Entity {
        world_setup::spawn_projectile(&mut self.world, spawn)
    }

    pub fn spawn_volley(&mut self, volley: VolleySpawn) -> Vec<Entity> {
        world_setup::spawn_volley(&mut self.world, &mut self.rng, volley)
    }

    pub fn spawn_grid_marker(&mut self, position: Vec3) -> Entity {
        world_setup::spawn_grid_marker(&mut self.world, position)
    }

    /// Attach a hit result produced outside the built-in trace.
    ///
    /// `fire_event` requests a notification to the struck actor. The hit is
    /// resolved on the next tick.
    pub fn attach_hit(
        &mut self,
        entity: Entity,
        hit: HitResult,
        fire_event: bool,
    ) -> Result<(), SimError> {
        attach_hit_result(&mut self.world, &mut self.added_hits, entity, hit, fire_event)
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        let signal = self.run_systems();
        self.time.advance(self.config.dt());

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, events, signal)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Run all systems in order. Returns what the hit-signal reactor saw.
    fn run_systems(&mut self) -> SignalView {
        let dt = self.config.dt() as f32;

        // 1. Trace in-flight projectiles and attach the hits found
        systems::trace::run(&self.world, self.scene.as_ref(), dt, &mut self.trace_hits);
        let mut struck = Vec::with_capacity(self.trace_hits.len());
        for trace_hit in self.trace_hits.drain(..) {
            match attach_hit_result(
                &mut self.world,
                &mut self.added_hits,
                trace_hit.entity,
                trace_hit.hit,
                trace_hit.fire_hit_event,
            ) {
                Ok(()) => struck.push(trace_hit.entity),
                Err(err) => warn!("dropping trace hit: {err}"),
            }
        }
        if !struck.is_empty() {
            self.signals.signal_entities(SIGNAL_ON_GET_HIT, &struck);
        }
        // 2. Movement integration (entities without a pending hit)
        systems::movement::run(&mut self.world, dt);
        // 3. Notify struck actors about new hits
        systems::hit_notifier::run(
            &self.world,
            &self.added_hits,
            &mut self.actors,
            &mut self.events,
        );
        self.added_hits.clear();
        // 4. Resolve hits; structural changes are deferred
        systems::hit_resolver::run(
            &mut self.world,
            &self.materials,
            &self.config.resolver,
            &mut self.commands,
            &mut self.events,
        );
        // 5. Flush deferred changes
        self.commands.run_on(&mut self.world);
        // 6. Hit-signal reactor (after trace, so this tick's hits are signaled)
        let signal = self.hit_reactor.run(&self.world, &mut self.signals);
        // 7. Cleanup (out of bounds)
        systems::cleanup::run(
            &mut self.world,
            self.config.world_radius,
            &mut self.despawn_buffer,
        );
        signal
    }
}

/// Attach `hit` to `entity` and record it for the notifier.
///
/// The producer owns `FireHitEventTag`: it is added when `fire_event` is set
/// and cleared otherwise, so a tag left by an earlier hit does not leak.
fn attach_hit_result(
    world: &mut World,
    added_hits: &mut Vec<Entity>,
    entity: Entity,
    hit: HitResult,
    fire_event: bool,
) -> Result<(), SimError> {
    let entity_ref = world
        .entity(entity)
        .map_err(|_| SimError::UnknownEntity(entity))?;
    if entity_ref.has::<HitResult>() {
        return Err(SimError::HitAlreadyPending(entity));
    }
    // The resolver only visits entities with both; anything else would keep
    // its hit result forever.
    if !(entity_ref.has::<Transform>() && entity_ref.has::<Velocity>()) {
        return Err(SimError::NotInFlight(entity));
    }

    let inserted = if fire_event {
        world.insert(entity, (hit, FireHitEventTag))
    } else {
        let _ = world.remove_one::<FireHitEventTag>(entity);
        world.insert_one(entity, hit)
    };
    inserted.map_err(|_| SimError::UnknownEntity(entity))?;

    added_hits.push(entity);
    Ok(())
}
