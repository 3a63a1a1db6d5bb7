//! Entity spawn factories for setting up the simulation world.
//!
//! Creates projectile and spatial-grid entities with the fragment and tag
//! sets the hit systems expect.

use glam::{Quat, Vec3};
use hecs::{Entity, EntityBuilder, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use ricochet_core::components::{InOctreeGridTag, Projectile, RicochetTag};
use ricochet_core::types::{rotation_from_direction, Transform, Velocity};

/// Launch parameters for one projectile.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileSpawn {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Bounce off surfaces instead of stopping.
    pub ricochet: bool,
    /// Also index the projectile in the spatial grid.
    pub grid_indexed: bool,
}

/// A fan of projectiles launched from one point.
#[derive(Debug, Clone, Copy)]
pub struct VolleySpawn {
    pub origin: Vec3,
    pub direction: Vec3,
    pub speed: f32,
    /// Maximum yaw/pitch deviation from `direction` (radians).
    pub spread: f32,
    pub count: usize,
    pub ricochet: bool,
}

impl ProjectileSpawn {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            ricochet: false,
            grid_indexed: false,
        }
    }

    pub fn ricochet(mut self) -> Self {
        self.ricochet = true;
        self
    }

    pub fn grid_indexed(mut self) -> Self {
        self.grid_indexed = true;
        self
    }
}

/// Spawn one projectile facing along its launch velocity.
pub fn spawn_projectile(world: &mut World, spawn: ProjectileSpawn) -> Entity {
    let mut builder = EntityBuilder::new();
    builder
        .add(Projectile)
        .add(Transform::looking_along(spawn.velocity, spawn.position))
        .add(Velocity(spawn.velocity));
    // Tags decide the archetype, and with it the hit rule the batch follows.
    if spawn.ricochet {
        builder.add(RicochetTag);
    }
    if spawn.grid_indexed {
        builder.add(InOctreeGridTag);
    }
    world.spawn(builder.build())
}

/// Spawn a volley with a random spread around the aim direction.
/// Same RNG state, same volley.
pub fn spawn_volley(world: &mut World, rng: &mut ChaCha8Rng, volley: VolleySpawn) -> Vec<Entity> {
    let aim = rotation_from_direction(volley.direction);
    let spread = volley.spread.abs();

    (0..volley.count)
        .map(|_| {
            let yaw: f32 = rng.gen_range(-spread..=spread);
            let pitch: f32 = rng.gen_range(-spread..=spread);
            let deviation = Quat::from_rotation_z(yaw) * Quat::from_rotation_y(-pitch);
            let direction = aim * deviation * Vec3::X;
            let mut spawn = ProjectileSpawn::new(volley.origin, direction * volley.speed);
            spawn.ricochet = volley.ricochet;
            spawn_projectile(world, spawn)
        })
        .collect()
}

/// Spawn a static, spatially indexed entity (no velocity).
pub fn spawn_grid_marker(world: &mut World, position: Vec3) -> Entity {
    world.spawn((Transform::from_translation(position), InOctreeGridTag))
}
