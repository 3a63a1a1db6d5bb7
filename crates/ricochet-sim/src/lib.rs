//! Projectile simulation engine for RICOCHET.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, resolves
//! projectile hits through a deferred command buffer, and produces
//! `SimSnapshot`s for callers.

pub mod actors;
pub mod engine;
pub mod error;
pub mod logging;
pub mod signals;
pub mod systems;
pub mod world_setup;

pub use ricochet_core as core;
pub use engine::{ProjectileSim, SimConfig};
pub use error::SimError;
