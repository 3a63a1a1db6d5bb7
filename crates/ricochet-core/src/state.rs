//! Simulation snapshot: the visible state produced after each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::events::{DebugSphere, HitEvent};
use crate::types::SimTime;

/// Complete simulation state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub projectiles: Vec<ProjectileView>,
    /// Hit outcomes produced during the tick, in processing order.
    pub events: Vec<HitEvent>,
    pub signal: SignalView,
}

/// A projectile as seen from outside the world.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub position: Vec3,
    /// `None` once the projectile is at rest.
    pub velocity: Option<Vec3>,
    pub ricochet: bool,
    /// A hit result is attached and not yet resolved.
    pub hit_pending: bool,
}

/// What the hit-signal reactor saw this tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignalView {
    /// Entities delivered with the hit signal.
    pub triggered: Vec<u64>,
    pub debug_spheres: Vec<DebugSphere>,
}
