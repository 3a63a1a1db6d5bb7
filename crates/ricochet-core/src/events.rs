//! Events emitted by the simulation when hits are resolved.
//!
//! Entities are identified by `hecs::Entity::to_bits()` so events stay
//! serializable without an ECS dependency.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::ActorId;

/// Outcome of processing one hit result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HitEvent {
    /// A non-ricochet projectile was pinned at the impact point and destroyed.
    Stopped { entity: u64, position: Vec3 },
    /// A ricochet projectile bounced and keeps flying.
    Ricocheted {
        entity: u64,
        position: Vec3,
        velocity: Vec3,
        restitution: f32,
    },
    /// A ricochet projectile lost too much speed and was destroyed at the impact point.
    CameToRest {
        entity: u64,
        position: Vec3,
        restitution: f32,
    },
    /// A struck actor's projectile-hit callback was invoked.
    ActorNotified { entity: u64, actor: ActorId },
}

/// Marker requested by the hit-signal reactor for debug visualization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugSphere {
    pub center: Vec3,
    pub radius: f32,
    pub lifetime_secs: f32,
    /// RGBA color.
    pub color: [u8; 4],
}

impl HitEvent {
    /// Entity the event refers to.
    pub fn entity(&self) -> u64 {
        match self {
            HitEvent::Stopped { entity, .. }
            | HitEvent::Ricocheted { entity, .. }
            | HitEvent::CameToRest { entity, .. }
            | HitEvent::ActorNotified { entity, .. } => *entity,
        }
    }
}
