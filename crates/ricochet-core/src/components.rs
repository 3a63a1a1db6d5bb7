//! ECS fragments and tags for hecs entities.
//!
//! Fragments are plain data structs with no behavior; tags are zero-size
//! markers used only to filter queries or to split entities into archetypes.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Handle to a world object (actor) that lives outside the ECS.
///
/// The handle is weak: the actor may already be gone when a hit referencing
/// it is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Handle to a physical material in a [`crate::materials::MaterialLibrary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhysMaterialId(pub u32);

/// A pending collision event produced by a trace.
///
/// At most one is attached to an entity at a time; the hit resolver consumes
/// it in the same pass that reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitResult {
    /// Start of the traced segment.
    pub trace_start: Vec3,
    /// End of the traced segment.
    pub trace_end: Vec3,
    /// Point where the segment met the surface.
    pub impact_point: Vec3,
    /// Surface normal at the impact point.
    pub impact_normal: Vec3,
    /// Material of the struck surface, if it has one.
    pub phys_material: Option<PhysMaterialId>,
    /// Struck world object, if any.
    pub actor: Option<ActorId>,
}

/// Marks a projectile entity (in flight or at rest).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Entity bounces off surfaces instead of stopping at the first impact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RicochetTag;

/// Entity is indexed by the spatial partition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InOctreeGridTag;

/// The attached hit should be reported to the struck actor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FireHitEventTag;

impl HitResult {
    /// Segment from trace start to trace end.
    pub fn trace_delta(&self) -> Vec3 {
        self.trace_end - self.trace_start
    }
}
