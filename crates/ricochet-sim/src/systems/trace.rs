//! Line-trace system: sweeps in-flight projectiles against the collision
//! scene and reports the hits to attach.
//!
//! The scene is a collaborator behind [`CollisionScene`]; [`PlaneScene`] is
//! the built-in implementation made of one-sided infinite planes.

use glam::Vec3;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use ricochet_core::components::{ActorId, HitResult, PhysMaterialId, Projectile};
use ricochet_core::types::{Transform, Velocity};

/// Something a segment can be traced against.
pub trait CollisionScene: Send {
    /// Nearest impact along `start -> end`, if any.
    fn line_trace(&self, start: Vec3, end: Vec3) -> Option<TraceImpact>;
}

/// Surface information at a trace impact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceImpact {
    pub point: Vec3,
    pub normal: Vec3,
    pub phys_material: Option<PhysMaterialId>,
    pub actor: Option<ActorId>,
    /// Report the hit to the struck actor.
    pub fire_hit_event: bool,
}

/// A hit found this tick, not yet attached to its entity.
#[derive(Debug, Clone, Copy)]
pub struct TraceHit {
    pub entity: Entity,
    pub hit: HitResult,
    pub fire_hit_event: bool,
}

/// One-sided infinite plane; only segments entering from the normal side hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionPlane {
    pub point: Vec3,
    pub normal: Vec3,
    #[serde(default)]
    pub phys_material: Option<PhysMaterialId>,
    #[serde(default)]
    pub actor: Option<ActorId>,
    #[serde(default)]
    pub fire_hit_event: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaneScene {
    pub planes: Vec<CollisionPlane>,
}

impl CollisionPlane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
            phys_material: None,
            actor: None,
            fire_hit_event: false,
        }
    }

    pub fn with_material(mut self, material: PhysMaterialId) -> Self {
        self.phys_material = Some(material);
        self
    }

    /// Attach an actor; hits on this plane are reported to it.
    pub fn with_actor(mut self, actor: ActorId) -> Self {
        self.actor = Some(actor);
        self.fire_hit_event = true;
        self
    }

    /// Fraction along `start -> end` where the segment crosses the front face.
    fn crossing(&self, start: Vec3, end: Vec3) -> Option<f32> {
        let d0 = (start - self.point).dot(self.normal);
        let d1 = (end - self.point).dot(self.normal);
        if d0 >= 0.0 && d1 < 0.0 {
            Some(d0 / (d0 - d1))
        } else {
            None
        }
    }
}

impl PlaneScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plane(mut self, plane: CollisionPlane) -> Self {
        self.planes.push(plane);
        self
    }
}

impl CollisionScene for PlaneScene {
    fn line_trace(&self, start: Vec3, end: Vec3) -> Option<TraceImpact> {
        self.planes
            .iter()
            .filter_map(|plane| plane.crossing(start, end).map(|t| (t, plane)))
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(t, plane)| TraceImpact {
                point: start.lerp(end, t),
                normal: plane.normal,
                phys_material: plane.phys_material,
                actor: plane.actor,
                fire_hit_event: plane.fire_hit_event,
            })
    }
}

/// Trace every in-flight projectile without a pending hit over this tick's
/// travel. Hits are collected into `hits`; the world is not modified.
pub fn run(world: &World, scene: &dyn CollisionScene, dt: f32, hits: &mut Vec<TraceHit>) {
    hits.clear();

    for (entity, (transform, velocity)) in world
        .query::<(&Transform, &Velocity)>()
        .with::<&Projectile>()
        .without::<&HitResult>()
        .iter()
    {
        let start = transform.translation;
        let end = start + velocity.0 * dt;
        if let Some(impact) = scene.line_trace(start, end) {
            hits.push(TraceHit {
                entity,
                hit: HitResult {
                    trace_start: start,
                    trace_end: end,
                    impact_point: impact.point,
                    impact_normal: impact.normal,
                    phys_material: impact.phys_material,
                    actor: impact.actor,
                },
                fire_hit_event: impact.fire_hit_event,
            });
        }
    }
}
