//! Hit resolver: decides what happens to a projectile after it hits something.
//!
//! The rule is chosen per archetype. hecs evaluates `With`/`Without` filters
//! once per archetype, so every entity in a batch follows the same rule:
//!
//! - no `RicochetTag`: pin at the impact point, drop velocity, destroy.
//! - `RicochetTag`: consume the hit and its event tag, reflect and damp the
//!   velocity, then either come to rest (too slow) or continue from a
//!   mirrored pose.
//!
//! Transform and velocity are written in place. Structural changes (component
//! removal, despawn) only go into the command buffer and apply at the flush.

use glam::Vec3;
use hecs::{CommandBuffer, World};
use log::debug;
use serde::{Deserialize, Serialize};

use ricochet_core::components::{FireHitEventTag, HitResult, RicochetTag};
use ricochet_core::constants::{
    FALLBACK_RESTITUTION, REST_SPEED_THRESHOLD, RICOCHET_TRACE_EXTENSION,
};
use ricochet_core::events::HitEvent;
use ricochet_core::materials::MaterialLibrary;
use ricochet_core::types::{reflect, Transform, Velocity};

/// Tuning for ricochet resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Damping applied when the hit has no valid material.
    pub fallback_restitution: f32,
    /// Post-bounce speeds strictly below this come to rest.
    pub rest_speed_threshold: f32,
    /// Scale of the traced segment mirrored past the impact point.
    pub trace_extension: f32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_restitution: FALLBACK_RESTITUTION,
            rest_speed_threshold: REST_SPEED_THRESHOLD,
            trace_extension: RICOCHET_TRACE_EXTENSION,
        }
    }
}

/// Result of one ricochet computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RicochetOutcome {
    /// Too slow after the bounce; stays at the impact point.
    Rest { position: Vec3 },
    /// Keeps flying from `transform` with `velocity`.
    Bounce { transform: Transform, velocity: Vec3 },
}

/// Per-pass counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    pub stopped: usize,
    pub ricocheted: usize,
    pub came_to_rest: usize,
}

impl ResolveStats {
    pub fn total(&self) -> usize {
        self.stopped + self.ricocheted + self.came_to_rest
    }
}

/// Damping factor for a hit: the material's restitution when the handle is
/// valid, the fallback otherwise.
pub fn restitution_for(hit: &HitResult, materials: &MaterialLibrary, config: &ResolverConfig) -> f32 {
    materials
        .restitution(hit.phys_material)
        .unwrap_or(config.fallback_restitution)
}

/// Bounce `velocity` off the hit surface.
///
/// Single bounce only: the continued pose is not traced again this tick.
pub fn resolve_ricochet(
    hit: &HitResult,
    velocity: Vec3,
    restitution: f32,
    config: &ResolverConfig,
) -> RicochetOutcome {
    let bounced = reflect(velocity, hit.impact_normal) * restitution;

    if bounced.length() < config.rest_speed_threshold {
        return RicochetOutcome::Rest {
            position: hit.impact_point,
        };
    }

    let offset = reflect(hit.trace_delta() * config.trace_extension, hit.impact_normal);
    RicochetOutcome::Bounce {
        transform: Transform::looking_along(bounced, offset + hit.impact_point),
        velocity: bounced,
    }
}

/// Resolve every entity carrying a hit result.
pub fn run(
    world: &mut World,
    materials: &MaterialLibrary,
    config: &ResolverConfig,
    commands: &mut CommandBuffer,
    events: &mut Vec<HitEvent>,
) -> ResolveStats {
    let mut stats = ResolveStats::default();

    for (entity, (hit, transform, _velocity)) in world
        .query_mut::<(&HitResult, &mut Transform, &Velocity)>()
        .without::<&RicochetTag>()
    {
        transform.translation = hit.impact_point;
        // Despawning also drops the hit result.
        commands.remove_one::<Velocity>(entity);
        commands.despawn(entity);

        stats.stopped += 1;
        events.push(HitEvent::Stopped {
            entity: entity.to_bits().get(),
            position: hit.impact_point,
        });
    }

    for (entity, (hit, transform, velocity, fire_tag)) in world
        .query_mut::<(
            &HitResult,
            &mut Transform,
            &mut Velocity,
            Option<&FireHitEventTag>,
        )>()
        .with::<&RicochetTag>()
    {
        // The event tag belongs to the hit it came with.
        commands.remove_one::<HitResult>(entity);
        if fire_tag.is_some() {
            commands.remove_one::<FireHitEventTag>(entity);
        }

        let restitution = restitution_for(hit, materials, config);
        match resolve_ricochet(hit, velocity.0, restitution, config) {
            RicochetOutcome::Rest { position } => {
                transform.translation = position;
                commands.remove_one::<Velocity>(entity);
                commands.despawn(entity);

                stats.came_to_rest += 1;
                events.push(HitEvent::CameToRest {
                    entity: entity.to_bits().get(),
                    position,
                    restitution,
                });
            }
            RicochetOutcome::Bounce {
                transform: pose,
                velocity: bounced,
            } => {
                *transform = pose;
                velocity.0 = bounced;

                stats.ricocheted += 1;
                events.push(HitEvent::Ricocheted {
                    entity: entity.to_bits().get(),
                    position: pose.translation,
                    velocity: bounced,
                    restitution,
                });
            }
        }
    }

    if stats.total() > 0 {
        debug!(
            "resolved hits: {} stopped, {} ricocheted, {} at rest",
            stats.stopped, stats.ricocheted, stats.came_to_rest
        );
    }

    stats
}
