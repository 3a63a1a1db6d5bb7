//! Error type for fallible simulation operations.
//!
//! Hit resolution itself never fails: a missing material falls back to a
//! fixed restitution and a struck object without the hit capability is
//! skipped. Errors only surface at the ingestion, setup and config edges.

use hecs::Entity;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// The entity was never spawned or has been destroyed.
    #[error("entity {0:?} does not exist")]
    UnknownEntity(Entity),

    /// The entity already carries a hit result that has not been resolved.
    #[error("entity {0:?} already has an unresolved hit result")]
    HitAlreadyPending(Entity),

    /// The entity has no transform and velocity, so the resolver would never
    /// consume a hit attached to it.
    #[error("entity {0:?} is not an in-flight projectile")]
    NotInFlight(Entity),

    /// A signal subscriber was initialized without a signal bus.
    #[error("no signal bus available to subscribe to `{signal}`")]
    MissingSignalBus { signal: &'static str },

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
