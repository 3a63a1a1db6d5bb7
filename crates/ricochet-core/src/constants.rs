//! Simulation constants and tuning parameters.

/// Default simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Hit resolution ---

/// Restitution used when a hit carries no valid physical material.
pub const FALLBACK_RESTITUTION: f32 = 0.5;

/// A ricochet slower than this (cm/s) comes to rest at the impact point.
/// Exactly this speed keeps flying.
pub const REST_SPEED_THRESHOLD: f32 = 100.0;

/// Scale applied to the traced segment before it is mirrored to place
/// a bouncing projectile past the impact point.
pub const RICOCHET_TRACE_EXTENSION: f32 = 1.1;

// --- World bounds ---

/// Projectiles farther than this from the origin are despawned (cm).
pub const WORLD_RADIUS: f32 = 1_000_000.0;

// --- Signals ---

/// Signal raised for entities that acquired a hit result.
pub const SIGNAL_ON_GET_HIT: &str = "OnGetHit";

/// Deliveries a subscription keeps before the oldest are dropped.
pub const SIGNAL_PENDING_LIMIT: usize = 4096;

// --- Debug drawing ---

/// Radius of the marker drawn around grid entities when a hit signal fires.
pub const DEBUG_SPHERE_RADIUS: f32 = 100.0;

/// Lifetime of hit-signal debug markers (seconds).
pub const DEBUG_SPHERE_LIFETIME_SECS: f32 = 5.0;
