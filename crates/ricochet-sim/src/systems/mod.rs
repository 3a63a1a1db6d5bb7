//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only
//! passes). They do not own state; everything lives in components, in the
//! engine's buffers, or in the collaborators passed in.

pub mod cleanup;
pub mod hit_notifier;
pub mod hit_resolver;
pub mod hit_signal;
pub mod movement;
pub mod snapshot;
pub mod trace;
