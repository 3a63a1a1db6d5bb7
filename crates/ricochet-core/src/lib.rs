//! Core types and definitions for the RICOCHET projectile simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! fragments and tags attached to hecs entities, geometric types,
//! physical materials, constants, emitted events and state snapshots.
//! It has no dependency on the ECS runtime.

pub mod components;
pub mod constants;
pub mod events;
pub mod materials;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
