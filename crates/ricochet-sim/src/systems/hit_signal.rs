//! Reactor for the "entity got hit" signal.
//!
//! Subscribes once at setup. When the signal fires it reads the transform
//! of every spatially indexed entity and emits debug markers for them.
//! It only reads the world; the triggered entity list is passed on so
//! later reactions can build on it.

use hecs::World;
use log::warn;

use ricochet_core::components::InOctreeGridTag;
use ricochet_core::constants::{DEBUG_SPHERE_LIFETIME_SECS, DEBUG_SPHERE_RADIUS, SIGNAL_ON_GET_HIT};
use ricochet_core::events::DebugSphere;
use ricochet_core::state::SignalView;
use ricochet_core::types::Transform;

use crate::error::SimError;
use crate::signals::{SignalBus, SubscriptionId};

const DEBUG_SPHERE_COLOR: [u8; 4] = [0, 0, 255, 255];

#[derive(Debug)]
pub struct HitSignalReactor {
    subscription: SubscriptionId,
}

impl HitSignalReactor {
    /// Subscribe to the hit signal on `bus`.
    pub fn subscribe(bus: &mut SignalBus) -> Self {
        Self {
            subscription: bus.subscribe(SIGNAL_ON_GET_HIT),
        }
    }

    /// Like [`Self::subscribe`], but for callers whose bus may be unavailable.
    pub fn initialize(bus: Option<&mut SignalBus>) -> Result<Self, SimError> {
        match bus {
            Some(bus) => Ok(Self::subscribe(bus)),
            None => {
                warn!("hit signal reactor has no signal bus; not subscribed");
                Err(SimError::MissingSignalBus {
                    signal: SIGNAL_ON_GET_HIT,
                })
            }
        }
    }

    /// Consume pending signal deliveries. Returns an empty view when the
    /// signal did not fire since the last call.
    pub fn run(&self, world: &World, bus: &mut SignalBus) -> SignalView {
        let triggered = bus.take_pending(self.subscription);
        if triggered.is_empty() {
            return SignalView::default();
        }

        let debug_spheres = world
            .query::<&Transform>()
            .with::<&InOctreeGridTag>()
            .iter()
            .map(|(_entity, transform)| DebugSphere {
                center: transform.translation,
                radius: DEBUG_SPHERE_RADIUS,
                lifetime_secs: DEBUG_SPHERE_LIFETIME_SECS,
                color: DEBUG_SPHERE_COLOR,
            })
            .collect();

        SignalView {
            triggered: triggered.iter().map(|e| e.to_bits().get()).collect(),
            debug_spheres,
        }
    }
}
