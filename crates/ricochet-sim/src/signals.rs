//! Named entity signals.
//!
//! Producers raise a signal for a set of entities; each subscription keeps
//! its own pending list until the subscriber drains it.
//!
//! Subscribers are expected to drain once per tick. A subscription that is
//! never drained keeps only its most recent `pending_limit` deliveries.

use hecs::Entity;
use log::warn;

use ricochet_core::constants::SIGNAL_PENDING_LIMIT;

/// Handle returned by [`SignalBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

#[derive(Debug)]
struct Subscription {
    signal: String,
    pending: Vec<Entity>,
}

#[derive(Debug)]
pub struct SignalBus {
    subscriptions: Vec<Subscription>,
    pending_limit: usize,
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::with_pending_limit(SIGNAL_PENDING_LIMIT)
    }
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bus whose subscriptions hold at most `limit` undrained deliveries.
    pub fn with_pending_limit(limit: usize) -> Self {
        Self {
            subscriptions: Vec::new(),
            pending_limit: limit.max(1),
        }
    }

    pub fn subscribe(&mut self, signal: &str) -> SubscriptionId {
        self.subscriptions.push(Subscription {
            signal: signal.to_owned(),
            pending: Vec::new(),
        });
        SubscriptionId(self.subscriptions.len() - 1)
    }

    /// Raise `signal` for `entities`. Returns the number of subscriptions reached.
    pub fn signal_entities(&mut self, signal: &str, entities: &[Entity]) -> usize {
        let limit = self.pending_limit;
        let mut reached = 0;
        for sub in self.subscriptions.iter_mut().filter(|s| s.signal == signal) {
            sub.pending.extend_from_slice(entities);
            if sub.pending.len() > limit {
                let overflow = sub.pending.len() - limit;
                sub.pending.drain(..overflow);
                warn!("subscription to `{signal}` is not drained; dropped {overflow} oldest deliveries");
            }
            reached += 1;
        }
        if reached == 0 {
            warn!(
                "signal `{signal}` raised for {} entities with no subscriber",
                entities.len()
            );
        }
        reached
    }

    /// Drain the entities signaled for a subscription, deduplicated in id order.
    pub fn take_pending(&mut self, id: SubscriptionId) -> Vec<Entity> {
        let Some(sub) = self.subscriptions.get_mut(id.0) else {
            return Vec::new();
        };
        let mut entities = std::mem::take(&mut sub.pending);
        entities.sort_unstable_by_key(|e| e.to_bits());
        entities.dedup();
        entities
    }

    pub fn subscriber_count(&self, signal: &str) -> usize {
        self.subscriptions
            .iter()
            .filter(|s| s.signal == signal)
            .count()
    }
}
