//! Per-identifier cooldown: the volatile identifier → last-accepted
//! epoch map that rate-limits check-ins.
//!
//! Owned exclusively by the ingestion pipeline; never touched from the
//! request-serving side, so it needs no synchronization. Keys are never
//! evicted — identifiers come from a small, bounded roster.

use std::collections::HashMap;

pub struct CooldownTracker {
    last_accepted: HashMap<i64, u64>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self {
            last_accepted: HashMap::new(),
        }
    }

    /// Whether a sighting of `identifier` at `now_epoch` may be accepted:
    /// true when there is no prior acceptance or the configured interval
    /// has elapsed. Rejection does not touch state.
    pub fn should_accept(&self, identifier: i64, now_epoch: u64, cooldown_secs: u64) -> bool {
        match self.last_accepted.get(&identifier) {
            Some(last) => now_epoch.saturating_sub(*last) >= cooldown_secs,
            None => true,
        }
    }

    /// Record an acceptance, unconditionally overwriting any previous
    /// timestamp for the identifier.
    pub fn record_accepted(&mut self, identifier: i64, now_epoch: u64) {
        self.last_accepted.insert(identifier, now_epoch);
    }

    /// Number of identifiers ever accepted in this process lifetime.
    pub fn len(&self) -> usize {
        self.last_accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_accepted.is_empty()
    }
}

impl Default for CooldownTracker {
    fn default() -> Self {
        Self::new()
    }
}
