//! Time-bounded researcher profile cache.
//!
//! Replaces the original dashboard's module-level profile store with an
//! explicit object the caller passes around. Entries expire after a fixed
//! TTL; an expired entry behaves exactly like a miss and is evicted on
//! access. The time source is injected so expiry is testable without
//! sleeping.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::profile::ResearcherProfile;

/// Injected time source.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by `Utc::now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

struct CacheEntry {
    profile: ResearcherProfile,
    inserted_at: DateTime<Utc>,
}

/// Researcher-name keyed cache with TTL expiry.
pub struct ProfileCache<C: Clock = SystemClock> {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
    clock: C,
}

impl ProfileCache<SystemClock> {
    pub fn new(ttl_secs: u64) -> Self {
        Self::with_clock(ttl_secs, SystemClock)
    }
}

impl<C: Clock> ProfileCache<C> {
    pub fn with_clock(ttl_secs: u64, clock: C) -> Self {
        info!(ttl_secs, "Creating profile cache");
        Self {
            entries: HashMap::new(),
            ttl: Duration::seconds(ttl_secs as i64),
            clock,
        }
    }

    /// Fetch a cached profile. Expired entries are evicted and reported as
    /// a miss.
    pub fn get(&mut self, name: &str) -> Option<&ResearcherProfile> {
        let now = self.clock.now();
        let expired = match self.entries.get(name) {
            Some(entry) => now - entry.inserted_at >= self.ttl,
            None => return None,
        };
        if expired {
            debug!(name, "Evicting expired profile");
            self.entries.remove(name);
            return None;
        }
        self.entries.get(name).map(|entry| &entry.profile)
    }

    pub fn insert(&mut self, profile: ResearcherProfile) {
        let inserted_at = self.clock.now();
        debug!(name = %profile.name, "Caching profile");
        self.entries
            .insert(profile.name.clone(), CacheEntry { profile, inserted_at });
    }

    /// Drop one entry regardless of age.
    pub fn invalidate(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Drop every expired entry; returns how many were evicted.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now - entry.inserted_at < ttl);
        let evicted = before - self.entries.len();
        if evicted > 0 {
            debug!(evicted, "Purged expired profiles");
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
