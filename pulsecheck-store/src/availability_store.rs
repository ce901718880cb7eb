//! Cumulative availability state.
//!
//! Holds per-domain UP/DOWN counters for the lifetime of the process. There
//! is no eviction and no windowing: availability is computed over every
//! observation since startup.

use pulsecheck_core::{AvailabilityTracker, DomainAvailability, DomainCounts, ProbeStatus};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

// ============================================================================
// Inner State
// ============================================================================

/// Internal state for the availability store.
#[derive(Debug, Default)]
struct AvailabilityStoreInner {
    /// Counters by domain.
    counts: HashMap<String, DomainCounts>,
    /// Domains in first-observation order.
    order: Vec<String>,
}

// ============================================================================
// Availability Store
// ============================================================================

/// Shared per-domain counters.
///
/// Cloning is shallow: clones observe and mutate the same counters. Each
/// [`record`](AvailabilityTracker::record) runs under one lock, so concurrent
/// probe tasks can write to it directly.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityStore {
    inner: Arc<Mutex<AvailabilityStoreInner>>,
}

impl AvailabilityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked domains.
    pub fn len(&self) -> usize {
        self.lock().order.len()
    }

    /// Returns true if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.lock().order.is_empty()
    }

    /// Returns the counters for a domain, or `None` if it was never seen.
    pub fn get(&self, domain: &str) -> Option<DomainCounts> {
        self.lock().counts.get(domain).copied()
    }

    // Counter updates never leave the map half-written, so a poisoned lock
    // still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, AvailabilityStoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AvailabilityTracker for AvailabilityStore {
    fn record(&self, domain: &str, status: ProbeStatus) {
        let mut inner = self.lock();
        if let Some(counts) = inner.counts.get_mut(domain) {
            counts.record(status);
            return;
        }

        debug!(domain, "Tracking new domain");
        let mut counts = DomainCounts::default();
        counts.record(status);
        inner.order.push(domain.to_string());
        inner.counts.insert(domain.to_string(), counts);
    }

    fn counts(&self, domain: &str) -> DomainCounts {
        self.get(domain).unwrap_or_default()
    }

    /// Domains in the order they were first recorded.
    fn domains(&self) -> Vec<String> {
        self.lock().order.clone()
    }

    /// Consistent view of every domain, taken under a single lock.
    fn snapshot(&self) -> Vec<DomainAvailability> {
        let inner = self.lock();
        inner
            .order
            .iter()
            .map(|domain| {
                let counts = inner.counts.get(domain).copied().unwrap_or_default();
                DomainAvailability::new(domain.clone(), counts)
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = AvailabilityStore::new();
        assert!(store.is_empty());
        assert!(store.domains().is_empty());
        assert!(store.get("fetch.com").is_none());
        assert_eq!(store.availability("fetch.com"), 0);
    }

    #[test]
    fn test_record_creates_and_increments() {
        let store = AvailabilityStore::new();

        store.record("fetch.com", ProbeStatus::Up);
        store.record("fetch.com", ProbeStatus::Down);
        store.record("fetch.com", ProbeStatus::Up);

        assert_eq!(store.counts("fetch.com"), DomainCounts::new(2, 1));
        assert_eq!(store.availability("fetch.com"), 67);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_domains_in_first_seen_order() {
        let store = AvailabilityStore::new();
        for domain in ["b.example", "a.example", "b.example", "c.example"] {
            store.record(domain, ProbeStatus::Up);
        }

        assert_eq!(store.domains(), vec!["b.example", "a.example", "c.example"]);
    }

    #[test]
    fn test_snapshot_reports_every_domain() {
        let store = AvailabilityStore::new();
        store.record("fetch.com", ProbeStatus::Up);
        store.record("fetch.com", ProbeStatus::Down);
        store.record("www.fetchrewards.com", ProbeStatus::Up);

        let snapshot = store.snapshot();
        assert_eq!(
            snapshot,
            vec![
                DomainAvailability::new("fetch.com", DomainCounts::new(1, 1)),
                DomainAvailability::new("www.fetchrewards.com", DomainCounts::new(1, 0)),
            ]
        );
        assert_eq!(snapshot[0].availability, 50);
    }

    #[test]
    fn test_clones_share_state() {
        let store = AvailabilityStore::new();
        let handle = store.clone();

        handle.record("fetch.com", ProbeStatus::Down);
        assert_eq!(store.counts("fetch.com"), DomainCounts::new(0, 1));
    }

    #[test]
    fn test_usable_as_trait_object() {
        let tracker: Arc<dyn AvailabilityTracker> = Arc::new(AvailabilityStore::new());
        tracker.record("fetch.com", ProbeStatus::Up);
        assert_eq!(tracker.availability("fetch.com"), 100);
    }

    #[test]
    fn test_concurrent_writers() {
        let store = AvailabilityStore::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    let status = if i % 2 == 0 { ProbeStatus::Up } else { ProbeStatus::Down };
                    for _ in 0..1000 {
                        store.record("fetch.com", status);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.counts("fetch.com"), DomainCounts::new(4000, 4000));
        assert_eq!(store.availability("fetch.com"), 50);
        assert_eq!(store.domains().len(), 1);
    }
}
