//! Statistics tracking for stacks

use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Operation counters for a single stack
///
/// Counters are relaxed atomics so that `peek(&self)` can record without a
/// mutable borrow.
#[derive(Debug, Default)]
pub struct StackStats {
    pub(crate) pushes: AtomicU64,
    pub(crate) pops: AtomicU64,
    pub(crate) peeks: AtomicU64,
    pub(crate) full_rejections: AtomicU64,
    pub(crate) empty_rejections: AtomicU64,
    pub(crate) peak_depth: AtomicUsize,
}

/// Plain copy of [`StackStats`] at one point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackStatsSnapshot {
    pub pushes: u64,
    pub pops: u64,
    pub peeks: u64,
    pub full_rejections: u64,
    pub empty_rejections: u64,
    pub peak_depth: usize,
}

impl StackStats {
    /// Record a successful push that left the stack at `depth`
    pub(crate) fn record_push(&self, depth: usize) {
        self.pushes.fetch_add(1, Ordering::Relaxed);
        self.peak_depth.fetch_max(depth, Ordering::Relaxed);
    }

    pub(crate) fn record_pop(&self) {
        self.pops.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_peek(&self) {
        self.peeks.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_full(&self) {
        self.full_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_empty(&self) {
        self.empty_rejections.fetch_add(1, Ordering::Relaxed);
    }

    /// Successful pushes
    pub fn pushes(&self) -> u64 {
        self.pushes.load(Ordering::Relaxed)
    }

    /// Successful pops
    pub fn pops(&self) -> u64 {
        self.pops.load(Ordering::Relaxed)
    }

    /// Successful peeks
    pub fn peeks(&self) -> u64 {
        self.peeks.load(Ordering::Relaxed)
    }

    /// Pushes rejected with `Full`
    pub fn full_rejections(&self) -> u64 {
        self.full_rejections.load(Ordering::Relaxed)
    }

    /// Pops and peeks rejected with `Empty`
    pub fn empty_rejections(&self) -> u64 {
        self.empty_rejections.load(Ordering::Relaxed)
    }

    /// Deepest the stack has been
    pub fn peak_depth(&self) -> usize {
        self.peak_depth.load(Ordering::Relaxed)
    }

    /// Copy all counters
    pub fn snapshot(&self) -> StackStatsSnapshot {
        StackStatsSnapshot {
            pushes: self.pushes(),
            pops: self.pops(),
            peeks: self.peeks(),
            full_rejections: self.full_rejections(),
            empty_rejections: self.empty_rejections(),
            peak_depth: self.peak_depth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_depth_is_monotonic() {
        let stats = StackStats::default();
        stats.record_push(1);
        stats.record_push(2);
        stats.record_pop();
        stats.record_push(2);

        assert_eq!(stats.pushes(), 3);
        assert_eq!(stats.pops(), 1);
        assert_eq!(stats.peak_depth(), 2);
    }

    #[test]
    fn test_snapshot() {
        let stats = StackStats::default();
        stats.record_full();
        stats.record_empty();
        stats.record_empty();
        stats.record_peek();

        assert_eq!(
            stats.snapshot(),
            StackStatsSnapshot {
                peeks: 1,
                full_rejections: 1,
                empty_rejections: 2,
                ..StackStatsSnapshot::default()
            }
        );
    }
}
