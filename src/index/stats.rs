//! Index accessor statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters kept by an index accessor.
///
/// All fields are atomic so concurrent scans can bump them without locks.
/// `Ordering::Relaxed` is enough: counters are independent and only read
/// for reporting.
///
/// # Example
/// ```
/// use skipscan::AccessorStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = AccessorStats::new();
/// stats.node_fetches.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.snapshot().node_fetches, 1);
/// ```
#[derive(Debug)]
pub struct AccessorStats {
    /// Positional searches performed.
    pub finds: AtomicU64,

    /// Link resolutions performed.
    pub node_fetches: AtomicU64,

    /// Link resolutions that pointed at no live node.
    pub missing_nodes: AtomicU64,
}

impl AccessorStats {
    pub fn new() -> Self {
        Self {
            finds: AtomicU64::new(0),
            node_fetches: AtomicU64::new(0),
            missing_nodes: AtomicU64::new(0),
        }
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            finds: self.finds.load(Ordering::Relaxed),
            node_fetches: self.node_fetches.load(Ordering::Relaxed),
            missing_nodes: self.missing_nodes.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.finds.store(0, Ordering::Relaxed);
        self.node_fetches.store(0, Ordering::Relaxed);
        self.missing_nodes.store(0, Ordering::Relaxed);
    }
}

impl Default for AccessorStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time copy of [`AccessorStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub finds: u64,
    pub node_fetches: u64,
    pub missing_nodes: u64,
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ finds: {}, fetches: {}, missing: {} }}",
            self.finds, self.node_fetches, self.missing_nodes
        )
    }
}
