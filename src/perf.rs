//! Optional dispatch counters.
//!
//! Counters record which path each intrinsic-equality operation took (bitwise
//! fast path or general path) and how often a needle set was folded.
//!
//! Enable with the `span-perf` feature. When disabled, all functions are
//! no-ops and [`snapshot`] returns zeros.
//!
//! Counters use relaxed atomics; snapshots are best-effort and intended for
//! coarse diagnostics, not exact accounting across threads.

#[cfg(feature = "span-perf")]
use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of dispatch counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpanPerfStats {
    /// Operations that ran on a reinterpreted word or byte view.
    pub fast_path_calls: u64,
    /// Operations that ran element by element through `PartialEq` or a comparer.
    pub general_path_calls: u64,
    /// Needle sets that shrank during folding.
    pub folded_needle_sets: u64,
}

#[cfg(feature = "span-perf")]
static FAST_PATH_CALLS: AtomicU64 = AtomicU64::new(0);
#[cfg(feature = "span-perf")]
static GENERAL_PATH_CALLS: AtomicU64 = AtomicU64::new(0);
#[cfg(feature = "span-perf")]
static FOLDED_NEEDLE_SETS: AtomicU64 = AtomicU64::new(0);

/// Reset all counters to zero.
///
/// This is a no-op when `span-perf` is disabled.
pub fn reset() {
    #[cfg(feature = "span-perf")]
    {
        FAST_PATH_CALLS.store(0, Ordering::Relaxed);
        GENERAL_PATH_CALLS.store(0, Ordering::Relaxed);
        FOLDED_NEEDLE_SETS.store(0, Ordering::Relaxed);
    }
}

/// Snapshot current counters.
///
/// Returns zeros when `span-perf` is disabled.
#[must_use]
pub fn snapshot() -> SpanPerfStats {
    #[cfg(feature = "span-perf")]
    {
        SpanPerfStats {
            fast_path_calls: FAST_PATH_CALLS.load(Ordering::Relaxed),
            general_path_calls: GENERAL_PATH_CALLS.load(Ordering::Relaxed),
            folded_needle_sets: FOLDED_NEEDLE_SETS.load(Ordering::Relaxed),
        }
    }

    #[cfg(not(feature = "span-perf"))]
    {
        SpanPerfStats::default()
    }
}

#[inline(always)]
pub(crate) fn record_fast() {
    #[cfg(feature = "span-perf")]
    FAST_PATH_CALLS.fetch_add(1, Ordering::Relaxed);
}

#[inline(always)]
pub(crate) fn record_general() {
    #[cfg(feature = "span-perf")]
    GENERAL_PATH_CALLS.fetch_add(1, Ordering::Relaxed);
}

#[inline(always)]
pub(crate) fn record_fold() {
    #[cfg(feature = "span-perf")]
    FOLDED_NEEDLE_SETS.fetch_add(1, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "span-perf"))]
    #[test]
    fn disabled_counters_stay_zero() {
        record_fast();
        record_general();
        record_fold();
        assert_eq!(snapshot(), SpanPerfStats::default());
    }

    #[cfg(feature = "span-perf")]
    #[test]
    fn enabled_counters_accumulate() {
        // Other tests share the statics, so only lower bounds are checked.
        let before = snapshot();
        record_fast();
        record_general();
        record_fold();
        let after = snapshot();
        assert!(after.fast_path_calls > before.fast_path_calls);
        assert!(after.general_path_calls > before.general_path_calls);
        assert!(after.folded_needle_sets > before.folded_needle_sets);
    }
}
