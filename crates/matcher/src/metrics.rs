// Metrics hooks for the `matcher` crate.
//
// Callers install a global `LookupMetrics` implementation via
// [`set_lookup_metrics`]; every call to [`find_university`](crate::find_university)
// then reports its latency and the tier that answered. This keeps
// instrumentation decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::MatchTier;

/// Metrics observer for lookups.
pub trait LookupMetrics: Send + Sync {
    /// Record the outcome of one lookup.
    ///
    /// `tier` is `None` for a miss, including empty queries that never
    /// searched the table.
    fn record_lookup(&self, latency: Duration, tier: Option<MatchTier>);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn LookupMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn LookupMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn LookupMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global lookup metrics recorder.
///
/// This is typically called once during service startup.
pub fn set_lookup_metrics(recorder: Option<Arc<dyn LookupMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
