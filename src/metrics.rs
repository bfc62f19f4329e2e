// Metrics hooks for the comparison engine.
//
// Callers install a global `CompareMetrics` implementation via
// [`set_compare_metrics`], after which `ObjectComparer` reports per-call
// latency, field counts, and the overall confidence for every object-level
// comparison. This keeps instrumentation decoupled from any specific
// metrics backend.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for object-level comparisons.
pub trait CompareMetrics: Send + Sync {
    /// Record the outcome of one object-level comparison.
    ///
    /// `type_name` is the declared type of the compared records, `latency`
    /// is the wall-clock duration of the comparison, `field_count` is the
    /// number of per-field results produced (scored and skipped), and
    /// `overall` is the final confidence returned to the caller.
    fn record_compare(&self, type_name: &str, latency: Duration, field_count: usize, overall: f64);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn CompareMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn CompareMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn CompareMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global compare metrics recorder.
///
/// Typically called once during startup so every `ObjectComparer` shares the
/// same metrics backend.
pub fn set_compare_metrics(recorder: Option<Arc<dyn CompareMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
