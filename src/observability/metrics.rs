//! Counters describing registry and dispatch activity.
//!
//! # Metrics
//! - `logtree_dispatch_total` (counter): dispatch calls by `outcome` (`emitted`, `filtered`)
//! - `logtree_loggers_created_total` (counter): placeholder loggers materialized
//! - `logtree_config_reloads_total` (counter): config reloads by `result`
//! - `logtree_trapped_failures_total` (counter): failures logged by the trap helpers

/// Record one dispatch call and whether it passed the logger gate.
pub fn record_dispatch(emitted: bool) {
    let outcome = if emitted { "emitted" } else { "filtered" };
    ::metrics::counter!("logtree_dispatch_total", "outcome" => outcome).increment(1);
}

/// Record loggers created implicitly by a lookup.
pub fn record_loggers_created(count: usize) {
    if count > 0 {
        ::metrics::counter!("logtree_loggers_created_total").increment(count as u64);
    }
}

/// Record a configuration reload attempt.
pub fn record_config_reload(result: &'static str) {
    ::metrics::counter!("logtree_config_reloads_total", "result" => result).increment(1);
}

/// Record a failure caught and logged by a trap helper.
pub fn record_trapped_failure() {
    ::metrics::counter!("logtree_trapped_failures_total").increment(1);
}
