//! Observability for the logger tree itself.
//!
//! # Data Flow
//! ```text
//! registry / dispatch / trap / config
//!     → tracing events (crate diagnostics, never routed through the tree)
//!     → metrics.rs (counters)
//! ```
//!
//! # Design Decisions
//! - Internal diagnostics use `tracing`, so a misconfigured tree can still be debugged
//! - Metrics go through the `metrics` facade; without a recorder they cost nothing

pub mod metrics;
