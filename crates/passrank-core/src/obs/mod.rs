//! Observability: runtime telemetry (metrics) and sink abstractions.
//!
//! This module never feeds back into ordering decisions; counters are
//! diagnostics only and deterministic outputs do not depend on them.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventState};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
