//! Core traits for cache operations

mod clock;
mod key;
mod metrics;

#[cfg(feature = "tracing")]
mod tracing_metrics;

pub use clock::{Clock, ManualClock, SystemClock};
pub use key::CacheKey;
pub use metrics::{CacheMetrics, CollectionKind, EvictionReason, NoopMetrics};

#[cfg(feature = "metrics")]
pub use metrics::MetricsCrateAdapter;

#[cfg(feature = "tracing")]
pub use tracing_metrics::TracingMetrics;
