//! Observability for the chaos engine.
//!
//! Logging, metrics, and structured event infrastructure for monitoring
//! what the engine decided and which assaults actually fired.

pub mod events;
pub mod logging;
pub mod metrics;

pub use events::{AssaultFired, EventEmitter, MetricEventPublisher, NoopPublisher};
pub use logging::{LogFormat, init_logging};
pub use metrics::init_metrics;
