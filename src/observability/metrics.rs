//! Metrics collection for the chaos engine.
//!
//! Prometheus-compatible counters with label cardinality protection
//! and typed convenience functions for recording decisions.

use std::sync::atomic::{AtomicBool, Ordering};

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::assault::AssaultScope;
use crate::error::HavocError;

/// Guard to prevent double-initialization of the metrics recorder.
static METRICS_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Assault kinds shipped by typical deployments, used for label
/// cardinality protection.
///
/// Any kind not in this list is bucketed as `"__custom__"` so
/// user-defined assault names cannot exhaust the label space.
const KNOWN_KINDS: [&str; 5] = ["latency", "exception", "kill_app", "memory", "cpu"];

/// Sanitizes an assault kind for use as a metrics label.
///
/// Returns the original string when it is a known kind, or
/// `"__custom__"` otherwise.
#[must_use]
pub fn sanitize_kind_label(kind: &str) -> &str {
    if KNOWN_KINDS.contains(&kind) {
        kind
    } else {
        "__custom__"
    }
}

/// Outcome of one engine invocation, for the decision counter.
///
/// A disabled engine records nothing: disabling chaos must leave no
/// trace in request handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The trigger declined the invocation.
    NoTrigger,
    /// The trigger fired but no assault was active and eligible.
    NoActiveAssault,
    /// An assault was selected and fired.
    Attacked,
}

impl Decision {
    const fn as_str(self) -> &'static str {
        match self {
            Self::NoTrigger => "no_trigger",
            Self::NoActiveAssault => "no_active_assault",
            Self::Attacked => "attacked",
        }
    }
}

/// Initializes the global metrics recorder.
///
/// When `port` is `Some`, a Prometheus HTTP listener is started on
/// `127.0.0.1:<port>`. When `None`, the recorder is installed without
/// an HTTP endpoint (metrics are recorded internally and can be read
/// programmatically).
///
/// # Errors
///
/// Returns `HavocError::Io` if the recorder or HTTP listener cannot be
/// installed (e.g. port already in use).
pub fn init_metrics(port: Option<u16>) -> Result<(), HavocError> {
    if METRICS_INITIALIZED.swap(true, Ordering::SeqCst) {
        tracing::debug!("metrics already initialized, skipping");
        return Ok(());
    }
    port.map_or_else(
        || PrometheusBuilder::new().install_recorder().map(|_| ()),
        |p| {
            PrometheusBuilder::new()
                .with_http_listener(([127, 0, 0, 1], p))
                .install()
        },
    )
    .map_err(|e| HavocError::Io(std::io::Error::other(e.to_string())))?;

    describe_metrics();
    Ok(())
}

/// Registers metric descriptions with the global recorder.
fn describe_metrics() {
    describe_counter!(
        "havoc_invocations_total",
        "Engine invocations evaluated while chaos was enabled, by decision"
    );
    describe_counter!(
        "havoc_assaults_total",
        "Assaults fired, by kind and scope"
    );
}

/// Records the decision taken for one enabled invocation.
pub fn record_decision(decision: Decision) {
    counter!("havoc_invocations_total", "decision" => decision.as_str()).increment(1);
}

/// Records a fired assault.
pub fn record_assault(kind: &str, scope: AssaultScope) {
    let label = sanitize_kind_label(kind);
    counter!(
        "havoc_assaults_total",
        "kind" => label.to_owned(),
        "scope" => scope.as_str(),
    )
    .increment(1);
}

// ============================================================================
// Tests
// ============================================================================
