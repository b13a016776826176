//! `havoc simulate` — dry-run the decision engine.
//!
//! Evaluates a batch of synthetic invocations against probe assaults
//! that only count how often they fire. Useful for checking what a
//! level/watch/toggle configuration actually does before wiring the
//! engine into a service.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::assault::{Assault, AssaultRegistry, AssaultScope, ChaosTarget};
use crate::cli::args::SimulateArgs;
use crate::config::loader;
use crate::engine::{ChaosEngine, RandomSource, SeededRandom, ThreadRandom};
use crate::error::HavocError;
use crate::observability::events::{EmitterPublisher, Event, EventEmitter, NoopPublisher};
use crate::observability::metrics;
use crate::toggles::InMemoryToggles;

/// An always-active assault that records hits instead of injecting
/// faults.
struct ProbeAssault {
    kind: &'static str,
    scope: AssaultScope,
    hits: AtomicU64,
}

impl ProbeAssault {
    fn new(kind: &'static str, scope: AssaultScope) -> Arc<Self> {
        Arc::new(Self {
            kind,
            scope,
            hits: AtomicU64::new(0),
        })
    }
}

impl Assault for ProbeAssault {
    fn kind(&self) -> &str {
        self.kind
    }
    fn scope(&self) -> AssaultScope {
        self.scope
    }
    fn is_active(&self) -> bool {
        true
    }
    fn attack(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }
}

/// Runs the simulation and prints a per-probe summary.
///
/// # Errors
///
/// Returns a configuration error for an invalid config file, or an I/O
/// error when the event log cannot be opened.
pub fn run(args: &SimulateArgs) -> Result<(), HavocError> {
    let config = loader::load_config(&args.config)?;
    let toggles = {
        let guard = config
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Arc::new(InMemoryToggles::from_config(&guard.toggles))
    };

    if let Some(port) = args.metrics_port {
        metrics::init_metrics(Some(port))?;
    }

    let emitter = args
        .events
        .as_deref()
        .map(EventEmitter::to_file)
        .transpose()?
        .map(Arc::new);

    let publisher: Arc<dyn crate::observability::events::MetricEventPublisher> = emitter
        .as_ref()
        .map_or_else(
            || Arc::new(NoopPublisher) as _,
            |e| Arc::new(EmitterPublisher::new(Arc::clone(e))) as _,
        );

    let random: Arc<dyn RandomSource> = args.seed.map_or_else(
        || Arc::new(ThreadRandom) as _,
        |seed| Arc::new(SeededRandom::new(seed)) as _,
    );

    let probes = vec![
        ProbeAssault::new("latency", AssaultScope::Request),
        ProbeAssault::new("exception", AssaultScope::Request),
        ProbeAssault::new("repo_error", AssaultScope::Custom),
    ];
    let registry = AssaultRegistry::new(
        probes
            .iter()
            .map(|p| Arc::clone(p) as Arc<dyn Assault>)
            .collect(),
    );

    let engine = ChaosEngine::new(config, registry, publisher, toggles, random);

    if let Some(emitter) = &emitter {
        emitter.emit(Event::SimulationStarted {
            timestamp: Utc::now(),
            invocations: args.invocations,
            seed: args.seed,
        });
    }

    tracing::info!(invocations = args.invocations, "starting simulation");
    for i in 0..args.invocations {
        let (target, target_name) = next_target(&args.targets, i);
        engine.call_chaos_monkey(target, target_name);
    }

    let attacked: u64 = probes.iter().map(|p| p.hits.load(Ordering::Relaxed)).sum();

    if let Some(emitter) = &emitter {
        emitter.emit(Event::SimulationFinished {
            timestamp: Utc::now(),
            attacked,
            total: args.invocations,
        });
    }

    println!("invocations: {}", args.invocations);
    println!("attacked:    {attacked}");
    for probe in &probes {
        println!(
            "  {:<12} {:>8}  ({})",
            probe.kind,
            probe.hits.load(Ordering::Relaxed),
            probe.scope
        );
    }

    Ok(())
}

/// Cycles over the configured target names.
///
/// Without targets every invocation is target-less, so only
/// request-scoped probes are considered.
fn next_target(targets: &[String], i: u64) -> (Option<ChaosTarget>, Option<&str>) {
    if targets.is_empty() {
        return (None, None);
    }
    #[allow(clippy::cast_possible_truncation)]
    let index = (i % targets.len() as u64) as usize;
    (Some(ChaosTarget::Service), Some(targets[index].as_str()))
}

// ============================================================================
// Tests
// ============================================================================
