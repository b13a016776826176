//! Shared integration-test harness: scripted randomness, recording
//! assaults, and a recording metric publisher.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use havoc::assault::{Assault, AssaultRegistry, AssaultScope};
use havoc::config::loader::SharedConfig;
use havoc::config::schema::ChaosConfig;
use havoc::engine::{ChaosEngine, RandomSource};
use havoc::observability::events::{AssaultFired, MetricEventPublisher};
use havoc::toggles::DefaultToggles;

/// Assault that records attacks and whose activity can be flipped.
pub struct RecordingAssault {
    kind: &'static str,
    scope: AssaultScope,
    active: AtomicBool,
    hits: AtomicU64,
}

impl RecordingAssault {
    pub fn new(kind: &'static str, scope: AssaultScope, active: bool) -> Arc<Self> {
        Arc::new(Self {
            kind,
            scope,
            active: AtomicBool::new(active),
            hits: AtomicU64::new(0),
        })
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }
}

impl Assault for RecordingAssault {
    fn kind(&self) -> &str {
        self.kind
    }
    fn scope(&self) -> AssaultScope {
        self.scope
    }
    fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
    fn attack(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }
}

/// Random source replaying a fixed sequence, repeating the final draw.
pub struct ScriptedRandom {
    draws: Mutex<Vec<u32>>,
}

impl ScriptedRandom {
    pub fn new(draws: &[u32]) -> Arc<Self> {
        let mut reversed = draws.to_vec();
        reversed.reverse();
        Arc::new(Self {
            draws: Mutex::new(reversed),
        })
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in(&self, _bound: u32) -> u32 {
        let mut draws = self.draws.lock().expect("lock");
        if draws.len() > 1 {
            draws.pop().expect("non-empty")
        } else {
            *draws.last().expect("scripted source exhausted")
        }
    }
}

/// Publisher that keeps every notification for assertions.
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<AssaultFired>>,
}

impl RecordingPublisher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<AssaultFired> {
        self.events.lock().expect("lock").clone()
    }
}

impl MetricEventPublisher for RecordingPublisher {
    fn publish(&self, event: &AssaultFired) {
        self.events.lock().expect("lock").push(event.clone());
    }
}

/// Enabled config with level 1 (every trigger draw of 0 fires).
pub fn enabled_config() -> SharedConfig {
    let mut config = ChaosConfig::default();
    config.chaos.enabled = true;
    Arc::new(RwLock::new(config))
}

/// Engine wired with default toggles and the given collaborators.
pub fn engine(
    config: SharedConfig,
    assaults: Vec<Arc<dyn Assault>>,
    publisher: Arc<dyn MetricEventPublisher>,
    random: Arc<dyn RandomSource>,
) -> ChaosEngine {
    ChaosEngine::new(
        config,
        AssaultRegistry::new(assaults),
        publisher,
        Arc::new(DefaultToggles),
        random,
    )
}
