//! Chaos decision engine.
//!
//! [`ChaosEngine`] is the single entry point invoked per request or
//! watched method call. It sequences the checks — enabled, watched,
//! toggled, triggered — and fires at most one assault per invocation.

pub mod random;
pub mod selector;
pub mod trigger;
pub mod watcher;

pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use trigger::TriggerEvaluator;
pub use watcher::is_watched;

use std::sync::Arc;

use crate::assault::{Assault, AssaultRegistry, ChaosTarget};
use crate::config::loader::SharedConfig;
use crate::observability::events::{AssaultFired, MetricEventPublisher};
use crate::observability::metrics;
use crate::toggles::{ChaosToggles, ToggleNameMapper};

/// Per-invocation chaos decision engine.
///
/// Safe for concurrent invocation: the decision path takes a short read
/// lock on the configuration and otherwise touches only the atomic
/// trigger counter. No decision blocks or suspends; cost is linear in
/// the number of registered assaults.
pub struct ChaosEngine {
    config: SharedConfig,
    registry: AssaultRegistry,
    publisher: Arc<dyn MetricEventPublisher>,
    toggles: Arc<dyn ChaosToggles>,
    random: Arc<dyn RandomSource>,
    trigger: TriggerEvaluator,
}

impl ChaosEngine {
    /// Wires an engine from its collaborators.
    ///
    /// The trigger counter starts fresh; recreating the engine is the
    /// only way to reset it.
    #[must_use]
    pub fn new(
        config: SharedConfig,
        registry: AssaultRegistry,
        publisher: Arc<dyn MetricEventPublisher>,
        toggles: Arc<dyn ChaosToggles>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            config,
            registry,
            publisher,
            toggles,
            random,
            trigger: TriggerEvaluator::new(),
        }
    }

    /// The registered assaults.
    #[must_use]
    pub fn registry(&self) -> &AssaultRegistry {
        &self.registry
    }

    /// Decides whether this invocation is attacked, and by which assault.
    ///
    /// Sequencing:
    /// 1. Disabled engine: return immediately, no side effects.
    /// 2. Candidate assaults: request-scoped always; custom-scoped only
    ///    when a target name is present and passes the watch filter.
    /// 3. Gate each candidate by its toggle and its own `is_active()`.
    /// 4. Evaluate the trigger once for the invocation.
    /// 5. If triggered, select one assault; call its `attack()` and
    ///    publish a metric event naming it.
    ///
    /// An absent target or target name is valid input and degrades to
    /// request-scoped-only consideration. A panic inside the chosen
    /// assault's `attack()` propagates to the caller.
    pub fn call_chaos_monkey(&self, target: Option<ChaosTarget>, target_name: Option<&str>) {
        let chosen: Option<Arc<dyn Assault>> = {
            let config = self
                .config
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner);

            if !config.chaos.enabled {
                return;
            }

            let mapper = ToggleNameMapper::new(config.chaos.toggle_prefix.clone());
            let mut candidates: Vec<&Arc<dyn Assault>> = self.registry.request().iter().collect();

            if let Some(name) = target_name {
                let watch_ok = !config.assaults.watched_custom_services_active
                    || is_watched(&config.assaults.watched_custom_services, name);
                if watch_ok {
                    candidates.extend(self.registry.custom());
                } else {
                    tracing::trace!(target_name = name, "target not watched, custom assaults skipped");
                }
            }

            let active: Vec<Arc<dyn Assault>> = candidates
                .into_iter()
                .filter(|assault| self.toggles.is_enabled(&mapper.toggle_name(assault.kind())))
                .filter(|assault| assault.is_active())
                .cloned()
                .collect();

            if !self.trigger.should_attack(&config.assaults, self.random.as_ref()) {
                metrics::record_decision(metrics::Decision::NoTrigger);
                return;
            }

            selector::select(&active, self.random.as_ref()).cloned()
            // Config guard dropped here, before any attack runs.
        };

        match chosen {
            Some(assault) => {
                assault.attack();
                metrics::record_decision(metrics::Decision::Attacked);
                metrics::record_assault(assault.kind(), assault.scope());
                tracing::debug!(
                    kind = assault.kind(),
                    scope = %assault.scope(),
                    target_kind = target.map(ChaosTarget::as_str),
                    target_name,
                    "assault fired"
                );
                self.publisher.publish(&AssaultFired {
                    kind: assault.kind().to_string(),
                    scope: assault.scope(),
                    target,
                    target_name: target_name.map(ToString::to_string),
                });
            }
            None => {
                metrics::record_decision(metrics::Decision::NoActiveAssault);
                tracing::trace!(target_name, "triggered with no active assault");
            }
        }
    }
}

impl std::fmt::Debug for ChaosEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChaosEngine")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
