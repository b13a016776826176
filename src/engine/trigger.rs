//! Trigger evaluation.
//!
//! Decides whether an invocation is attacked at all, independent of
//! which assault would fire. Two modes share one boolean contract:
//! a uniform random draw against `100 / level`, or a deterministic
//! counter that fires every `level`-th evaluation.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::schema::AssaultProperties;
use crate::engine::random::{RandomSource, TROUBLE_BOUND};

/// Per-engine trigger state.
///
/// The counter lives for the lifetime of the engine instance and is
/// shared by all invocations evaluated through it. `fetch_add` hands
/// every evaluation a distinct counter value, so two concurrent calls
/// can never both observe the fire condition for the same value.
#[derive(Debug, Default)]
pub struct TriggerEvaluator {
    evaluations: AtomicU64,
}

impl TriggerEvaluator {
    /// Creates an evaluator with a fresh counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether this invocation should be attacked.
    ///
    /// Called once per invocation, after enable/watch gating. The
    /// result does not reveal which mode produced it.
    ///
    /// `properties.level` has been validated >= 1; in random mode the
    /// integer threshold `100 / level` rounds to zero for levels above
    /// 100, which simply never fires.
    pub fn should_attack(
        &self,
        properties: &AssaultProperties,
        random: &dyn RandomSource,
    ) -> bool {
        let level = u64::from(properties.level.max(1));
        if properties.deterministic {
            let count = self.evaluations.fetch_add(1, Ordering::Relaxed) + 1;
            count % level == 0
        } else {
            u64::from(random.trouble_random()) < u64::from(TROUBLE_BOUND) / level
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
