//! Assault behaviors.
//!
//! An assault is a pluggable fault-injection behavior with its own
//! enablement rule and a side-effecting action. The engine decides *when*
//! one fires; implementations decide *what* happens (latency, an injected
//! error, a process kill) and own their own failure containment — a panic
//! inside [`Assault::attack`] propagates to the interception layer.

pub mod registry;

pub use registry::AssaultRegistry;

use serde::{Deserialize, Serialize};

// ============================================================================
// Assault trait
// ============================================================================

/// A pluggable fault-injection behavior.
///
/// Implementations must be cheap to query: [`is_active`](Self::is_active)
/// is consulted on every invocation the engine evaluates.
pub trait Assault: Send + Sync {
    /// Stable identifier for this behavior (e.g. `"latency"`,
    /// `"exception"`). Used for toggle lookup and metric labels.
    fn kind(&self) -> &str;

    /// Scope classification. Behaviors that declare nothing are treated
    /// as custom, matching watched method calls.
    fn scope(&self) -> AssaultScope {
        AssaultScope::Custom
    }

    /// Whether this behavior is currently willing to fire.
    fn is_active(&self) -> bool;

    /// Executes the fault. Called at most once per invocation, and only
    /// when this assault was selected.
    fn attack(&self);
}

// ============================================================================
// Scope classification
// ============================================================================

/// Where in the request lifecycle an assault applies.
///
/// An explicit tag rather than type-based dispatch, so an assault can be
/// reclassified without a new type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssaultScope {
    /// Fires once per inbound request, regardless of target watching.
    Request,
    /// Driven by a scheduler, never by the per-request decision path.
    Runtime,
    /// Fires once per matched watched call; the default classification.
    Custom,
}

impl AssaultScope {
    /// Stable lowercase name, used for logging and metric labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Runtime => "runtime",
            Self::Custom => "custom",
        }
    }
}

impl std::fmt::Display for AssaultScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Execution-context tag
// ============================================================================

/// The kind of component an intercepted call came from.
///
/// Carried through to metric labels only; the decision logic never
/// branches on it, and an absent target is a valid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChaosTarget {
    /// MVC-style controller.
    Controller,
    /// REST controller.
    RestController,
    /// Service-layer component.
    Service,
    /// Data repository.
    Repository,
    /// Any other component.
    Component,
}

impl ChaosTarget {
    /// Stable lowercase name for metric labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::RestController => "rest_controller",
            Self::Service => "service",
            Self::Repository => "repository",
            Self::Component => "component",
        }
    }
}

impl std::fmt::Display for ChaosTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
