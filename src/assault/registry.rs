//! Scope-partitioned assault registry.
//!
//! Built once at engine construction; partitions the registered
//! behaviors by their declared [`AssaultScope`] so the decision path
//! never has to re-classify per invocation.

use std::sync::Arc;

use super::{Assault, AssaultScope};

/// Registered assault behaviors, partitioned by scope.
///
/// Registration order is preserved within each partition; the selector
/// indexes into the active sublist in that order.
#[derive(Default)]
pub struct AssaultRegistry {
    request: Vec<Arc<dyn Assault>>,
    runtime: Vec<Arc<dyn Assault>>,
    custom: Vec<Arc<dyn Assault>>,
}

impl AssaultRegistry {
    /// Partitions a flat list of behaviors by their declared scope.
    #[must_use]
    pub fn new(assaults: Vec<Arc<dyn Assault>>) -> Self {
        let mut registry = Self::default();
        for assault in assaults {
            registry.register(assault);
        }
        registry
    }

    /// Builds a registry from already-partitioned request and custom
    /// lists, ignoring each assault's own classification.
    ///
    /// Mirrors interception layers that wire the two collections
    /// explicitly instead of relying on [`Assault::scope`].
    #[must_use]
    pub fn from_parts(request: Vec<Arc<dyn Assault>>, custom: Vec<Arc<dyn Assault>>) -> Self {
        Self {
            request,
            runtime: Vec::new(),
            custom,
        }
    }

    /// Adds a single behavior to the partition its scope names.
    pub fn register(&mut self, assault: Arc<dyn Assault>) {
        match assault.scope() {
            AssaultScope::Request => self.request.push(assault),
            AssaultScope::Runtime => self.runtime.push(assault),
            AssaultScope::Custom => self.custom.push(assault),
        }
    }

    /// Request-scoped behaviors, in registration order.
    #[must_use]
    pub fn request(&self) -> &[Arc<dyn Assault>] {
        &self.request
    }

    /// Runtime-scoped behaviors. Registered for completeness; the
    /// per-request decision path never fires these.
    #[must_use]
    pub fn runtime(&self) -> &[Arc<dyn Assault>] {
        &self.runtime
    }

    /// Custom-scoped behaviors, in registration order.
    #[must_use]
    pub fn custom(&self) -> &[Arc<dyn Assault>] {
        &self.custom
    }

    /// Total number of registered behaviors across all partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.request.len() + self.runtime.len() + self.custom.len()
    }

    /// Whether no behaviors are registered at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for AssaultRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssaultRegistry")
            .field("request", &self.request.len())
            .field("runtime", &self.runtime.len())
            .field("custom", &self.custom.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
