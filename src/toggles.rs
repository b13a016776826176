//! Toggle resolution.
//!
//! Each assault can be suppressed independently of randomness through a
//! named boolean toggle. A toggle system that declares no opinion about
//! a name means "not suppressed", so the default resolver enables
//! everything.

use dashmap::DashMap;
use indexmap::IndexMap;

// ============================================================================
// Resolver
// ============================================================================

/// Answers whether a named toggle is currently enabled.
///
/// Side-effect free; consulted once per candidate assault per
/// invocation.
pub trait ChaosToggles: Send + Sync {
    /// Returns the toggle state, defaulting to `true` (not suppressed)
    /// when the toggle system has no entry for `toggle_name`.
    fn is_enabled(&self, toggle_name: &str) -> bool;
}

/// Resolver with no opinions: every toggle is enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultToggles;

impl ChaosToggles for DefaultToggles {
    fn is_enabled(&self, _toggle_name: &str) -> bool {
        true
    }
}

/// Concurrent in-memory toggle set, mutable at runtime.
///
/// Backs an operational override surface: flipping a toggle takes
/// effect on the next invocation without touching the engine.
#[derive(Debug, Default)]
pub struct InMemoryToggles {
    states: DashMap<String, bool>,
}

impl InMemoryToggles {
    /// Creates an empty toggle set (everything enabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the set from configured initial states.
    #[must_use]
    pub fn from_config(initial: &IndexMap<String, bool>) -> Self {
        let toggles = Self::new();
        for (name, enabled) in initial {
            toggles.set(name.clone(), *enabled);
        }
        toggles
    }

    /// Sets an explicit state for a toggle.
    pub fn set(&self, toggle_name: String, enabled: bool) {
        self.states.insert(toggle_name, enabled);
    }

    /// Removes any explicit state, reverting the toggle to enabled.
    pub fn clear(&self, toggle_name: &str) {
        self.states.remove(toggle_name);
    }
}

impl ChaosToggles for InMemoryToggles {
    fn is_enabled(&self, toggle_name: &str) -> bool {
        self.states.get(toggle_name).is_none_or(|state| *state)
    }
}

// ============================================================================
// Name mapping
// ============================================================================

/// Derives the canonical toggle name for an assault kind from a
/// configured prefix.
#[derive(Debug, Clone)]
pub struct ToggleNameMapper {
    prefix: String,
}

impl ToggleNameMapper {
    /// Creates a mapper with the given prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Maps an assault kind to its canonical toggle name,
    /// `"<prefix>.<kind>"`.
    #[must_use]
    pub fn toggle_name(&self, kind: &str) -> String {
        format!("{}.{}", self.prefix, kind)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toggles_enable_everything() {
        assert!(DefaultToggles.is_enabled("havoc.assaults.latency"));
        assert!(DefaultToggles.is_enabled(""));
    }

    #[test]
    fn test_missing_entry_means_enabled() {
        let toggles = InMemoryToggles::new();
        assert!(toggles.is_enabled("havoc.assaults.latency"));
    }

    #[test]
    fn test_explicit_disable() {
        let toggles = InMemoryToggles::new();
        toggles.set("havoc.assaults.latency".to_string(), false);
        assert!(!toggles.is_enabled("havoc.assaults.latency"));
        assert!(toggles.is_enabled("havoc.assaults.exception"));
    }

    #[test]
    fn test_clear_reverts_to_enabled() {
        let toggles = InMemoryToggles::new();
        toggles.set("havoc.assaults.latency".to_string(), false);
        toggles.clear("havoc.assaults.latency");
        assert!(toggles.is_enabled("havoc.assaults.latency"));
    }

    #[test]
    fn test_seed_from_config() {
        let mut initial = IndexMap::new();
        initial.insert("havoc.assaults.exception".to_string(), false);
        initial.insert("havoc.assaults.latency".to_string(), true);
        let toggles = InMemoryToggles::from_config(&initial);
        assert!(!toggles.is_enabled("havoc.assaults.exception"));
        assert!(toggles.is_enabled("havoc.assaults.latency"));
    }

    #[test]
    fn test_name_mapper_joins_with_dot() {
        let mapper = ToggleNameMapper::new("havoc.assaults");
        assert_eq!(mapper.toggle_name("latency"), "havoc.assaults.latency");
    }

    #[test]
    fn test_name_mapper_custom_prefix() {
        let mapper = ToggleNameMapper::new("chaos.monkey");
        assert_eq!(mapper.toggle_name("exception"), "chaos.monkey.exception");
    }
}
