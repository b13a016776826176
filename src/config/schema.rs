//! Configuration schema types
//!
//! This module defines the configuration surface of the chaos engine.
//! These types are deserialized from YAML configuration files and read
//! by the engine on every invocation, so a reload is observed immediately.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration for a `Havoc` engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ChaosConfig {
    /// Global engine switches.
    #[serde(default)]
    pub chaos: ChaosProperties,

    /// Assault trigger and watch configuration.
    #[serde(default)]
    pub assaults: AssaultProperties,

    /// Initial toggle states, keyed by canonical toggle name.
    ///
    /// Toggles absent from this map are treated as enabled.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub toggles: IndexMap<String, bool>,
}

// ============================================================================
// Engine Switches
// ============================================================================

/// Global enablement and toggle naming.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ChaosProperties {
    /// Master switch. When `false` the engine is a no-op for every call.
    #[serde(default)]
    pub enabled: bool,

    /// Prefix used when mapping an assault kind to its toggle name.
    #[serde(default = "default_toggle_prefix")]
    pub toggle_prefix: String,
}

impl Default for ChaosProperties {
    fn default() -> Self {
        Self {
            enabled: false,
            toggle_prefix: default_toggle_prefix(),
        }
    }
}

fn default_toggle_prefix() -> String {
    "havoc.assaults".to_string()
}

// ============================================================================
// Assault Properties
// ============================================================================

/// Trigger frequency and watched-service configuration.
///
/// `level` is an inverse-probability / deterministic-period knob: an
/// invocation is attacked with probability `1/level` in random mode, or
/// exactly every `level`-th evaluation in deterministic mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct AssaultProperties {
    /// Attack frequency knob (>= 1, lower = more aggressive).
    #[serde(default = "default_level")]
    pub level: u32,

    /// Use the deterministic counter instead of a random draw.
    #[serde(default)]
    pub deterministic: bool,

    /// Service/package prefixes scoping custom assaults.
    ///
    /// An empty list watches everything.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub watched_custom_services: Vec<String>,

    /// Whether the watched-services filter applies at all.
    #[serde(default)]
    pub watched_custom_services_active: bool,
}

impl Default for AssaultProperties {
    fn default() -> Self {
        Self {
            level: default_level(),
            deterministic: false,
            watched_custom_services: Vec::new(),
            watched_custom_services_active: false,
        }
    }
}

const fn default_level() -> u32 {
    1
}

// ============================================================================
// Tests
// ============================================================================
