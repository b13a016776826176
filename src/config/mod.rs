//! Configuration for the chaos engine.
//!
//! Types are deserialized from YAML, validated, and frozen behind an
//! `Arc<RwLock<_>>` so the engine observes reloads on the next invocation.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{SharedConfig, load_config, load_config_str};
pub use schema::{AssaultProperties, ChaosConfig, ChaosProperties};
pub use validation::{ValidationResult, Validator};
