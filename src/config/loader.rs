//! Configuration loader
//!
//! Loading pipeline:
//! 1. Environment variable expansion (pre-parse, on raw text)
//! 2. YAML parsing
//! 3. Deserialization to typed config
//! 4. Validation
//! 5. Freeze behind `Arc<RwLock<_>>`
//!
//! The engine takes a read lock per invocation, so swapping the value
//! under the write lock is all a reload mechanism has to do.

use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::config::schema::ChaosConfig;
use crate::config::validation::Validator;
use crate::error::ConfigError;

/// Shared, reloadable configuration handle.
///
/// Read-mostly: the engine takes short read locks, the (external)
/// reload mechanism takes the write lock.
pub type SharedConfig = Arc<RwLock<ChaosConfig>>;

/// Loads, validates, and freezes a configuration file.
///
/// Warnings are logged; errors abort the load.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] when the path does not exist,
/// [`ConfigError::ParseError`] for malformed YAML, and
/// [`ConfigError::ValidationError`] when semantic validation fails.
pub fn load_config(path: &Path) -> Result<SharedConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
        path: path.to_path_buf(),
    })?;

    let config = parse_and_validate(&raw, &path.display().to_string())?;
    Ok(Arc::new(RwLock::new(config)))
}

/// Loads a configuration from an in-memory YAML string.
///
/// # Errors
///
/// Same failure modes as [`load_config`], minus the missing-file case.
pub fn load_config_str(raw: &str) -> Result<SharedConfig, ConfigError> {
    let config = parse_and_validate(raw, "<inline>")?;
    Ok(Arc::new(RwLock::new(config)))
}

fn parse_and_validate(raw: &str, origin: &str) -> Result<ChaosConfig, ConfigError> {
    let expanded = expand_env_vars(raw, origin)?;

    let config: ChaosConfig =
        serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
            path: origin.into(),
            message: e.to_string(),
        })?;

    let result = Validator::new().validate(&config);
    for warning in &result.warnings {
        tracing::warn!(origin, %warning, "configuration warning");
    }
    if result.has_errors() {
        return Err(ConfigError::ValidationError {
            path: origin.to_string(),
            errors: result.errors,
        });
    }

    Ok(config)
}

/// Expands `${VAR}` references in the raw configuration text.
///
/// `${VAR:-default}` substitutes `default` when the variable is unset.
/// A plain `${VAR}` that is unset is an error, so configurations cannot
/// silently fall back to empty strings.
fn expand_env_vars(raw: &str, origin: &str) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            // Unterminated reference, keep literally and let the parser complain
            out.push_str(&rest[start..]);
            return Ok(out);
        };
        let reference = &after[..end];

        let (var, default) = reference
            .split_once(":-")
            .map_or((reference, None), |(v, d)| (v, Some(d)));

        match std::env::var(var) {
            Ok(value) => out.push_str(&value),
            Err(_) => match default {
                Some(d) => out.push_str(d),
                None => {
                    return Err(ConfigError::EnvVarNotSet {
                        var: var.to_string(),
                        location: origin.to_string(),
                    });
                }
            },
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================
