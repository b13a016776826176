//! Configuration validation
//!
//! Semantic validation for the chaos engine configuration. Validation
//! collects ALL issues (doesn't stop at first) to provide comprehensive
//! feedback, and is the single place where degenerate trigger settings
//! (`level` of zero) are rejected — the evaluator assumes a valid level.

use crate::config::schema::ChaosConfig;
use crate::error::{Severity, ValidationIssue};

/// Highest level the trigger can express; `100 / level` rounds to zero
/// above 100, so anything larger never fires in random mode.
pub const MAX_EFFECTIVE_LEVEL: u32 = 100;

// ============================================================================
// Public API
// ============================================================================

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Configuration validator.
///
/// Performs semantic validation on a [`ChaosConfig`].
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a configuration and returns the result.
    ///
    /// Collects all errors and warnings rather than stopping at the
    /// first issue.
    pub fn validate(&mut self, config: &ChaosConfig) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_chaos(config);
        self.validate_assaults(config);
        self.validate_toggles(config);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Sections
    // ========================================================================

    fn validate_chaos(&mut self, config: &ChaosConfig) {
        if config.chaos.toggle_prefix.is_empty() {
            self.add_error("chaos.toggle_prefix", "toggle prefix cannot be empty");
        }
    }

    fn validate_assaults(&mut self, config: &ChaosConfig) {
        let assaults = &config.assaults;

        if assaults.level < 1 {
            self.add_error("assaults.level", "level must be at least 1");
        } else if !assaults.deterministic && assaults.level > MAX_EFFECTIVE_LEVEL {
            self.add_warning(
                "assaults.level",
                "level above 100 never triggers in random mode",
            );
        }

        for (idx, entry) in assaults.watched_custom_services.iter().enumerate() {
            if entry.trim().is_empty() {
                self.add_error(
                    &format!("assaults.watched_custom_services[{idx}]"),
                    "watched service entry cannot be blank",
                );
            } else if entry.ends_with('.') {
                self.add_warning(
                    &format!("assaults.watched_custom_services[{idx}]"),
                    "trailing '.' never matches; prefixes are joined with '.' automatically",
                );
            }
        }

        if assaults.watched_custom_services_active && assaults.watched_custom_services.is_empty() {
            self.add_warning(
                "assaults.watched_custom_services",
                "watch filtering is active but the list is empty, so every target is watched",
            );
        }
    }

    fn validate_toggles(&mut self, config: &ChaosConfig) {
        for name in config.toggles.keys() {
            if name.trim().is_empty() {
                self.add_error("toggles", "toggle name cannot be blank");
            }
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{AssaultProperties, ChaosProperties};

    fn config_with_level(level: u32) -> ChaosConfig {
        ChaosConfig {
            assaults: AssaultProperties {
                level,
                ..AssaultProperties::default()
            },
            ..ChaosConfig::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let result = Validator::new().validate(&ChaosConfig::default());
        assert!(result.is_valid(), "unexpected errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_level_zero_rejected() {
        let result = Validator::new().validate(&config_with_level(0));
        assert!(result.has_errors());
        assert_eq!(result.errors[0].path, "assaults.level");
    }

    #[test]
    fn test_level_above_100_warns_in_random_mode() {
        let result = Validator::new().validate(&config_with_level(1000));
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].path, "assaults.level");
    }

    #[test]
    fn test_level_above_100_fine_in_deterministic_mode() {
        let mut config = config_with_level(1000);
        config.assaults.deterministic = true;
        let result = Validator::new().validate(&config);
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_blank_watched_service_rejected() {
        let mut config = ChaosConfig::default();
        config.assaults.watched_custom_services = vec!["  ".to_string()];
        let result = Validator::new().validate(&config);
        assert!(result.has_errors());
        assert!(result.errors[0].path.contains("watched_custom_services[0]"));
    }

    #[test]
    fn test_trailing_dot_warns() {
        let mut config = ChaosConfig::default();
        config.assaults.watched_custom_services = vec!["org.example.".to_string()];
        let result = Validator::new().validate(&config);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_active_filter_with_empty_list_warns() {
        let mut config = ChaosConfig::default();
        config.assaults.watched_custom_services_active = true;
        let result = Validator::new().validate(&config);
        assert!(result.is_valid());
        assert_eq!(
            result.warnings[0].path,
            "assaults.watched_custom_services"
        );
    }

    #[test]
    fn test_empty_toggle_prefix_rejected() {
        let config = ChaosConfig {
            chaos: ChaosProperties {
                enabled: false,
                toggle_prefix: String::new(),
            },
            ..ChaosConfig::default()
        };
        let result = Validator::new().validate(&config);
        assert!(result.has_errors());
    }

    #[test]
    fn test_all_issues_collected() {
        let mut config = config_with_level(0);
        config.chaos.toggle_prefix = String::new();
        config.assaults.watched_custom_services = vec![String::new()];
        let result = Validator::new().validate(&config);
        assert_eq!(result.errors.len(), 3);
    }
}
