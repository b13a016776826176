//! `havoc validate` — check a configuration file.

use crate::cli::args::ValidateArgs;
use crate::config::loader;
use crate::error::{ConfigError, HavocError};

/// Validates the configuration and prints any issues.
///
/// Warnings are printed but do not fail the command; errors are listed
/// and mapped to the configuration exit code.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the file is missing, malformed, or
/// semantically invalid.
pub fn run(args: &ValidateArgs) -> Result<(), HavocError> {
    match loader::load_config(&args.config) {
        Ok(_) => {
            println!("{}: OK", args.config.display());
            Ok(())
        }
        Err(ConfigError::ValidationError { path, errors }) => {
            eprintln!("{path}: {} validation error(s)", errors.len());
            for issue in &errors {
                eprintln!("  {issue}");
            }
            Err(ConfigError::ValidationError { path, errors }.into())
        }
        Err(other) => Err(other.into()),
    }
}
