//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod simulate;
pub mod validate;

use crate::cli::args::{Cli, Commands};
use crate::error::HavocError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), HavocError> {
    match cli.command {
        Commands::Validate(args) => validate::run(&args),
        Commands::Simulate(args) => simulate::run(&args),
    }
}
