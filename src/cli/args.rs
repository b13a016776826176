//! CLI argument definitions
//!
//! All Clap derive structs for `Havoc` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Chaos fault-injection decision engine.
#[derive(Parser, Debug)]
#[command(name = "havoc", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "HAVOC_COLOR")]
    pub color: ColorChoice,
}

/// Color output preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from the terminal and `NO_COLOR`.
    Auto,
    /// Force ANSI colors on.
    Always,
    /// Force ANSI colors off.
    Never,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a configuration file without running anything.
    Validate(ValidateArgs),

    /// Evaluate synthetic invocations against probe assaults.
    Simulate(SimulateArgs),
}

// ============================================================================
// Validate
// ============================================================================

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to YAML configuration file.
    #[arg(short, long, env = "HAVOC_CONFIG")]
    pub config: PathBuf,
}

// ============================================================================
// Simulate
// ============================================================================

/// Arguments for `simulate`.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Path to YAML configuration file.
    #[arg(short, long, env = "HAVOC_CONFIG")]
    pub config: PathBuf,

    /// Number of synthetic invocations to evaluate.
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub invocations: u64,

    /// RNG seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Target names to cycle through, comma-separated.
    ///
    /// Invocations alternate over these; without it every invocation
    /// has no target and only request-scoped assaults are considered.
    #[arg(long, value_delimiter = ',')]
    pub targets: Vec<String>,

    /// Write a JSONL event log of fired assaults to this file.
    #[arg(long)]
    pub events: Option<PathBuf>,

    /// Expose Prometheus metrics on 127.0.0.1:<port> during the run.
    #[arg(long)]
    pub metrics_port: Option<u16>,
}

// ============================================================================
// Tests
// ============================================================================
