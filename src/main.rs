//! `Havoc` — chaos fault-injection decision engine

use clap::Parser;

use havoc::cli::args::Cli;
use havoc::cli::commands;
use havoc::error::ExitCode;
use havoc::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
