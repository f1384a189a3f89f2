//! check_estimation - judge nondeterministic estimates against reference intervals.

use checkest_cli::commands;
use checkest_cli::{Cli, Settings};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> checkest_cli::Result<()> {
    let settings = Settings::resolve(cli)?;
    let mut stdout = std::io::stdout().lock();
    commands::execute_check(cli, &settings, &mut stdout)?;
    Ok(())
}

/// Initialize tracing (log to stderr); `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
