//! Slidekit CLI: simulate and verify panel slide transitions
//!
//! ## Usage
//!
//! ```bash
//! slidekit simulate --show-at 0 --hide-at 1.2   # Print the event log
//! slidekit check --config toast.yaml            # Verify lifecycle timing
//! slidekit config --direction from-left         # Print resolved YAML
//! ```

use clap::Parser;
use slidekit_cli::{handlers, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    config.color.apply();
    logging::init(&config);

    match cli.command {
        Commands::Simulate(args) => handlers::execute_simulate(&config, &args),
        Commands::Check(args) => handlers::execute_check(&config, &args),
        Commands::Config(args) => handlers::execute_config(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let color: ColorChoice = cli.color.into();
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(color)
        .with_json_logs(cli.log_json)
}
