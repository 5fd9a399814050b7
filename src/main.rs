//! Infragen: interactive generator for infrastructure artifacts.
//!
//! This is the main entry point for the `infragen` CLI. It parses arguments,
//! sets up logging, runs the generate flow, and maps errors to exit codes.

mod catalog;
mod cli;
mod client;
mod commands;
mod config;
mod console;
mod error;
mod exit_codes;
mod extras;
mod fs;
mod normalize;
mod prompt;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(&cli);

    match commands::dispatch(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// `-v` flags win over `RUST_LOG`; with neither, only warnings are logged.
fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level() {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}
