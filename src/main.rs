use std::process::ExitCode;

use clap::Parser;
use langcell::cli::{Arguments, ExitStatus, run_cli};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, prelude::*};

fn main() -> ExitCode {
    let args = Arguments::parse();

    // Diagnostics go to stderr so stdout only carries command output.
    let level = if args.verbose() {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(colored::control::SHOULD_COLORIZE.should_colorize())
                .with_filter(filter),
        )
        .init();

    match run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
