use anyhow::Result;

use crate::cli::args::Command;
use crate::cli::commands::{init::init, keys::keys, locales::locales, translate::translate};

pub mod args;
mod commands;
mod exit_status;
mod report;

pub use args::Arguments;
pub use exit_status::ExitStatus;

/// Main entry point for the langcell CLI.
///
/// Dispatches to the command handler; lookup commands run on a
/// current-thread tokio runtime since locale loading is async.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Init) => init(),
        Some(Command::Locales(cmd)) => locales(cmd),
        Some(Command::T(cmd)) => block_on(translate(cmd)),
        Some(Command::Keys(cmd)) => block_on(keys(cmd)),
        None => Ok(ExitStatus::Success),
    }
}

fn block_on<F: Future<Output = Result<ExitStatus>>>(future: F) -> Result<ExitStatus> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(future)
}
