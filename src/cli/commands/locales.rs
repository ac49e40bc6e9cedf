use anyhow::Result;

use super::CommandContext;
use crate::cli::{args::LocalesCommand, exit_status::ExitStatus, report::print_locales};

pub fn locales(cmd: LocalesCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    print_locales(
        &ctx.store.available_locales(),
        &ctx.store.default_locale(),
    );
    Ok(ExitStatus::Success)
}
