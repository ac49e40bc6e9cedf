use anyhow::{Result, bail};

use super::CommandContext;
use crate::cli::{
    args::KeysCommand,
    exit_status::ExitStatus,
    report::{KeyRow, print_keys},
};
use crate::params::placeholders;

pub async fn keys(cmd: KeysCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let locale = ctx.switch_to_requested(&cmd.locale).await?;

    let Some(data) = ctx.store.loaded(&locale) else {
        bail!(
            "Locale \"{}\" is not loaded from '{}'",
            locale,
            ctx.messages_root.display()
        );
    };

    let rows: Vec<KeyRow> = data
        .keys()
        .into_iter()
        .filter_map(|key| {
            let placeholders = placeholders(data.lookup(&key)?);
            Some(KeyRow { key, placeholders })
        })
        .collect();
    print_keys(&rows);

    Ok(ExitStatus::Success)
}
