use anyhow::Result;

use super::CommandContext;
use crate::cli::{args::TranslateCommand, exit_status::ExitStatus, report::print_failure};
use crate::params::{COUNT_PARAM, Params};

/// Resolve one key. Fallbacks still print the key, but exit with failure.
pub async fn translate(cmd: TranslateCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    ctx.switch_to_requested(&cmd.locale).await?;

    let mut params: Params = cmd.params.into_iter().collect();
    if let Some(count) = cmd.count {
        params.set(COUNT_PARAM, count);
    }
    let params = (!params.is_empty()).then_some(params);

    match ctx.store.try_translate(&cmd.key, params.as_ref()) {
        Ok(text) => {
            println!("{}", text);
            Ok(ExitStatus::Success)
        }
        Err(err) => {
            print_failure(&err.to_string());
            println!("{}", cmd.key);
            Ok(ExitStatus::Failure)
        }
    }
}
