use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tracing::{debug, warn};

use crate::{
    cli::args::{CommonArgs, LocaleArgs},
    config::load_config,
    messages::load_store,
    selection::{lang_from_query, select_initial_locale},
    store::LocaleStore,
};

/// Configuration and the store built from it, shared by the lookup commands.
pub struct CommandContext {
    pub messages_root: PathBuf,
    pub store: LocaleStore,
}

impl CommandContext {
    /// Load config from the working directory, apply command-line
    /// overrides and build the store.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let root_dir = std::env::current_dir().context("Failed to read working directory")?;
        let config_result = load_config(&root_dir)?;

        if !config_result.from_file {
            debug!("No .langcellrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(default_locale) = &args.default_locale {
            config.default_locale = default_locale.clone();
        }
        let messages_root = match &args.messages_root {
            Some(path) => path.clone(),
            None => root_dir.join(&config.messages_root),
        };
        config.validate()?;

        let store = load_store(&messages_root, &config.default_locale)?;
        debug!(
            messages_root = %messages_root.display(),
            locales = ?store.available_locales(),
            default = %config.default_locale,
            "store ready"
        );

        Ok(Self {
            messages_root,
            store,
        })
    }

    /// Pick the locale requested by `--lang` or `--query`, falling back to
    /// the default locale.
    pub fn requested_locale(&self, args: &LocaleArgs) -> String {
        let requested = args
            .lang
            .as_deref()
            .or_else(|| args.query.as_deref().and_then(lang_from_query));
        let default_locale = self.store.default_locale();
        let selected = select_initial_locale(
            requested,
            self.store.available_locales(),
            &default_locale,
        );

        if let Some(requested) = requested
            && requested != selected
        {
            warn!(
                "locale \"{}\" is not available, using \"{}\"",
                requested, selected
            );
        }
        selected
    }

    /// Switch the store to the requested locale.
    pub async fn switch_to_requested(&self, args: &LocaleArgs) -> Result<String> {
        let locale = self.requested_locale(args);
        self.store
            .set_locale(locale.as_str())
            .await
            .with_context(|| format!("Failed to load locale \"{}\"", locale))?;
        Ok(locale)
    }
}
