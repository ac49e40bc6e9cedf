//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Initialize the configuration file
//! - `locales`: List the locales found in the messages directory
//! - `t`: Translate a key in a selected locale
//! - `keys`: List every key of a locale with its placeholders

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Locales(cmd)) => cmd.common.verbose,
            Some(Command::T(cmd)) => cmd.common.verbose,
            Some(Command::Keys(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Default locale (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the locale for a lookup is chosen.
#[derive(Debug, Clone, Args)]
pub struct LocaleArgs {
    /// Locale to use; unknown locales fall back to the default
    #[arg(short, long, env = "LANGCELL_LANG")]
    pub lang: Option<String>,

    /// Raw query string to read the `lang` parameter from, e.g. "?lang=en"
    #[arg(long, conflicts_with = "lang")]
    pub query: Option<String>,
}

#[derive(Debug, Args)]
pub struct LocalesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Dotted key path, e.g. "nav.home"
    pub key: String,

    /// Substitution parameter as name=value; repeatable
    #[arg(short, long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Shorthand for --param count=N
    #[arg(short, long)]
    pub count: Option<i64>,

    #[command(flatten)]
    pub locale: LocaleArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    #[command(flatten)]
    pub locale: LocaleArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .langcellrc.json configuration file
    Init,
    /// List available locales
    Locales(LocalesCommand),
    /// Translate a key
    T(TranslateCommand),
    /// List the keys of a locale and the placeholders they expect
    Keys(KeysCommand),
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got \"{}\"", raw)),
    }
}
