//! Output formatting for CLI commands.
//!
//! Every printer has a `_to` variant taking a writer, used by the tests.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// A key with the placeholders its text uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRow {
    pub key: String,
    pub placeholders: Vec<String>,
}

/// Print locales one per line, marking the default.
pub fn print_locales(locales: &[&str], default_locale: &str) {
    print_locales_to(locales, default_locale, &mut io::stdout().lock());
}

pub fn print_locales_to<W: Write>(locales: &[&str], default_locale: &str, writer: &mut W) {
    for locale in locales {
        if *locale == default_locale {
            let _ = writeln!(writer, "{} {}", locale.green().bold(), "(default)".dimmed());
        } else {
            let _ = writeln!(writer, "{}", locale);
        }
    }
}

/// Print keys in an aligned column followed by their placeholders.
pub fn print_keys(rows: &[KeyRow]) {
    print_keys_to(rows, &mut io::stdout().lock());
}

pub fn print_keys_to<W: Write>(rows: &[KeyRow], writer: &mut W) {
    let width = rows
        .iter()
        .map(|row| UnicodeWidthStr::width(row.key.as_str()))
        .max()
        .unwrap_or(0);

    for row in rows {
        if row.placeholders.is_empty() {
            let _ = writeln!(writer, "{}", row.key);
            continue;
        }
        let padding = width - UnicodeWidthStr::width(row.key.as_str());
        let _ = writeln!(
            writer,
            "{}{}  {}",
            row.key,
            " ".repeat(padding),
            row.placeholders.join(", ").cyan()
        );
    }
}

/// Print a fallback reason to stderr.
pub fn print_failure(message: &str) {
    eprintln!("{} {}", FAILURE_MARK.red(), message.red());
}

/// Print a success message to stdout.
pub fn print_success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green(), message.green());
}
