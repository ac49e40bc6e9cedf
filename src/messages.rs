//! Building a store from a directory of `<locale>.json` files.
//!
//! The default locale's file is read up front; every other file becomes a
//! lazy source that is read the first time its locale is requested.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use crate::data::LocaleData;
use crate::store::{LocaleStore, Module, Source};

/// A messages file and the locale it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    pub locale: String,
    pub path: PathBuf,
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/messages/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// List the `.json` files directly inside `messages_dir`, sorted by locale.
pub fn scan_locale_files(messages_dir: impl AsRef<Path>) -> Result<Vec<LocaleFile>> {
    let messages_dir = messages_dir.as_ref();

    if !messages_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .langcellrc.json 'messagesRoot' setting.",
            messages_dir.display()
        );
    }

    if !messages_dir.is_dir() {
        bail!("'{}' is not a directory.", messages_dir.display());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(messages_dir)? {
        let path = entry?.path();

        if path.is_file()
            && path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = extract_locale(&path)
        {
            files.push(LocaleFile { locale, path });
        }
    }
    files.sort_by(|a, b| a.locale.cmp(&b.locale));

    Ok(files)
}

/// Read one messages file. The whole file is the locale's table.
pub fn read_locale_data(path: &Path) -> Result<LocaleData> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;
    let module = Module::from_file_str(&content, path.display().to_string())
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;
    Ok(module.into_data())
}

/// Create a store whose locales are the files in `messages_dir`.
pub fn load_store(messages_dir: impl AsRef<Path>, default_locale: &str) -> Result<LocaleStore> {
    let messages_dir = messages_dir.as_ref();
    let files = scan_locale_files(messages_dir)?;

    let Some(default_file) = files.iter().find(|file| file.locale == default_locale) else {
        bail!(
            "No messages file for default locale \"{}\" in '{}'.",
            default_locale,
            messages_dir.display()
        );
    };
    let default_data = read_locale_data(&default_file.path)?;

    let sources = files.into_iter().map(|file| {
        let source = if file.locale == default_locale {
            Source::inline(default_data.clone())
        } else {
            Source::json_file(file.path)
        };
        (file.locale, source)
    });

    let store = LocaleStore::new(default_locale, default_data.clone(), sources)?;
    Ok(store)
}
