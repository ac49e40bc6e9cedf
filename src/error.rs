//! Error types shared by the store, its sources and the lookup path.

use std::path::PathBuf;

use thiserror::Error;

/// Malformed store configuration. Raised only at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("default locale is required")]
    MissingDefaultLocale,
    #[error("sources are required")]
    EmptySources,
    #[error("default locale \"{0}\" not found in sources")]
    UnknownDefaultLocale(String),
}

/// A lazy source failed to produce locale data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse locale data from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0}")]
    Custom(String),
}

/// Why a translation fell back to its key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("locale \"{0}\" not loaded")]
    LocaleNotLoaded(String),
    #[error("key \"{key}\" not found in locale {locale}")]
    KeyNotFound { key: String, locale: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigurationError::UnknownDefaultLocale("fr".into()).to_string(),
            "default locale \"fr\" not found in sources"
        );
        assert_eq!(
            LookupError::KeyNotFound {
                key: "a.b".into(),
                locale: "en".into()
            }
            .to_string(),
            "key \"a.b\" not found in locale en"
        );
        assert_eq!(
            LookupError::LocaleNotLoaded("ja".into()).to_string(),
            "locale \"ja\" not loaded"
        );
    }
}
