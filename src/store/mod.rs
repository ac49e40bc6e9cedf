//! The locale store: current-locale selection, lazy loading and key
//! resolution over one shared state.
//!
//! # Invariants
//!
//! 1. **Default is preloaded**: the default locale's data is cached at
//!    construction and never reloaded.
//!
//! 2. **Load before switch**: the current-locale cell is written only
//!    after the target locale's load has finished. The one exception is a
//!    non-default locale with an inline source, which is switched to
//!    without ever being cached.
//!
//! 3. **Fixed locale set**: identifiers are the source keys given at
//!    construction; no operation adds new ones.
//!
//! # Failure Modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Bad configuration | `new` returns [`ConfigurationError`] |
//! | Unknown locale requested | Warning, state unchanged |
//! | Producer fails | [`LoadError`] returned, state unchanged |
//! | Current locale not cached | Warning, key returned |
//! | Missing key | Warning, key returned |

use std::{
    borrow::Cow,
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::data::LocaleData;
use crate::error::{ConfigurationError, LoadError, LookupError};
use crate::params::{Params, interpolate, placeholders};

pub mod source;


pub use source::{Module, Producer, Source};

/// Suffix selecting the plural variant of a key.
pub const PLURAL_SUFFIX: &str = "_plural";

/// Outcome of a locale switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleChange {
    /// No locale was given.
    Ignored,
    /// The locale is not configured; nothing changed.
    Unknown,
    /// The locale is now current.
    Switched,
}

/// Holds the current locale and answers translation queries.
#[derive(Debug)]
pub struct LocaleStore {
    sources: Vec<(String, Source)>,
    cache: Mutex<HashMap<String, Arc<LocaleData>>>,
    current: watch::Sender<String>,
    default: watch::Sender<String>,
}

impl LocaleStore {
    /// Create a store.
    ///
    /// `sources` lists every supported locale in order; it must contain
    /// `default_locale`. The default locale's data comes from
    /// `default_source` and is cached immediately.
    pub fn new<I, S>(
        default_locale: impl Into<String>,
        default_source: LocaleData,
        sources: I,
    ) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (S, Source)>,
        S: Into<String>,
    {
        let default_locale = default_locale.into();
        if default_locale.is_empty() {
            return Err(ConfigurationError::MissingDefaultLocale);
        }

        let mut entries: Vec<(String, Source)> = Vec::new();
        for (id, source) in sources {
            let id = id.into();
            match entries.iter_mut().find(|(existing, _)| *existing == id) {
                Some((_, slot)) => *slot = source,
                None => entries.push((id, source)),
            }
        }
        if entries.is_empty() {
            return Err(ConfigurationError::EmptySources);
        }
        if !entries.iter().any(|(id, _)| *id == default_locale) {
            return Err(ConfigurationError::UnknownDefaultLocale(default_locale));
        }

        let cache = HashMap::from([(default_locale.clone(), Arc::new(default_source))]);
        let (current, _) = watch::channel(default_locale.clone());
        let (default, _) = watch::channel(default_locale);

        Ok(Self {
            sources: entries,
            cache: Mutex::new(cache),
            current,
            default,
        })
    }

    /// Start a [`LocaleStoreBuilder`].
    pub fn builder(
        default_locale: impl Into<String>,
        default_source: LocaleData,
    ) -> LocaleStoreBuilder {
        LocaleStoreBuilder {
            default_locale: default_locale.into(),
            default_source,
            sources: Vec::new(),
        }
    }

    pub fn current_locale(&self) -> String {
        self.current.borrow().clone()
    }

    pub fn default_locale(&self) -> String {
        self.default.borrow().clone()
    }

    /// Configured locales in the order they were given.
    pub fn available_locales(&self) -> Vec<&str> {
        self.sources.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn is_available(&self, id: &str) -> bool {
        self.source(id).is_some()
    }

    /// Observe the current locale. The receiver sees every switch.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.current.subscribe()
    }

    /// Observe the default locale.
    pub fn subscribe_default(&self) -> watch::Receiver<String> {
        self.default.subscribe()
    }

    /// Cached data for `id`, if it has been loaded.
    pub fn loaded(&self, id: &str) -> Option<Arc<LocaleData>> {
        self.cache().get(id).cloned()
    }

    /// Switch the current locale, loading its data first.
    ///
    /// `None` is ignored. An unconfigured locale logs a warning and
    /// changes nothing.
    pub async fn set_locale<'a>(
        &self,
        id: impl Into<Option<&'a str>>,
    ) -> Result<LocaleChange, LoadError> {
        let Some(id) = id.into() else {
            return Ok(LocaleChange::Ignored);
        };
        if !self.is_available(id) {
            warn!("locale \"{}\" not found", id);
            return Ok(LocaleChange::Unknown);
        }

        self.load_locale(id).await?;
        self.current.send_replace(id.to_string());
        Ok(LocaleChange::Switched)
    }

    /// Switch back to the default locale.
    pub async fn reset_locale(&self) -> Result<(), LoadError> {
        let default = self.default_locale();
        self.load_locale(&default).await?;
        self.current.send_replace(default);
        Ok(())
    }

    /// Switch to `id` and make it the target of later
    /// [`reset_locale`](Self::reset_locale) calls.
    pub async fn set_default_locale<'a>(
        &self,
        id: impl Into<Option<&'a str>>,
    ) -> Result<LocaleChange, LoadError> {
        let Some(id) = id.into() else {
            return Ok(LocaleChange::Ignored);
        };
        if !self.is_available(id) {
            warn!("locale \"{}\" not found", id);
            return Ok(LocaleChange::Unknown);
        }

        self.load_locale(id).await?;
        self.current.send_replace(id.to_string());
        self.default.send_replace(id.to_string());
        Ok(LocaleChange::Switched)
    }

    /// Resolve `key` in the current locale.
    ///
    /// Never fails: when the locale is not loaded or the key is missing,
    /// a warning is logged and `key` itself is returned.
    pub fn translate(&self, key: &str, params: Option<&Params>) -> String {
        self.try_translate(key, params).unwrap_or_else(|err| {
            warn!("{}", err);
            key.to_string()
        })
    }

    /// Like [`translate`](Self::translate), but reports why a lookup fell
    /// through instead of logging.
    pub fn try_translate(&self, key: &str, params: Option<&Params>) -> Result<String, LookupError> {
        let locale = self.current_locale();
        let Some(data) = self.loaded(&locale) else {
            return Err(LookupError::LocaleNotLoaded(locale));
        };

        let mut actual_key = Cow::Borrowed(key);
        if params.and_then(Params::count).is_some_and(|count| count > 1.0) {
            let plural_key = format!("{}{}", key, PLURAL_SUFFIX);
            if data.lookup(&plural_key).is_some() {
                actual_key = Cow::Owned(plural_key);
            }
        }

        let Some(text) = data.lookup(&actual_key) else {
            return Err(LookupError::KeyNotFound {
                key: actual_key.into_owned(),
                locale,
            });
        };

        Ok(match params {
            Some(params) => interpolate(text, params),
            None => text.to_string(),
        })
    }

    /// Whether `key` resolves in the current locale.
    pub fn has_key(&self, key: &str) -> bool {
        self.loaded(&self.current_locale())
            .is_some_and(|data| data.lookup(key).is_some())
    }

    /// Placeholder names `key` expects in the current locale.
    pub fn placeholders(&self, key: &str) -> Option<Vec<String>> {
        let data = self.loaded(&self.current_locale())?;
        data.lookup(key).map(placeholders)
    }

    async fn load_locale(&self, id: &str) -> Result<(), LoadError> {
        if self.cache().contains_key(id) {
            return Ok(());
        }
        if *self.default.borrow() == id {
            return Ok(());
        }
        // Inline sources are treated as loaded without entering the cache.
        let Some(Source::Lazy(producer)) = self.source(id) else {
            return Ok(());
        };

        debug!(locale = id, "loading locale data");
        let data = producer.produce().await?.into_data();
        self.cache().insert(id.to_string(), Arc::new(data));
        debug!(locale = id, "locale data loaded");
        Ok(())
    }

    fn source(&self, id: &str) -> Option<&Source> {
        self.sources
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, source)| source)
    }

    fn cache(&self) -> MutexGuard<'_, HashMap<String, Arc<LocaleData>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Incremental construction of a [`LocaleStore`].
///
/// ```
/// use langcell::data::LocaleData;
/// use langcell::error::LoadError;
/// use langcell::store::{LocaleStore, Module, Source};
///
/// let id = LocaleData::new().with("greeting", "Halo");
/// let store = LocaleStore::builder("id", id.clone())
///     .source("id", Source::inline(id))
///     .source(
///         "en",
///         Source::lazy(|| async {
///             Ok::<_, LoadError>(Module::from(LocaleData::new().with("greeting", "Hi")))
///         }),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(store.available_locales(), vec!["id", "en"]);
/// assert_eq!(store.translate("greeting", None), "Halo");
/// ```
#[derive(Debug)]
pub struct LocaleStoreBuilder {
    default_locale: String,
    default_source: LocaleData,
    sources: Vec<(String, Source)>,
}

impl LocaleStoreBuilder {
    #[must_use]
    pub fn source(mut self, id: impl Into<String>, source: impl Into<Source>) -> Self {
        self.sources.push((id.into(), source.into()));
        self
    }

    pub fn build(self) -> Result<LocaleStore, ConfigurationError> {
        LocaleStore::new(self.default_locale, self.default_source, self.sources)
    }
}
