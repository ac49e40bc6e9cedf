//! Where a locale's data comes from.

use std::{fmt, future::Future, path::PathBuf};

use futures_util::{FutureExt, future::BoxFuture};
use serde::Deserialize;

use crate::data::LocaleData;
use crate::error::LoadError;

/// What a producer yields: either a table or a `{ "default": table }`
/// container, the shape a module import produces.
///
/// When parsed, only an object whose sole key is `default` counts as a
/// container; a table that merely has a `default` entry stays bare.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawModule")]
pub enum Module {
    Wrapped { default: LocaleData },
    Bare(LocaleData),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ModuleContainer {
    default: LocaleData,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawModule {
    Wrapped(ModuleContainer),
    Bare(LocaleData),
}

impl From<RawModule> for Module {
    fn from(raw: RawModule) -> Self {
        match raw {
            RawModule::Wrapped(ModuleContainer { default }) => Module::Wrapped { default },
            RawModule::Bare(data) => Module::Bare(data),
        }
    }
}

impl Module {
    /// Parse a module from JSON text. `origin` names the text in errors.
    pub fn from_json_str(content: &str, origin: impl Into<String>) -> Result<Self, LoadError> {
        serde_json::from_str(content).map_err(|source| LoadError::Parse {
            origin: origin.into(),
            source,
        })
    }

    /// Wrap a whole messages file, the way a JSON module import does.
    pub fn from_file_str(content: &str, origin: impl Into<String>) -> Result<Self, LoadError> {
        let default = serde_json::from_str(content).map_err(|source| LoadError::Parse {
            origin: origin.into(),
            source,
        })?;
        Ok(Module::Wrapped { default })
    }

    pub fn into_data(self) -> LocaleData {
        match self {
            Module::Wrapped { default } => default,
            Module::Bare(data) => data,
        }
    }
}

impl From<LocaleData> for Module {
    fn from(data: LocaleData) -> Self {
        Module::Bare(data)
    }
}

/// Asynchronous zero-argument callable producing a locale's data.
pub struct Producer(Box<dyn Fn() -> BoxFuture<'static, Result<Module, LoadError>> + Send + Sync>);

impl Producer {
    pub fn new<F, Fut>(produce: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Module, LoadError>> + Send + 'static,
    {
        Self(Box::new(move || produce().boxed()))
    }

    pub(crate) fn produce(&self) -> BoxFuture<'static, Result<Module, LoadError>> {
        (self.0)()
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Producer(..)")
    }
}

/// A locale's source entry.
#[derive(Debug)]
pub enum Source {
    /// Data that is already materialized.
    Inline(LocaleData),
    /// Data fetched on first use.
    Lazy(Producer),
}

impl Source {
    pub fn inline(data: LocaleData) -> Self {
        Source::Inline(data)
    }

    pub fn lazy<F, Fut>(produce: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Module, LoadError>> + Send + 'static,
    {
        Source::Lazy(Producer::new(produce))
    }

    /// Lazily read and parse a JSON messages file.
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Source::lazy(move || {
            let path = path.clone();
            async move {
                let content = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| LoadError::Io {
                        path: path.clone(),
                        source,
                    })?;
                Module::from_file_str(&content, path.display().to_string())
            }
        })
    }
}

impl From<LocaleData> for Source {
    fn from(data: LocaleData) -> Self {
        Source::Inline(data)
    }
}
