//! Langcell - a small locale store for client-side translations
//!
//! A [`LocaleStore`](store::LocaleStore) holds the current locale, loads
//! locale data on demand and resolves dotted keys to translated strings
//! with `{placeholder}` substitution and `_plural` key selection. Lookups
//! never fail: a missing translation logs a warning and yields the key.
//!
//! ## Module Structure
//!
//! - `store`: The locale store and its sources
//! - `data`: Translation tables and dotted-path lookup
//! - `params`: Parameters and placeholder substitution
//! - `error`: Error types
//! - `messages`: Building a store from a messages directory
//! - `selection`: Initial locale selection from a request parameter
//! - `config`: Configuration file loading and parsing
//! - `cli`: Command-line interface layer

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod messages;
pub mod params;
pub mod selection;
pub mod store;
