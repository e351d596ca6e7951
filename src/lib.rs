//! Load JSON translation catalogs on demand and register them with a
//! translation engine.
//!
//! [`loader::LocaleLoader::load_locale`] resolves a locale (explicit code,
//! stored `LOCALE` preference, or `"en"`), fetches
//! `{base_url}/locales/{code}.json` the first time that locale is requested,
//! registers it with the engine and makes it active.

pub mod config;
pub mod error;
pub mod i18n;
pub mod loader;
pub mod preference;

pub use error::{FetchError, LoadError, PreferenceError};
pub use loader::LocaleLoader;
