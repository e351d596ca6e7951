//! Internationalization (i18n) building blocks used by the locale loader.
//!
//! # Architecture
//!
//! - `locale`: `LocaleCode` and the fallback locale constant
//! - `catalog`: `MessageCatalog`, the parsed JSON message catalog
//! - `engine`: `TranslationEngine` trait and the in-memory `Translator`
//! - `validator`: catalog completeness checks against a reference catalog
//! - `metrics`: per-loader cache and fetch counters
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_loader::i18n::{LocaleCode, MessageCatalog, TranslationEngine, Translator};
//!
//! let translator = Translator::new();
//! let fr = LocaleCode::new("fr").unwrap();
//! translator.register_catalog(&fr, MessageCatalog::from_json_str(r#"{"hi": "Salut"}"#)?);
//! translator.set_active_locale(&fr);
//! assert_eq!(translator.translate("hi"), "Salut");
//! ```

mod catalog;
mod engine;
mod locale;
mod metrics;
mod validator;

pub use catalog::{CatalogEntry, MessageCatalog};
pub use engine::{TranslationEngine, Translator};
pub use locale::{LocaleCode, FALLBACK_LOCALE};
pub use metrics::{LoaderMetrics, LoaderMetricsReport};
pub use validator::{CatalogValidator, ValidationReport};
