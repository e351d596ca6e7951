//! Translation engine: holds registered catalogs and the active locale.
//!
//! The loader only needs the two operations of [`TranslationEngine`]. The
//! bundled [`Translator`] is a plain in-memory implementation that also
//! resolves keys, falling back to the fallback locale and then to the key
//! itself when a message is missing.

use crate::i18n::{LocaleCode, MessageCatalog};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Operations the loader drives on a translation engine.
///
/// Both operations are idempotent. Registering a catalog overwrites any
/// catalog previously registered for the same code.
pub trait TranslationEngine: Send + Sync {
    fn set_active_locale(&self, code: &LocaleCode);

    fn register_catalog(&self, code: &LocaleCode, catalog: MessageCatalog);
}

#[derive(Debug)]
struct TranslatorState {
    active: LocaleCode,
    catalogs: HashMap<LocaleCode, MessageCatalog>,
}

/// In-memory translation engine.
#[derive(Debug)]
pub struct Translator {
    fallback: LocaleCode,
    state: RwLock<TranslatorState>,
}

impl Translator {
    /// Create a translator whose active and fallback locale are both "en".
    pub fn new() -> Self {
        Self::with_fallback(LocaleCode::fallback())
    }

    pub fn with_fallback(fallback: LocaleCode) -> Self {
        Self {
            state: RwLock::new(TranslatorState {
                active: fallback.clone(),
                catalogs: HashMap::new(),
            }),
            fallback,
        }
    }

    /// The currently active locale.
    pub fn active_locale(&self) -> LocaleCode {
        self.read(|state| state.active.clone())
    }

    pub fn fallback_locale(&self) -> &LocaleCode {
        &self.fallback
    }

    /// Check whether a catalog is registered for `code`.
    pub fn has_catalog(&self, code: &LocaleCode) -> bool {
        self.read(|state| state.catalogs.contains_key(code))
    }

    /// A copy of the catalog registered for `code`, if any.
    pub fn catalog(&self, code: &LocaleCode) -> Option<MessageCatalog> {
        self.read(|state| state.catalogs.get(code).cloned())
    }

    /// Locales with a registered catalog, sorted.
    pub fn registered_locales(&self) -> Vec<LocaleCode> {
        let mut codes = self.read(|state| state.catalogs.keys().cloned().collect::<Vec<_>>());
        codes.sort();
        codes
    }

    /// Look up `key` in the active locale, then in the fallback locale.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.read(|state| {
            let active = state
                .catalogs
                .get(&state.active)
                .and_then(|catalog| catalog.message(key));
            if let Some(text) = active {
                return Some(text.to_string());
            }

            let fallback = state
                .catalogs
                .get(&self.fallback)
                .and_then(|catalog| catalog.message(key))?;
            debug!(
                "Key '{}' not found in locale '{}', using fallback '{}'",
                key, state.active, self.fallback
            );
            Some(fallback.to_string())
        })
    }

    /// Translate `key`, returning the key itself when no catalog has it.
    pub fn translate(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }

    fn read<T>(&self, f: impl FnOnce(&TranslatorState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationEngine for Translator {
    fn set_active_locale(&self, code: &LocaleCode) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.active = code.clone();
    }

    fn register_catalog(&self, code: &LocaleCode, catalog: MessageCatalog) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.catalogs.insert(code.clone(), catalog);
    }
}
