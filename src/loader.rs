//! Locale loader: resolve a locale, make sure its catalog is registered,
//! and make it active.
//!
//! Catalogs are fetched from `{base_url}/locales/{code}.json` at most once per
//! locale. The code is appended as a single percent-encoded path segment, so
//! a code containing `/`, `#` or `?` still names a file under `locales/`. Each
//! locale for the lifetime of a loader. Concurrent requests for the same
//! locale that is not loaded yet are not coalesced; each one fetches and
//! registers the catalog, and the last registration wins.

use crate::config::Config;
use crate::error::{FetchError, LoadError};
use crate::i18n::{
    LoaderMetrics, LoaderMetricsReport, LocaleCode, MessageCatalog, TranslationEngine,
};
use crate::preference::{PreferenceStore, LOCALE_PREFERENCE_KEY};
use anyhow::Result;
use reqwest::Url;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Loads message catalogs on demand and switches the active locale of a
/// [`TranslationEngine`].
///
/// The loader remembers which locales it has loaded. Once a fetch succeeds,
/// later loads of that locale never touch the network; a failed fetch is
/// retried on the next load. The engine and the preference store are shared
/// with the rest of the application.
pub struct LocaleLoader {
    client: reqwest::Client,
    base_url: Url,
    engine: Arc<dyn TranslationEngine>,
    preferences: Arc<dyn PreferenceStore>,
    loaded: Mutex<HashSet<LocaleCode>>,
    metrics: LoaderMetrics,
}

impl LocaleLoader {
    /// Create a loader fetching catalogs from under `base_url`.
    pub fn new(
        client: reqwest::Client,
        base_url: Url,
        engine: Arc<dyn TranslationEngine>,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            client,
            base_url,
            engine,
            preferences,
            loaded: Mutex::new(HashSet::new()),
            metrics: LoaderMetrics::new(),
        }
    }

    /// Build a loader with an HTTP client and base URL taken from `config`.
    pub fn from_config(
        config: &Config,
        engine: Arc<dyn TranslationEngine>,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Result<Self> {
        Ok(Self::new(
            config.http_client()?,
            config.base_url()?,
            engine,
            preferences,
        ))
    }

    /// Determine the locale a request refers to.
    ///
    /// An explicit, non-empty code wins. Otherwise the stored `LOCALE`
    /// preference is used if it is a non-empty string; anything else (absent,
    /// an object, a number) resolves to the fallback locale. Codes are used
    /// as given, without trimming.
    pub fn resolve_locale(&self, requested: Option<&str>) -> LocaleCode {
        if let Some(code) = requested.and_then(LocaleCode::new) {
            return code;
        }

        match self.preferences.get(LOCALE_PREFERENCE_KEY) {
            Some(Value::String(stored)) => {
                LocaleCode::new(&stored).unwrap_or_else(LocaleCode::fallback)
            }
            Some(other) => {
                debug!(
                    "Ignoring non-string {} preference: {}",
                    LOCALE_PREFERENCE_KEY, other
                );
                LocaleCode::fallback()
            }
            None => LocaleCode::fallback(),
        }
    }

    /// URL of the catalog for `code`.
    pub fn catalog_url(&self, code: &LocaleCode) -> Result<Url, FetchError> {
        catalog_url(&self.base_url, code)
    }

    /// Load and activate a locale.
    ///
    /// If the resolved locale was loaded before, it is activated without a
    /// network request. Otherwise its catalog is fetched, registered and the
    /// locale is marked loaded and activated.
    ///
    /// # Errors
    /// Returns [`LoadError::CatalogFetchFailed`] if the request fails, the
    /// server answers with a non-2xx status, or the body is not a catalog. In
    /// that case neither the active locale nor the loaded set change.
    pub async fn load_locale(&self, requested: Option<&str>) -> Result<LocaleCode, LoadError> {
        let code = self.resolve_locale(requested);

        if self.is_loaded(&code) {
            debug!("Locale '{}' already loaded, activating", code);
            self.metrics.record_cache_hit();
            self.activate_locale(&code, None);
            return Ok(code);
        }

        self.metrics.record_cache_miss();
        self.metrics.record_fetch();
        let fetched = match self.catalog_url(&code) {
            Ok(url) => {
                debug!("Fetching catalog for '{}' from {}", code, url);
                fetch_catalog(&self.client, url.as_str())
                    .await
                    .map_err(|source| (url.to_string(), source))
            }
            Err(source) => Err((self.base_url.to_string(), source)),
        };

        let catalog = match fetched {
            Ok(catalog) => catalog,
            Err((url, source)) => {
                self.metrics.record_fetch_failure();
                return Err(LoadError::CatalogFetchFailed {
                    locale: code.to_string(),
                    url,
                    source,
                });
            }
        };

        info!(
            "Loaded catalog for '{}' ({} messages)",
            code,
            catalog.message_count()
        );
        self.activate_locale(&code, Some(catalog));
        Ok(code)
    }

    /// Make `code` the active locale.
    ///
    /// A non-empty `catalog` is registered for `code` first. The code is
    /// marked loaded whether or not a catalog was given.
    pub fn activate_locale(&self, code: &LocaleCode, catalog: Option<MessageCatalog>) {
        if let Some(catalog) = catalog.filter(|c| !c.is_empty()) {
            self.engine.register_catalog(code, catalog);
        }
        self.engine.set_active_locale(code);

        self.loaded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(code.clone());
    }

    /// Whether `code` has been loaded (or activated) by this loader.
    pub fn is_loaded(&self, code: &LocaleCode) -> bool {
        self.loaded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(code)
    }

    /// Locales loaded so far, sorted.
    pub fn loaded_locales(&self) -> Vec<LocaleCode> {
        let mut codes: Vec<LocaleCode> = self
            .loaded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect();
        codes.sort();
        codes
    }

    /// Snapshot of cache and fetch counters.
    pub fn metrics(&self) -> LoaderMetricsReport {
        self.metrics.report()
    }
}

/// URL of the catalog for `code` under `base_url`.
///
/// `{code}.json` is pushed as one path segment, percent-encoding any `/`,
/// `#`, `?` or `%` in the code. A trailing slash on the base is ignored.
pub fn catalog_url(base_url: &Url, code: &LocaleCode) -> Result<Url, FetchError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|()| FetchError::InvalidBaseUrl {
            url: base_url.to_string(),
        })?
        .pop_if_empty()
        .push("locales")
        .push(&format!("{}.json", code));
    Ok(url)
}

/// GET a catalog and parse it. Non-2xx responses are failures.
pub async fn fetch_catalog(
    client: &reqwest::Client,
    url: &str,
) -> Result<MessageCatalog, FetchError> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(FetchError::Status {
            status: response.status(),
        });
    }

    let body = response.bytes().await?;
    Ok(MessageCatalog::from_slice(&body)?)
}
