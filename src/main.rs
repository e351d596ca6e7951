//! Load a locale and print translations for the given keys.
//!
//! Usage:
//!   cargo run -- fr label.save label.cancel   # Load "fr" explicitly
//!   cargo run -- - label.save                 # Use the stored preference
//!
//! Optional environment variables:
//! - LOCALES_BASE_URL (defaults to http://localhost:8080)
//! - PREFERENCES_FILE (JSON file with a "LOCALE" entry)
//! - HTTP_TIMEOUT_SECS

use anyhow::{Context, Result};
use locale_loader::config::Config;
use locale_loader::i18n::Translator;
use locale_loader::preference::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use locale_loader::LocaleLoader;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_loader=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let preferences: Arc<dyn PreferenceStore> = match &config.preferences_file {
        Some(path) => Arc::new(
            FilePreferenceStore::open(path).context("Failed to open preferences file")?,
        ),
        None => Arc::new(MemoryPreferenceStore::new()),
    };

    let mut args = std::env::args().skip(1);
    let requested = args.next().filter(|arg| arg != "-");
    let keys: Vec<String> = args.collect();

    let translator = Arc::new(Translator::new());
    let loader = LocaleLoader::from_config(&config, translator.clone(), preferences)?;

    let locale = loader
        .load_locale(requested.as_deref())
        .await
        .context("Failed to load locale")?;
    info!("✓ Active locale: {}", translator.active_locale());

    for key in &keys {
        info!("{} ({}) = {}", key, locale, translator.translate(key));
    }

    Ok(())
}
