//! Check catalogs binary - compares locale catalogs against the fallback catalog
//!
//! Usage:
//!   cargo run --bin check-catalogs -- fr de ja
//!
//! Every listed catalog is fetched from LOCALES_BASE_URL and validated against
//! the "en" catalog. Exits with an error if any catalog is missing keys or
//! cannot be fetched. "en" itself is the reference and is skipped if listed.
//!
//! Optional:
//! - LOCALES_BASE_URL (defaults to http://localhost:8080)
//! - HTTP_TIMEOUT_SECS

use anyhow::{bail, Context, Result};
use locale_loader::config::Config;
use locale_loader::i18n::{CatalogValidator, LocaleCode, FALLBACK_LOCALE};
use locale_loader::loader::{catalog_url, fetch_catalog};
use tracing::{error, info, warn};

/// Locale codes to validate, in argument order. Empty arguments are ignored
/// and the reference locale is skipped with a log line.
fn locales_to_check(args: impl IntoIterator<Item = String>) -> Vec<LocaleCode> {
    let mut codes = Vec::new();
    for code in args.into_iter().filter_map(|arg| LocaleCode::new(&arg)) {
        if code.is_fallback() {
            info!("Skipping '{}': it is the reference catalog", code);
        } else {
            codes.push(code);
        }
    }
    codes
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("check_catalogs=info".parse()?),
        )
        .init();

    let codes = locales_to_check(std::env::args().skip(1));
    if codes.is_empty() {
        bail!(
            "Usage: check-catalogs <locale> [<locale>...] (locales other than '{}')",
            FALLBACK_LOCALE
        );
    }

    let config = Config::from_env()?;
    let client = config.http_client()?;
    let base_url = config.base_url()?;

    let fallback = LocaleCode::fallback();
    let reference_url = catalog_url(&base_url, &fallback)?;
    let reference = fetch_catalog(&client, reference_url.as_str())
        .await
        .with_context(|| format!("Failed to fetch reference catalog {}", reference_url))?;
    info!(
        "Reference catalog '{}' has {} messages",
        fallback,
        reference.message_count()
    );

    let mut failed = 0;
    for (index, code) in codes.iter().enumerate() {
        let progress = index + 1;
        let catalog = match catalog_url(&base_url, code) {
            Ok(url) => fetch_catalog(&client, url.as_str()).await,
            Err(e) => Err(e),
        };
        let catalog = match catalog {
            Ok(catalog) => catalog,
            Err(e) => {
                failed += 1;
                error!("[{}/{}] ✗ {} - {}", progress, codes.len(), code, e);
                continue;
            }
        };

        let report = CatalogValidator::validate(&reference, &catalog);
        for warning in &report.warnings {
            warn!("[{}] {}", code, warning);
        }
        for problem in &report.errors {
            error!("[{}] {}", code, problem);
        }

        if report.has_errors() {
            failed += 1;
            error!(
                "[{}/{}] ✗ {} - {} errors, {} warnings",
                progress,
                codes.len(),
                code,
                report.errors.len(),
                report.warnings.len()
            );
        } else {
            info!(
                "[{}/{}] ✓ {} - {} messages, {} warnings",
                progress,
                codes.len(),
                code,
                catalog.message_count(),
                report.warnings.len()
            );
        }
    }

    if failed > 0 {
        bail!("{} of {} catalogs failed validation", failed, codes.len());
    }

    info!("All {} catalogs are complete", codes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_reference_locale_is_skipped() {
        let codes = locales_to_check(args(&["fr", "en", "de"]));
        let codes: Vec<&str> = codes.iter().map(LocaleCode::as_str).collect();
        assert_eq!(codes, vec!["fr", "de"]);
    }

    #[test]
    fn test_only_reference_locale_leaves_nothing() {
        assert!(locales_to_check(args(&["en", ""])).is_empty());
    }
}
