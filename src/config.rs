use anyhow::{bail, Context, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Catalog server
    pub locales_base_url: String,

    // Preferences
    pub preferences_file: Option<String>,

    // HTTP transport
    pub http_timeout_secs: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Catalog server - catalogs live under {base}/locales/{code}.json
            locales_base_url: std::env::var("LOCALES_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),

            // Preferences - optional JSON file holding the stored LOCALE value
            preferences_file: std::env::var("PREFERENCES_FILE").ok(),

            // HTTP transport
            http_timeout_secs: match std::env::var("HTTP_TIMEOUT_SECS") {
                Ok(v) => Some(
                    v.parse()
                        .with_context(|| format!("HTTP_TIMEOUT_SECS is not a number: {}", v))?,
                ),
                Err(_) => None,
            },
        })
    }

    /// Parse `locales_base_url`.
    ///
    /// Rejects URLs that cannot take path segments, since catalog URLs are
    /// built by appending `locales/{code}.json` to the base.
    pub fn base_url(&self) -> Result<reqwest::Url> {
        let url = reqwest::Url::parse(&self.locales_base_url).with_context(|| {
            format!("LOCALES_BASE_URL is not a valid URL: {}", self.locales_base_url)
        })?;
        if url.cannot_be_a_base() {
            bail!("LOCALES_BASE_URL cannot be used as a base: {}", url);
        }
        Ok(url)
    }

    /// Build the HTTP client used for catalog fetches.
    ///
    /// The loader imposes no timeout of its own; if one is configured it is
    /// applied here, at the transport.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = self.http_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().context("Failed to build HTTP client")
    }
}
