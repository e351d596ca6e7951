//! Error types for catalog loading and preference reading.

use thiserror::Error;

/// Why a catalog fetch did not produce a usable catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The base URL cannot have path segments appended (e.g. `mailto:`).
    #[error("base URL {url} cannot hold catalog paths")]
    InvalidBaseUrl { url: String },

    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}")]
    Status { status: reqwest::StatusCode },

    /// The body is not a valid message catalog.
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error returned by [`crate::loader::LocaleLoader::load_locale`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch catalog for locale '{locale}' from {url}: {source}")]
    CatalogFetchFailed {
        locale: String,
        url: String,
        #[source]
        source: FetchError,
    },
}

impl LoadError {
    /// The locale code whose catalog could not be loaded.
    pub fn locale(&self) -> &str {
        match self {
            LoadError::CatalogFetchFailed { locale, .. } => locale,
        }
    }
}

/// Error reading a preference file.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to read preferences file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("preferences file {path} is not a JSON object: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = LoadError::CatalogFetchFailed {
            locale: "fr".to_string(),
            url: "http://localhost/locales/fr.json".to_string(),
            source: FetchError::Status {
                status: reqwest::StatusCode::NOT_FOUND,
            },
        };

        let message = err.to_string();
        assert!(message.contains("'fr'"));
        assert!(message.contains("locales/fr.json"));
        assert!(message.contains("404"));
        assert_eq!(err.locale(), "fr");
    }

    #[test]
    fn test_parse_error_is_source() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = LoadError::CatalogFetchFailed {
            locale: "de".to_string(),
            url: "http://localhost/locales/de.json".to_string(),
            source: FetchError::from(parse),
        };

        let source = std::error::Error::source(&err).expect("should have a source");
        assert!(source.to_string().starts_with("malformed catalog"));
    }
}
