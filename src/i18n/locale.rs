//! Locale code type.
//!
//! A locale code is an opaque short identifier ("en", "fr", "pt-BR"). Nothing
//! about its internal structure is assumed beyond equality.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale used when neither an explicit code nor a usable stored preference is available.
pub const FALLBACK_LOCALE: &str = "en";

/// A locale code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Create a locale code from user input.
    ///
    /// The code is kept exactly as given; `" fr"` and `"fr"` are different
    /// locales.
    ///
    /// # Returns
    /// * `Some(LocaleCode)` for any non-empty string
    /// * `None` for an empty string
    pub fn new(code: &str) -> Option<LocaleCode> {
        if code.is_empty() {
            None
        } else {
            Some(LocaleCode(code.to_string()))
        }
    }

    /// The fallback locale ("en").
    pub fn fallback() -> LocaleCode {
        LocaleCode(FALLBACK_LOCALE.to_string())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the fallback locale.
    pub fn is_fallback(&self) -> bool {
        self.0 == FALLBACK_LOCALE
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_code() {
        let code = LocaleCode::new("fr").expect("Should succeed");
        assert_eq!(code.as_str(), "fr");
        assert!(!code.is_fallback());
    }

    #[test]
    fn test_new_keeps_whitespace() {
        let code = LocaleCode::new(" fr").expect("Should succeed");
        assert_eq!(code.as_str(), " fr");
        assert_ne!(LocaleCode::new(" fr"), LocaleCode::new("fr"));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(LocaleCode::new("").is_none());
        assert_eq!(LocaleCode::new("   ").unwrap().as_str(), "   ");
    }

    #[test]
    fn test_fallback_is_english() {
        let fallback = LocaleCode::fallback();
        assert_eq!(fallback.as_str(), "en");
        assert!(fallback.is_fallback());
    }

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(LocaleCode::new("en"), LocaleCode::new("en"));
        assert_ne!(LocaleCode::new("en"), LocaleCode::new("EN"));
    }

    #[test]
    fn test_display() {
        assert_eq!(LocaleCode::fallback().to_string(), "en");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&LocaleCode::fallback()).unwrap();
        assert_eq!(json, "\"en\"");
    }
}
