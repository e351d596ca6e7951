//! Catalog completeness validation.
//!
//! Compares a locale's catalog with a reference catalog (normally the
//! fallback locale) to find missing messages and messages whose
//! interpolation placeholders or linked-message references changed.

use crate::i18n::MessageCatalog;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that leave keys untranslated or unusable
    pub errors: Vec<String>,

    /// Suspicious differences that still produce a message
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog completeness.
pub struct CatalogValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
static LINKED_MESSAGE_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate `candidate` against `reference`.
    ///
    /// Errors:
    /// - a message in the reference is missing from the candidate
    /// - a message path in one catalog is a section path in the other
    ///
    /// Warnings:
    /// - a message exists only in the candidate
    /// - `{name}` placeholders differ between the two messages
    /// - `@:key` linked-message references differ between the two messages
    pub fn validate(reference: &MessageCatalog, candidate: &MessageCatalog) -> ValidationReport {
        let mut report = ValidationReport::new();

        let expected = reference.flatten();
        let actual = candidate.flatten();

        for (key, reference_text) in &expected {
            let Some(candidate_text) = actual.get(key) else {
                if Self::overlaps(key, actual.keys()) {
                    report.errors.push(format!(
                        "Structure mismatch: '{}' is nested differently in the catalog",
                        key
                    ));
                } else {
                    report.errors.push(format!("Missing key: '{}'", key));
                }
                continue;
            };

            let expected_placeholders = Self::extract_placeholders(reference_text);
            let actual_placeholders = Self::extract_placeholders(candidate_text);
            if expected_placeholders != actual_placeholders {
                report.warnings.push(format!(
                    "Placeholder mismatch in '{}': reference has {:?}, catalog has {:?}",
                    key, expected_placeholders, actual_placeholders
                ));
            }

            let expected_links = Self::extract_linked_keys(reference_text);
            let actual_links = Self::extract_linked_keys(candidate_text);
            if expected_links != actual_links {
                report.warnings.push(format!(
                    "Linked message mismatch in '{}': reference has {:?}, catalog has {:?}",
                    key, expected_links, actual_links
                ));
            }
        }

        for key in actual.keys() {
            if !expected.contains_key(key) {
                // Already reported as a structure mismatch
                if Self::overlaps(key, expected.keys()) {
                    continue;
                }
                report
                    .warnings
                    .push(format!("Unknown key: '{}' is not in the reference", key));
            }
        }

        report
    }

    /// Whether `key` is a parent or child path of any of `others`
    fn overlaps<'a>(key: &str, mut others: impl Iterator<Item = &'a String>) -> bool {
        others.any(|other| is_child_path(other, key) || is_child_path(key, other))
    }

    /// Extract named and positional `{placeholder}` names from a message
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| {
            Regex::new(r"\{\s*([A-Za-z0-9_]+)\s*\}").expect("placeholder regex is valid")
        });

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Extract `@:key` and `@.modifier:key` linked-message references
    fn extract_linked_keys(text: &str) -> BTreeSet<String> {
        let regex = LINKED_MESSAGE_REGEX.get_or_init(|| {
            Regex::new(r"@(?:\.[a-z]+)?:\(?([A-Za-z0-9_.\-]*[A-Za-z0-9_\-])\)?")
                .expect("linked message regex is valid")
        });

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

fn is_child_path(path: &str, parent: &str) -> bool {
    path.len() > parent.len() + 1
        && path.starts_with(parent)
        && path.as_bytes()[parent.len()] == b'.'
}
