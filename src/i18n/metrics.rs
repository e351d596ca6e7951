//! Loader metrics.
//!
//! Counts how often a requested locale was already loaded, how often a
//! catalog had to be fetched, and how many of those fetches failed. Each
//! loader owns its own counters.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for a single loader.
#[derive(Debug, Default)]
pub struct LoaderMetrics {
    /// Requests served from the loaded-locale set
    cache_hits: AtomicUsize,

    /// Requests for a locale that was not loaded yet
    cache_misses: AtomicUsize,

    /// Catalog fetches issued
    fetches: AtomicUsize,

    /// Catalog fetches that failed (transport, status or parse)
    fetch_failures: AtomicUsize,
}

impl LoaderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fetch(&self) {
        self.fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fetch_failure(&self) {
        self.fetch_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> usize {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }

    pub fn fetch_failures(&self) -> usize {
        self.fetch_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> LoaderMetricsReport {
        let hits = self.cache_hits();
        let misses = self.cache_misses();
        let total_requests = hits + misses;
        let cache_hit_rate = if total_requests > 0 {
            (hits as f64 / total_requests as f64) * 100.0
        } else {
            0.0
        };

        let fetches = self.fetches();
        let failures = self.fetch_failures();
        let fetch_success_rate = if fetches > 0 {
            (fetches.saturating_sub(failures) as f64 / fetches as f64) * 100.0
        } else {
            0.0
        };

        LoaderMetricsReport {
            cache_hits: hits,
            cache_misses: misses,
            cache_hit_rate,
            fetches,
            fetch_failures: failures,
            fetch_success_rate,
        }
    }
}

/// Snapshot of loader statistics.
#[derive(Debug, Clone, Serialize)]
pub struct LoaderMetricsReport {
    pub cache_hits: usize,
    pub cache_misses: usize,

    /// Cache hit rate as a percentage (0-100)
    pub cache_hit_rate: f64,

    pub fetches: usize,
    pub fetch_failures: usize,

    /// Fetch success rate as a percentage (0-100)
    pub fetch_success_rate: f64,
}
