//! Localization metrics.
//!
//! Process-wide counters for message lookups and validation translator
//! registrations.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global localization metrics singleton.
pub struct LocalizationMetrics {
    /// Message keys resolved through a localizer
    lookups: AtomicUsize,

    /// Lookups that failed (missing key or category key)
    misses: AtomicUsize,

    /// Validation translator registrations performed
    registrations: AtomicUsize,

    /// Translator requests served without registering
    translator_cache_hits: AtomicUsize,
}

static METRICS: OnceLock<LocalizationMetrics> = OnceLock::new();

impl LocalizationMetrics {
    /// Get the global metrics instance.
    pub fn global() -> &'static LocalizationMetrics {
        METRICS.get_or_init(LocalizationMetrics::new)
    }

    fn new() -> Self {
        Self {
            lookups: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            registrations: AtomicUsize::new(0),
            translator_cache_hits: AtomicUsize::new(0),
        }
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_registration(&self) {
        self.registrations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_translator_cache_hit(&self) {
        self.translator_cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn registrations(&self) -> usize {
        self.registrations.load(Ordering::Relaxed)
    }

    pub fn translator_cache_hits(&self) -> usize {
        self.translator_cache_hits.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let misses = self.misses();
        let miss_rate = if lookups > 0 {
            (misses as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            misses,
            miss_rate,
            registrations: self.registrations(),
            translator_cache_hits: self.translator_cache_hits(),
        }
    }
}

/// Snapshot of the localization counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub misses: usize,

    /// Miss rate as a percentage (0-100)
    pub miss_rate: f64,

    pub registrations: usize,
    pub translator_cache_hits: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global instance is shared with every other test in the binary, so
    // exact counts are asserted on private instances.

    #[test]
    fn test_record_lookup_and_miss() {
        let metrics = LocalizationMetrics::new();

        metrics.record_lookup();
        metrics.record_lookup();
        metrics.record_miss();

        assert_eq!(metrics.lookups(), 2);
        assert_eq!(metrics.misses(), 1);
    }

    #[test]
    fn test_record_registration_and_cache_hit() {
        let metrics = LocalizationMetrics::new();

        metrics.record_registration();
        metrics.record_translator_cache_hit();
        metrics.record_translator_cache_hit();

        assert_eq!(metrics.registrations(), 1);
        assert_eq!(metrics.translator_cache_hits(), 2);
    }

    #[test]
    fn test_report_empty() {
        let report = LocalizationMetrics::new().report();

        assert_eq!(report.lookups, 0);
        assert_eq!(report.misses, 0);
        assert_eq!(report.miss_rate, 0.0);
    }

    #[test]
    fn test_report_miss_rate() {
        let metrics = LocalizationMetrics::new();

        // 4 lookups, 1 miss = 25% miss rate
        for _ in 0..4 {
            metrics.record_lookup();
        }
        metrics.record_miss();

        assert_eq!(metrics.report().miss_rate, 25.0);
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_value(LocalizationMetrics::new().report()).unwrap();
        assert!(json.get("miss_rate").is_some());
        assert!(json.get("translator_cache_hits").is_some());
    }

    #[test]
    fn test_global_returns_same_instance() {
        let metrics1 = LocalizationMetrics::global();
        let metrics2 = LocalizationMetrics::global();
        assert!(std::ptr::eq(metrics1, metrics2));
    }

    #[test]
    fn test_global_counts_are_visible_across_references() {
        let before = LocalizationMetrics::global().registrations();
        LocalizationMetrics::global().record_registration();
        assert!(LocalizationMetrics::global().registrations() > before);
    }
}
