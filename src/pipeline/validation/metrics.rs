//! Rolling validation history and aggregate metrics.
//!
//! The history is a bounded FIFO ring owned by a single aggregator
//! instance — explicit state with an explicit lifecycle, not a global.
//! Appends are exclusive; metric reads take the shared lock and may run
//! concurrently with each other.

use std::collections::VecDeque;
use std::sync::RwLock;

use super::types::{ValidationMetrics, ValidationResult};

/// Confidence at or above which a result counts as high-confidence.
const HIGH_CONFIDENCE: f64 = 0.8;

/// Confidence below which a result counts as low-confidence.
const LOW_CONFIDENCE: f64 = 0.4;

/// Bounded rolling buffer of recent validation results.
pub struct MetricsAggregator {
    capacity: usize,
    history: RwLock<VecDeque<ValidationResult>>,
}

impl MetricsAggregator {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            history: RwLock::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Append a result, evicting the oldest entry when full.
    pub fn record(&self, result: ValidationResult) {
        let mut history = self.history.write().unwrap_or_else(|e| e.into_inner());
        if history.len() == self.capacity {
            history.pop_front();
        }
        tracing::debug!(
            title = %result.transcript_title,
            confidence = result.overall_confidence,
            history_len = history.len() + 1,
            "Recorded validation result"
        );
        history.push_back(result);
    }

    pub fn len(&self) -> usize {
        self.history
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the history in insertion order, oldest first.
    pub fn snapshot(&self) -> Vec<ValidationResult> {
        self.history
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    /// Recompute aggregate metrics over the current history.
    pub fn metrics(&self) -> ValidationMetrics {
        let history = self.history.read().unwrap_or_else(|e| e.into_inner());
        let total = history.len();
        if total == 0 {
            return ValidationMetrics::default();
        }

        let n = total as f64;
        let mut metrics = ValidationMetrics {
            total_validations: total,
            ..Default::default()
        };
        let mut high = 0usize;
        let mut low = 0usize;

        for result in history.iter() {
            metrics.avg_cross_validation += result.cross_validation_score;
            metrics.avg_context_coherence += result.context_coherence_score;
            metrics.avg_keyword += result.keyword_score;
            metrics.avg_structural += result.structural_score;
            metrics.avg_overall_confidence += result.overall_confidence;
            metrics.total_false_positives += result.potential_false_positives.len();
            metrics.total_false_negatives += result.potential_false_negatives.len();
            if result.overall_confidence >= HIGH_CONFIDENCE {
                high += 1;
            }
            if result.overall_confidence < LOW_CONFIDENCE {
                low += 1;
            }
        }

        metrics.avg_cross_validation /= n;
        metrics.avg_context_coherence /= n;
        metrics.avg_keyword /= n;
        metrics.avg_structural /= n;
        metrics.avg_overall_confidence /= n;
        metrics.high_confidence_rate = high as f64 / n;
        metrics.low_confidence_rate = low as f64 / n;
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn result(title: &str, confidence: f64) -> ValidationResult {
        ValidationResult {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            transcript_title: title.into(),
            ai_item_count: 1,
            baseline_item_count: 1,
            cross_validation_score: confidence,
            context_coherence_score: confidence,
            keyword_score: confidence,
            structural_score: confidence,
            overall_confidence: confidence,
            potential_false_positives: vec![],
            potential_false_negatives: vec!["missed".into()],
        }
    }

    #[test]
    fn history_capped_with_fifo_eviction() {
        let agg = MetricsAggregator::new(100);
        for i in 0..101 {
            agg.record(result(&format!("t{i}"), 0.5));
        }
        assert_eq!(agg.len(), 100);
        let snapshot = agg.snapshot();
        assert_eq!(snapshot.first().map(|r| r.transcript_title.clone()), Some("t1".into()));
        assert_eq!(snapshot.last().map(|r| r.transcript_title.clone()), Some("t100".into()));
        assert!(snapshot.iter().all(|r| r.transcript_title != "t0"));
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let agg = MetricsAggregator::new(10);
        for i in 0..5 {
            agg.record(result(&format!("t{i}"), 0.5));
        }
        let titles: Vec<String> = agg.snapshot().iter().map(|r| r.transcript_title.clone()).collect();
        assert_eq!(titles, vec!["t0", "t1", "t2", "t3", "t4"]);
    }

    #[test]
    fn empty_history_yields_default_metrics() {
        let agg = MetricsAggregator::new(10);
        let metrics = agg.metrics();
        assert_eq!(metrics.total_validations, 0);
        assert_eq!(metrics.avg_overall_confidence, 0.0);
        assert_eq!(metrics.high_confidence_rate, 0.0);
    }

    #[test]
    fn averages_and_rates_computed_over_history() {
        let agg = MetricsAggregator::new(10);
        agg.record(result("high", 0.9));
        agg.record(result("mid", 0.6));
        agg.record(result("low", 0.3));
        agg.record(result("boundary-high", 0.8));

        let metrics = agg.metrics();
        assert_eq!(metrics.total_validations, 4);
        assert!((metrics.avg_overall_confidence - 0.65).abs() < 1e-9);
        // 0.9 and 0.8 are high; 0.3 is low.
        assert!((metrics.high_confidence_rate - 0.5).abs() < 1e-9);
        assert!((metrics.low_confidence_rate - 0.25).abs() < 1e-9);
        assert_eq!(metrics.total_false_negatives, 4);
        assert_eq!(metrics.total_false_positives, 0);
    }

    #[test]
    fn zero_capacity_clamped_to_one() {
        let agg = MetricsAggregator::new(0);
        agg.record(result("a", 0.5));
        agg.record(result("b", 0.5));
        assert_eq!(agg.len(), 1);
        assert_eq!(agg.snapshot()[0].transcript_title, "b");
    }

    #[test]
    fn concurrent_appends_do_not_lose_entries() {
        use std::sync::Arc;
        let agg = Arc::new(MetricsAggregator::new(1000));
        let mut handles = Vec::new();
        for t in 0..8 {
            let agg = Arc::clone(&agg);
            handles.push(std::thread::spawn(move || {
                for i in 0..50 {
                    agg.record(result(&format!("t{t}-{i}"), 0.5));
                }
            }));
        }
        for handle in handles {
            handle.join().expect("worker panicked");
        }
        assert_eq!(agg.len(), 400);
    }
}
