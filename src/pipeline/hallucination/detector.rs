//! Per-item hallucination analysis and filtering.

use std::sync::Arc;

use crate::config::QaConfig;
use crate::models::{ActionItem, Transcript};
use crate::pipeline::context::language::detect_language;
use crate::pipeline::text::{normalize_tokens, topic_terms};

use super::checks::{CheckContext, CHECKS};
use super::types::{ActionItemAnalysis, HallucinationAnalysis};

/// Runs the plausibility check table over AI-proposed items.
pub struct HallucinationDetector {
    config: Arc<QaConfig>,
}

impl HallucinationDetector {
    pub fn new(config: Arc<QaConfig>) -> Self {
        Self { config }
    }

    /// Analyze every item using the configured flagging threshold.
    pub fn analyze_action_items(
        &self,
        transcript: &Transcript,
        items: &[ActionItem],
    ) -> HallucinationAnalysis {
        self.analyze_with_threshold(transcript, items, self.config.thresholds.min_confidence)
    }

    /// Analyze every item, flagging those below `min_confidence`.
    pub fn analyze_with_threshold(
        &self,
        transcript: &Transcript,
        items: &[ActionItem],
        min_confidence: f64,
    ) -> HallucinationAnalysis {
        let ctx = self.check_context(transcript);

        let mut item_analyses = Vec::with_capacity(items.len());
        let mut flagged_items = Vec::new();
        let mut reasons = Vec::new();

        for item in items {
            let mut failed_checks = Vec::new();
            let mut passed = 0usize;
            for (check, run) in &CHECKS {
                let outcome = run(item, &ctx);
                if outcome.passed {
                    passed += 1;
                } else {
                    failed_checks.push(*check);
                    if let Some(reason) = outcome.reason {
                        reasons.push(reason);
                    }
                }
            }
            let confidence = (passed as f64 / CHECKS.len() as f64).clamp(0.0, 1.0);
            let is_likely_hallucination = confidence < min_confidence;
            if is_likely_hallucination {
                flagged_items.push(item.clone());
            }
            item_analyses.push(ActionItemAnalysis {
                item: item.clone(),
                confidence,
                failed_checks,
                is_likely_hallucination,
            });
        }

        let hallucination_rate = if items.is_empty() {
            0.0
        } else {
            (flagged_items.len() as f64 / items.len() as f64).clamp(0.0, 1.0)
        };

        if !flagged_items.is_empty() {
            tracing::warn!(
                title = %transcript.title,
                flagged = flagged_items.len(),
                total = items.len(),
                rate = hallucination_rate,
                "Flagged likely hallucinations"
            );
        }

        HallucinationAnalysis {
            transcript_title: transcript.title.clone(),
            total_items: items.len(),
            flagged_items,
            reasons,
            hallucination_rate,
            item_analyses,
        }
    }

    /// Items at or above `threshold`, preserving input order.
    pub fn filter_high_confidence_items(
        &self,
        transcript: &Transcript,
        items: &[ActionItem],
        threshold: f64,
    ) -> Vec<ActionItem> {
        let analysis = self.analyze_with_threshold(transcript, items, threshold);
        analysis
            .item_analyses
            .into_iter()
            .filter(|a| a.confidence >= threshold)
            .map(|a| a.item)
            .collect()
    }

    fn check_context<'a>(&'a self, transcript: &'a Transcript) -> CheckContext<'a> {
        let language = detect_language(transcript, &self.config);
        let profile = self.config.catalog.language_or_default(&language);
        CheckContext {
            transcript,
            content_tokens: normalize_tokens(&transcript.content, &profile.stop_words),
            topic_tokens: topic_terms(
                &transcript.content,
                &profile.stop_words,
                self.config.thresholds.topic_term_count,
            ),
            profile,
            thresholds: &self.config.thresholds,
        }
    }
}
