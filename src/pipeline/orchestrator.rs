//! The QA facade.
//!
//! Per transcript the flow is strictly forward: build the extraction
//! configuration, hand it to the external model caller, then — once both
//! the AI and baseline item lists exist — cross-validate, record the
//! result, analyze hallucinations, and filter. The facade holds no
//! per-transcript state, so a caller abandoning a transcript mid-flow
//! leaves nothing to clean up; the rolling history only ever sees
//! completed validations.

use std::sync::Arc;

use crate::config::QaConfig;
use crate::models::{ActionItem, Transcript};

use super::context::consistency::create_extraction_configuration;
use super::context::types::ExtractionConfiguration;
use super::hallucination::detector::HallucinationDetector;
use super::hallucination::types::HallucinationAnalysis;
use super::validation::metrics::MetricsAggregator;
use super::validation::scorer::cross_validate;
use super::validation::types::{ValidationMetrics, ValidationResult};

pub struct ExtractionQa {
    config: Arc<QaConfig>,
    metrics: MetricsAggregator,
    detector: HallucinationDetector,
}

impl ExtractionQa {
    pub fn new(config: QaConfig) -> Self {
        Self::with_shared_config(Arc::new(config))
    }

    pub fn with_shared_config(config: Arc<QaConfig>) -> Self {
        let metrics = MetricsAggregator::new(config.thresholds.history_capacity);
        let detector = HallucinationDetector::new(Arc::clone(&config));
        Self {
            config,
            metrics,
            detector,
        }
    }

    pub fn config(&self) -> &QaConfig {
        &self.config
    }

    /// Stage 1: build the configuration the external model caller must use.
    pub fn configure_extraction(&self, transcript: &Transcript) -> ExtractionConfiguration {
        create_extraction_configuration(transcript, &self.config)
    }

    /// Stage 2: once both item lists exist, score the AI extraction against
    /// the baseline and append the result to the rolling history.
    pub fn validate_extraction(
        &self,
        transcript: &Transcript,
        ai_items: &[ActionItem],
        baseline_items: &[ActionItem],
    ) -> ValidationResult {
        let result = cross_validate(transcript, ai_items, baseline_items, &self.config);
        tracing::info!(
            title = %transcript.title,
            ai_items = ai_items.len(),
            baseline_items = baseline_items.len(),
            confidence = result.overall_confidence,
            "Validated extraction"
        );
        self.metrics.record(result.clone());
        result
    }

    /// Stage 3: per-item plausibility analysis, independent of the
    /// baseline comparison.
    pub fn analyze_hallucinations(
        &self,
        transcript: &Transcript,
        ai_items: &[ActionItem],
    ) -> HallucinationAnalysis {
        self.detector.analyze_action_items(transcript, ai_items)
    }

    /// Stage 4: the item list downstream ticket creation should act on.
    pub fn filter_high_confidence(
        &self,
        transcript: &Transcript,
        ai_items: &[ActionItem],
        threshold: f64,
    ) -> Vec<ActionItem> {
        self.detector
            .filter_high_confidence_items(transcript, ai_items, threshold)
    }

    /// Aggregate metrics over the rolling validation history.
    pub fn validation_metrics(&self) -> ValidationMetrics {
        self.metrics.metrics()
    }

    pub fn history_len(&self) -> usize {
        self.metrics.len()
    }
}
