use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Component weights for the overall confidence. Must sum to 1.0.
pub const WEIGHT_CROSS_VALIDATION: f64 = 0.30;
pub const WEIGHT_CONTEXT_COHERENCE: f64 = 0.30;
pub const WEIGHT_KEYWORD: f64 = 0.20;
pub const WEIGHT_STRUCTURAL: f64 = 0.20;

/// Outcome of validating one transcript's AI-extracted items against the
/// rule-based baseline. Immutable once created; appended to the rolling
/// history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub transcript_title: String,
    pub ai_item_count: usize,
    pub baseline_item_count: usize,
    /// Agreement with the baseline list, in [0,1].
    pub cross_validation_score: f64,
    /// Fraction of items grounded in transcript content and participants.
    pub context_coherence_score: f64,
    /// Action-keyword density across items and transcript sentences.
    pub keyword_score: f64,
    /// Fraction of items passing shape checks (title, description, verb).
    pub structural_score: f64,
    /// Fixed weighted sum of the four component scores.
    pub overall_confidence: f64,
    /// AI items that failed coherence or structural checks.
    pub potential_false_positives: Vec<String>,
    /// Baseline items with no AI counterpart.
    pub potential_false_negatives: Vec<String>,
}

impl ValidationResult {
    /// Recompute the weighted overall confidence from the components.
    pub fn weighted_confidence(&self) -> f64 {
        (WEIGHT_CROSS_VALIDATION * self.cross_validation_score
            + WEIGHT_CONTEXT_COHERENCE * self.context_coherence_score
            + WEIGHT_KEYWORD * self.keyword_score
            + WEIGHT_STRUCTURAL * self.structural_score)
            .clamp(0.0, 1.0)
    }
}

/// Aggregate statistics over the rolling validation history. Recomputed on
/// demand; never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationMetrics {
    pub total_validations: usize,
    pub avg_cross_validation: f64,
    pub avg_context_coherence: f64,
    pub avg_keyword: f64,
    pub avg_structural: f64,
    pub avg_overall_confidence: f64,
    /// Fraction of results with overall confidence ≥ 0.8.
    pub high_confidence_rate: f64,
    /// Fraction of results with overall confidence < 0.4.
    pub low_confidence_rate: f64,
    pub total_false_positives: usize,
    pub total_false_negatives: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let sum = WEIGHT_CROSS_VALIDATION
            + WEIGHT_CONTEXT_COHERENCE
            + WEIGHT_KEYWORD
            + WEIGHT_STRUCTURAL;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn weighted_confidence_matches_components() {
        let result = ValidationResult {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            transcript_title: "t".into(),
            ai_item_count: 2,
            baseline_item_count: 2,
            cross_validation_score: 1.0,
            context_coherence_score: 0.5,
            keyword_score: 0.5,
            structural_score: 1.0,
            overall_confidence: 0.0,
            potential_false_positives: vec![],
            potential_false_negatives: vec![],
        };
        let expected = 0.30 * 1.0 + 0.30 * 0.5 + 0.20 * 0.5 + 0.20 * 1.0;
        assert!((result.weighted_confidence() - expected).abs() < 1e-12);
    }
}
