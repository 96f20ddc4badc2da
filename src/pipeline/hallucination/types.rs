use serde::{Deserialize, Serialize};

use crate::models::ActionItem;

/// The six independent plausibility checks, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlausibilityCheck {
    ContextRelevance,
    AssigneeValidation,
    KeywordVerification,
    StructuralAnalysis,
    TemporalConsistency,
    TopicCoherence,
}

impl PlausibilityCheck {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContextRelevance => "context_relevance",
            Self::AssigneeValidation => "assignee_validation",
            Self::KeywordVerification => "keyword_verification",
            Self::StructuralAnalysis => "structural_analysis",
            Self::TemporalConsistency => "temporal_consistency",
            Self::TopicCoherence => "topic_coherence",
        }
    }
}

/// Outcome of one check against one item.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub passed: bool,
    /// Present only on failure; feeds the analysis reason list.
    pub reason: Option<String>,
}

impl CheckOutcome {
    pub fn pass() -> Self {
        Self {
            passed: true,
            reason: None,
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: Some(reason.into()),
        }
    }
}

/// Per-item breakdown: which checks failed and the resulting confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItemAnalysis {
    pub item: ActionItem,
    /// Fraction of checks passed, in [0,1].
    pub confidence: f64,
    pub failed_checks: Vec<PlausibilityCheck>,
    pub is_likely_hallucination: bool,
}

/// Aggregate analysis over one transcript's proposed items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HallucinationAnalysis {
    pub transcript_title: String,
    pub total_items: usize,
    /// Items flagged as likely hallucinations, in input order.
    pub flagged_items: Vec<ActionItem>,
    /// Human-readable failure reasons across all items.
    pub reasons: Vec<String>,
    /// flagged / total, 0.0 for an empty item list.
    pub hallucination_rate: f64,
    /// Per-item breakdowns in input order.
    pub item_analyses: Vec<ActionItemAnalysis>,
}
