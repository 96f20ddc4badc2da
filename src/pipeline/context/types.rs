use serde::{Deserialize, Serialize};

use crate::models::MeetingType;

/// Classification output plus the thresholds extraction should honor for
/// this transcript. Built once, before the model call; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyContext {
    pub meeting_type: MeetingType,
    pub language: String,
    /// Items below this confidence should not be surfaced downstream.
    pub confidence_threshold: f64,
    /// Default horizon (days) assumed when an item names no due date.
    pub default_timeframe_days: i64,
    /// Maximum days a due date may lie past the meeting date.
    pub max_days_out: i64,
    pub require_assignee: bool,
    pub require_due_date: bool,
    /// Incident-style meetings: surface the most urgent items first.
    pub prioritize_by_urgency: bool,
}

/// Model-call parameters tuned per meeting type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionParameters {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    /// Restrict extraction to near-term commitments (standups, incidents).
    pub focus_on_immediate: bool,
    /// Minimum action words an utterance needs to qualify as an item.
    pub min_action_words: usize,
    pub prioritize_by_urgency: bool,
}

impl Default for ExtractionParameters {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            max_tokens: 4000,
            top_p: 0.95,
            focus_on_immediate: false,
            min_action_words: 3,
            prioritize_by_urgency: false,
        }
    }
}

/// Rules the caller applies when checking decoded model output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRules {
    pub language: String,
    pub meeting_type: MeetingType,
    pub allowed_action_verbs: Vec<String>,
    pub required_fields: Vec<String>,
    pub max_days_out: i64,
    pub require_priority: bool,
}

/// Everything the external model caller needs for one extraction request.
/// Handed over verbatim; the caller must not rewrite the prompt or
/// parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfiguration {
    pub meeting_type: MeetingType,
    pub language: String,
    pub system_prompt: String,
    pub parameters: ExtractionParameters,
    pub rules: ValidationRules,
}
