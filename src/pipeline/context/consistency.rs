//! Consistency context and extraction-configuration assembly.
//!
//! Wraps classifier output in per-meeting-type defaults, looks up tuned
//! model parameters, and composes the single `ExtractionConfiguration`
//! object the external model caller consumes.

use crate::config::QaConfig;
use crate::models::{MeetingType, Transcript};

use super::classify::classify_meeting_type;
use super::language::detect_language;
use super::prompt::generate_contextual_prompt;
use super::types::{
    ConsistencyContext, ExtractionConfiguration, ExtractionParameters, ValidationRules,
};

/// Build the consistency context for a transcript: classification results
/// plus defaulted thresholds, with per-meeting-type overrides applied.
pub fn build_consistency_context(transcript: &Transcript, config: &QaConfig) -> ConsistencyContext {
    let meeting_type = classify_meeting_type(transcript, config);
    let language = detect_language(transcript, config);

    let mut ctx = ConsistencyContext {
        meeting_type,
        language,
        confidence_threshold: 0.7,
        default_timeframe_days: 7,
        max_days_out: config.thresholds.max_days_out,
        require_assignee: false,
        require_due_date: false,
        prioritize_by_urgency: false,
    };

    match meeting_type {
        // Standup commitments are personal and due by the next sync.
        MeetingType::Standup => {
            ctx.require_assignee = true;
            ctx.max_days_out = 1;
            ctx.default_timeframe_days = 1;
        }
        MeetingType::Incident => {
            ctx.prioritize_by_urgency = true;
            ctx.default_timeframe_days = 3;
        }
        MeetingType::ProjectPlanning => {
            ctx.default_timeframe_days = 30;
        }
        _ => {}
    }

    ctx
}

/// Model parameters tuned per meeting type. Types without a dedicated row
/// use the General defaults (temperature 0.1, 4000 tokens, top-p 0.95).
pub fn optimal_parameters(context: &ConsistencyContext) -> ExtractionParameters {
    let defaults = ExtractionParameters::default();
    match context.meeting_type {
        MeetingType::Standup => ExtractionParameters {
            temperature: 0.05,
            max_tokens: 2000,
            focus_on_immediate: true,
            min_action_words: 2,
            ..defaults
        },
        MeetingType::Incident => ExtractionParameters {
            temperature: 0.05,
            max_tokens: 3000,
            focus_on_immediate: true,
            prioritize_by_urgency: true,
            ..defaults
        },
        MeetingType::Architecture => ExtractionParameters {
            temperature: 0.15,
            max_tokens: 6000,
            ..defaults
        },
        MeetingType::Sprint | MeetingType::ProjectPlanning => ExtractionParameters {
            max_tokens: 5000,
            ..defaults
        },
        MeetingType::OneOnOne => ExtractionParameters {
            max_tokens: 2000,
            ..defaults
        },
        MeetingType::AllHands => ExtractionParameters {
            max_tokens: 3000,
            ..defaults
        },
        MeetingType::ClientMeeting | MeetingType::General => defaults,
    }
}

/// Validation rules the caller applies to decoded model output.
pub fn build_validation_rules(context: &ConsistencyContext, config: &QaConfig) -> ValidationRules {
    let profile = config.catalog.language_or_default(&context.language);
    ValidationRules {
        language: context.language.clone(),
        meeting_type: context.meeting_type,
        allowed_action_verbs: profile.action_verbs.clone(),
        required_fields: vec!["title".into(), "description".into()],
        max_days_out: context.max_days_out,
        require_priority: context.meeting_type == MeetingType::Incident,
    }
}

/// Compose the complete extraction configuration for one transcript.
pub fn create_extraction_configuration(
    transcript: &Transcript,
    config: &QaConfig,
) -> ExtractionConfiguration {
    let context = build_consistency_context(transcript, config);
    let parameters = optimal_parameters(&context);
    let rules = build_validation_rules(&context, config);
    let system_prompt = generate_contextual_prompt(transcript, &context);

    tracing::info!(
        title = %transcript.title,
        meeting_type = context.meeting_type.as_str(),
        language = %context.language,
        temperature = parameters.temperature,
        max_tokens = parameters.max_tokens,
        "Built extraction configuration"
    );

    ExtractionConfiguration {
        meeting_type: context.meeting_type,
        language: context.language,
        system_prompt,
        parameters,
        rules,
    }
}
