//! Meeting-type classification.
//!
//! Scores each candidate type by counting catalog pattern hits in
//! title + content, then applies two structural heuristics: very small
//! meetings strongly suggest a one-on-one, and short transcripts suggest a
//! standup. Classification is total and deterministic: ties break on a
//! fixed specificity order and General is the zero-score fallback.

use crate::config::QaConfig;
use crate::models::{MeetingType, Transcript};
use crate::pipeline::text::count_whole_word;

/// Tie-break order, most specific type first. A tied score resolves to the
/// type appearing earlier here.
const SPECIFICITY_ORDER: [MeetingType; 9] = [
    MeetingType::Incident,
    MeetingType::OneOnOne,
    MeetingType::Standup,
    MeetingType::Sprint,
    MeetingType::Architecture,
    MeetingType::ProjectPlanning,
    MeetingType::ClientMeeting,
    MeetingType::AllHands,
    MeetingType::General,
];

/// Score bonus when the participant count is at or below the one-on-one
/// maximum. Large enough to dominate keyword evidence for other types.
const ONE_ON_ONE_BONUS: usize = 5;

/// Score bonus for short transcripts. Mild: a standup keyword or two plus
/// brevity should win, brevity alone should not override clear signals.
const STANDUP_BONUS: usize = 2;

/// Classify the meeting type of a transcript. Never fails; a transcript
/// matching nothing is General.
pub fn classify_meeting_type(transcript: &Transcript, config: &QaConfig) -> MeetingType {
    let haystack = format!("{} {}", transcript.title, transcript.content).to_lowercase();

    let mut best = MeetingType::General;
    let mut best_score = 0usize;

    for meeting_type in SPECIFICITY_ORDER {
        let mut score = pattern_hits(&haystack, config, meeting_type);

        if meeting_type == MeetingType::OneOnOne
            && !transcript.participants.is_empty()
            && transcript.participants.len() <= config.thresholds.one_on_one_max_participants
        {
            score += ONE_ON_ONE_BONUS;
        }

        if meeting_type == MeetingType::Standup
            && !transcript.content.is_empty()
            && transcript.content.len() < config.thresholds.standup_max_content_len
        {
            score += STANDUP_BONUS;
        }

        // Strict > keeps the earlier (more specific) type on ties.
        if score > best_score {
            best = meeting_type;
            best_score = score;
        }
    }

    tracing::debug!(
        title = %transcript.title,
        meeting_type = best.as_str(),
        score = best_score,
        "Classified meeting type"
    );
    best
}

fn pattern_hits(haystack: &str, config: &QaConfig, meeting_type: MeetingType) -> usize {
    config
        .catalog
        .patterns_for(meeting_type)
        .iter()
        .map(|pattern| {
            if pattern.contains(char::is_whitespace) || pattern.contains('-') {
                // Phrase patterns match as substrings ("all hands", "1:1").
                haystack.matches(pattern.as_str()).count()
            } else {
                count_whole_word(haystack, pattern)
            }
        })
        .sum()
}
