//! Cross-validation scoring.
//!
//! Compares AI-extracted items against the independently produced
//! rule-based baseline along four dimensions, then aggregates them through
//! fixed weights. Scoring never fails: malformed or empty input degrades
//! the relevant component toward zero instead of erroring.

use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use crate::config::QaConfig;
use crate::models::{ActionItem, Transcript};
use crate::pipeline::context::language::detect_language;
use crate::pipeline::text::{contains_whole_word, normalize_tokens, split_sentences, jaccard};

use super::types::ValidationResult;

/// Greedy one-to-one match between an AI item and a baseline item.
#[derive(Debug, Clone, Copy)]
struct Match {
    ai_index: usize,
    baseline_index: usize,
    similarity: f64,
}

/// Validate one transcript's AI items against the baseline list.
pub fn cross_validate(
    transcript: &Transcript,
    ai_items: &[ActionItem],
    baseline_items: &[ActionItem],
    config: &QaConfig,
) -> ValidationResult {
    let language = detect_language(transcript, config);
    let profile = config.catalog.language_or_default(&language);
    let stop_words = &profile.stop_words;

    let ai_tokens: Vec<HashSet<String>> = ai_items
        .iter()
        .map(|item| normalize_tokens(&item.text(), stop_words))
        .collect();
    let baseline_tokens: Vec<HashSet<String>> = baseline_items
        .iter()
        .map(|item| normalize_tokens(&item.text(), stop_words))
        .collect();

    let matches = greedy_match(&ai_tokens, &baseline_tokens, config.thresholds.similarity);

    let cross_validation_score = cross_validation_score(&matches, ai_items.len(), baseline_items.len());

    let content_lower = transcript.content.to_lowercase();
    let content_tokens = normalize_tokens(&transcript.content, stop_words);

    let coherence_flags: Vec<bool> = ai_items
        .iter()
        .enumerate()
        .map(|(i, item)| item_coheres(item, &ai_tokens[i], &content_tokens, transcript))
        .collect();
    let context_coherence_score = pass_fraction(&coherence_flags);

    let keyword_score = keyword_score(ai_items, &content_lower, profile.action_keywords.as_slice());

    let structural_flags: Vec<bool> = ai_items
        .iter()
        .map(|item| item_well_formed(item, config, profile.action_verbs.as_slice()))
        .collect();
    let structural_score = pass_fraction(&structural_flags);

    let overall = (super::types::WEIGHT_CROSS_VALIDATION * cross_validation_score
        + super::types::WEIGHT_CONTEXT_COHERENCE * context_coherence_score
        + super::types::WEIGHT_KEYWORD * keyword_score
        + super::types::WEIGHT_STRUCTURAL * structural_score)
        .clamp(0.0, 1.0);

    let potential_false_positives = ai_items
        .iter()
        .enumerate()
        .filter(|(i, _)| !coherence_flags[*i] || !structural_flags[*i])
        .map(|(i, item)| {
            let reason = if !coherence_flags[i] {
                "not grounded in transcript"
            } else {
                "fails structural checks"
            };
            format!("{} ({reason})", item.title)
        })
        .collect();

    let matched_baseline: HashSet<usize> = matches.iter().map(|m| m.baseline_index).collect();
    let potential_false_negatives = baseline_items
        .iter()
        .enumerate()
        .filter(|(i, _)| !matched_baseline.contains(i))
        .map(|(_, item)| format!("{} (baseline item unmatched by AI)", item.title))
        .collect();

    let result = ValidationResult {
        id: Uuid::new_v4(),
        timestamp: Utc::now(),
        transcript_title: transcript.title.clone(),
        ai_item_count: ai_items.len(),
        baseline_item_count: baseline_items.len(),
        cross_validation_score,
        context_coherence_score,
        keyword_score,
        structural_score,
        overall_confidence: overall,
        potential_false_positives,
        potential_false_negatives,
    };

    tracing::debug!(
        title = %transcript.title,
        cross = result.cross_validation_score,
        coherence = result.context_coherence_score,
        keyword = result.keyword_score,
        structural = result.structural_score,
        confidence = result.overall_confidence,
        "Cross-validated extraction"
    );

    result
}

/// Greedy one-to-one matching: repeatedly take the highest-similarity
/// unmatched pair at or above `threshold`. Index order breaks similarity
/// ties, keeping the result deterministic.
fn greedy_match(
    ai_tokens: &[HashSet<String>],
    baseline_tokens: &[HashSet<String>],
    threshold: f64,
) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut ai_used = vec![false; ai_tokens.len()];
    let mut baseline_used = vec![false; baseline_tokens.len()];

    loop {
        let mut best: Option<Match> = None;
        for (i, a) in ai_tokens.iter().enumerate() {
            if ai_used[i] {
                continue;
            }
            for (j, b) in baseline_tokens.iter().enumerate() {
                if baseline_used[j] {
                    continue;
                }
                let similarity = jaccard(a, b);
                if similarity >= threshold
                    && best.map_or(true, |m| similarity > m.similarity)
                {
                    best = Some(Match {
                        ai_index: i,
                        baseline_index: j,
                        similarity,
                    });
                }
            }
        }
        match best {
            Some(m) => {
                ai_used[m.ai_index] = true;
                baseline_used[m.baseline_index] = true;
                matches.push(m);
            }
            None => break,
        }
    }
    matches
}

/// Match ratio scaled by average matched similarity. Two empty lists agree
/// perfectly: there is nothing to contradict.
fn cross_validation_score(matches: &[Match], ai_count: usize, baseline_count: usize) -> f64 {
    if ai_count == 0 && baseline_count == 0 {
        return 1.0;
    }
    if matches.is_empty() {
        return 0.0;
    }
    let match_ratio = matches.len() as f64 / ai_count.max(baseline_count).max(1) as f64;
    let avg_similarity =
        matches.iter().map(|m| m.similarity).sum::<f64>() / matches.len() as f64;
    (match_ratio * avg_similarity).clamp(0.0, 1.0)
}

/// An item coheres when at least one of its content words appears in the
/// transcript and any named assignee is a known participant.
fn item_coheres(
    item: &ActionItem,
    item_tokens: &HashSet<String>,
    content_tokens: &HashSet<String>,
    transcript: &Transcript,
) -> bool {
    let has_content_support = item_tokens.iter().any(|t| content_tokens.contains(t));
    let assignee_known = match &item.assigned_to {
        None => true,
        Some(name) => is_participant(name, &transcript.participants),
    };
    has_content_support && assignee_known
}

/// Case-insensitive participant lookup, accepting first-name/part matches.
pub(crate) fn is_participant(name: &str, participants: &[String]) -> bool {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return false;
    }
    participants.iter().any(|p| {
        let full = p.trim().to_lowercase();
        full == needle
            || full.split_whitespace().any(|part| part == needle)
            || needle.split_whitespace().any(|part| part == full)
    })
}

/// Average of two sub-measures: the fraction of items mentioning an action
/// keyword and the fraction of transcript sentences mentioning one.
fn keyword_score(ai_items: &[ActionItem], content_lower: &str, keywords: &[String]) -> f64 {
    let item_fraction = if ai_items.is_empty() {
        0.0
    } else {
        let hits = ai_items
            .iter()
            .filter(|item| {
                let text = item.text().to_lowercase();
                keywords.iter().any(|k| contains_whole_word(&text, k))
            })
            .count();
        hits as f64 / ai_items.len() as f64
    };

    let sentences = split_sentences(content_lower);
    let sentence_fraction = if sentences.is_empty() {
        0.0
    } else {
        let hits = sentences
            .iter()
            .filter(|s| keywords.iter().any(|k| contains_whole_word(s, k)))
            .count();
        hits as f64 / sentences.len() as f64
    };

    ((item_fraction + sentence_fraction) / 2.0).clamp(0.0, 1.0)
}

/// Shape checks: plausible title length, non-empty description, and a
/// recognizable action verb somewhere in the text.
fn item_well_formed(item: &ActionItem, config: &QaConfig, verbs: &[String]) -> bool {
    let title_len = item.title.trim().chars().count();
    if title_len < config.thresholds.min_title_length
        || title_len > config.thresholds.max_title_length
    {
        return false;
    }
    if item.description.trim().is_empty() {
        return false;
    }
    let text = item.text().to_lowercase();
    verbs.iter().any(|v| contains_whole_word(&text, v))
}

fn pass_fraction(flags: &[bool]) -> f64 {
    if flags.is_empty() {
        return 0.0;
    }
    flags.iter().filter(|f| **f).count() as f64 / flags.len() as f64
}
