//! Dominant-language detection over transcript content.
//!
//! Counts whole-word occurrences of each configured language's common-word
//! list. Ties resolve through the catalog's fixed priority list (English
//! first); a transcript matching nothing at all is reported as "en".

use crate::config::QaConfig;
use crate::models::Transcript;
use crate::pipeline::text::count_whole_word;

/// Detect the dominant language of a transcript. Deterministic and total.
pub fn detect_language(transcript: &Transcript, config: &QaConfig) -> String {
    let lower = transcript.content.to_lowercase();

    let mut best: Option<&str> = None;
    let mut best_score = 0usize;

    for code in ordered_codes(config) {
        let Some(profile) = config.catalog.language(code) else {
            continue;
        };
        let score: usize = profile
            .common_words
            .iter()
            .map(|w| count_whole_word(&lower, w))
            .sum();
        // Strict > keeps the earlier (higher-priority) language on ties.
        if score > best_score {
            best = Some(code);
            best_score = score;
        }
    }

    match best {
        Some(code) => code.to_string(),
        None => "en".to_string(),
    }
}

/// Catalog languages in tie-break order: the priority list first, then any
/// configured language the list omits, in catalog order.
fn ordered_codes(config: &QaConfig) -> Vec<&str> {
    let mut codes: Vec<&str> = config
        .catalog
        .language_priority
        .iter()
        .map(String::as_str)
        .collect();
    for lang in &config.catalog.languages {
        if !codes.contains(&lang.code.as_str()) {
            codes.push(&lang.code);
        }
    }
    codes
}
