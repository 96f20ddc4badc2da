//! Shared text primitives: tokenization, overlap measures, sentence
//! splitting, and topic-term extraction.
//!
//! Tokenization is deliberately simple — lowercase, strip punctuation,
//! drop stop words, no stemming. All scoring layers go through these
//! helpers so that "token overlap" means the same thing everywhere.

use std::collections::{BTreeMap, HashSet};

/// Lowercase and split into alphanumeric runs. Punctuation becomes a
/// separator, so "login-bug." yields ["login", "bug"].
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().map(|w| w.to_string()).collect()
}

/// Tokenize and drop stop words, yielding the normalized token set.
pub fn normalize_tokens(text: &str, stop_words: &[String]) -> HashSet<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !stop_words.iter().any(|s| s == t))
        .collect()
}

/// Jaccard overlap of two token sets: |a ∩ b| / |a ∪ b|.
/// Two empty sets overlap nowhere and score 0.0.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Containment overlap: the fraction of `item` tokens present in
/// `reference`. Used when the reference side (a full transcript, a topic
/// set) is much larger than the item, where Jaccard would vanish.
pub fn containment(item: &HashSet<String>, reference: &HashSet<String>) -> f64 {
    if item.is_empty() {
        return 0.0;
    }
    let hits = item.iter().filter(|t| reference.contains(*t)).count();
    hits as f64 / item.len() as f64
}

/// Split text into sentences on terminal punctuation and newlines.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Count whole-word, case-sensitive occurrences of `needle` in `haystack`.
/// Callers lowercase both sides. Multi-word needles ("follow up") match as
/// phrases with the same boundary rules.
pub fn count_whole_word(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        let abs = start + pos;
        let end = abs + needle.len();
        let before_ok = haystack[..abs]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            count += 1;
        }
        start = end;
    }
    count
}

pub fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    count_whole_word(haystack, needle) > 0
}

/// The transcript's dominant topic terms: the `count` highest-frequency
/// non-stopword tokens of length ≥ 3. Ordering ties break alphabetically
/// so the result is deterministic.
pub fn topic_terms(content: &str, stop_words: &[String], count: usize) -> HashSet<String> {
    let mut freq: BTreeMap<String, usize> = BTreeMap::new();
    for token in tokenize(content) {
        if token.len() < 3 || stop_words.iter().any(|s| s == &token) {
            continue;
        }
        *freq.entry(token).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(count).map(|(w, _)| w).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn tokenize_strips_punctuation() {
        assert_eq!(
            tokenize("Fix the login-bug, ASAP!"),
            vec!["fix", "the", "login", "bug", "asap"]
        );
    }

    #[test]
    fn normalize_drops_stop_words() {
        let stops = vec!["the".to_string(), "a".to_string()];
        let tokens = normalize_tokens("Fix the login bug", &stops);
        assert_eq!(tokens, set(&["fix", "login", "bug"]));
    }

    #[test]
    fn jaccard_identical_sets_is_one() {
        let a = set(&["fix", "login", "bug"]);
        assert_eq!(jaccard(&a, &a), 1.0);
    }

    #[test]
    fn jaccard_disjoint_sets_is_zero() {
        assert_eq!(jaccard(&set(&["fix"]), &set(&["buy"])), 0.0);
    }

    #[test]
    fn jaccard_partial_overlap() {
        let a = set(&["fix", "login", "bug"]);
        let b = set(&["fix", "login", "page"]);
        let sim = jaccard(&a, &b);
        assert!((sim - 0.5).abs() < 1e-9, "got {sim}");
    }

    #[test]
    fn jaccard_empty_sets_is_zero() {
        assert_eq!(jaccard(&set(&[]), &set(&[])), 0.0);
    }

    #[test]
    fn containment_item_inside_reference() {
        let item = set(&["fix", "login", "bug"]);
        let reference = set(&["alice", "will", "fix", "login", "bug", "friday"]);
        assert_eq!(containment(&item, &reference), 1.0);
    }

    #[test]
    fn containment_empty_item_is_zero() {
        assert_eq!(containment(&set(&[]), &set(&["anything"])), 0.0);
    }

    #[test]
    fn sentences_split_on_terminals_and_newlines() {
        let s = split_sentences("We shipped it. Next: the rollout!\nAny blockers?");
        assert_eq!(s.len(), 4);
        assert_eq!(s[0], "We shipped it");
    }

    #[test]
    fn whole_word_does_not_match_substrings() {
        assert!(contains_whole_word("the theme is fixed", "the"));
        assert_eq!(count_whole_word("the theme is fixed", "the"), 1);
        assert!(!contains_whole_word("prefixes", "fix"));
    }

    #[test]
    fn whole_word_matches_phrases() {
        assert!(contains_whole_word("please follow up tomorrow", "follow up"));
        assert!(!contains_whole_word("followup tomorrow", "follow up"));
    }

    #[test]
    fn topic_terms_rank_by_frequency() {
        let stops = vec!["the".to_string()];
        let terms = topic_terms(
            "deploy deploy deploy login login bug the the the",
            &stops,
            2,
        );
        assert!(terms.contains("deploy"));
        assert!(terms.contains("login"));
        assert!(!terms.contains("bug"));
        assert!(!terms.contains("the"));
    }

    #[test]
    fn topic_terms_deterministic_on_ties() {
        let stops: Vec<String> = vec![];
        let a = topic_terms("alpha beta gamma", &stops, 2);
        let b = topic_terms("gamma beta alpha", &stops, 2);
        assert_eq!(a, b);
    }
}
