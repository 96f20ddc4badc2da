//! The six plausibility checks.
//!
//! Each check is an independent pure function over (item, check context)
//! returning pass/fail plus a reason on failure. New checks slot into the
//! `CHECKS` table without touching aggregation code.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::catalog::LanguageProfile;
use crate::config::Thresholds;
use crate::models::{ActionItem, Transcript};
use crate::pipeline::text::{containment, contains_whole_word, normalize_tokens};
use crate::pipeline::validation::scorer::is_participant;

use super::types::{CheckOutcome, PlausibilityCheck};

/// Precomputed transcript-level context shared by all checks for one
/// analysis run.
pub struct CheckContext<'a> {
    pub transcript: &'a Transcript,
    pub content_tokens: HashSet<String>,
    pub topic_tokens: HashSet<String>,
    pub profile: &'a LanguageProfile,
    pub thresholds: &'a Thresholds,
}

pub type CheckFn = fn(&ActionItem, &CheckContext<'_>) -> CheckOutcome;

/// The fixed check table. Confidence is passed-count / table length.
pub const CHECKS: [(PlausibilityCheck, CheckFn); 6] = [
    (PlausibilityCheck::ContextRelevance, check_context_relevance),
    (PlausibilityCheck::AssigneeValidation, check_assignee),
    (PlausibilityCheck::KeywordVerification, check_keywords),
    (PlausibilityCheck::StructuralAnalysis, check_structure),
    (PlausibilityCheck::TemporalConsistency, check_temporal),
    (PlausibilityCheck::TopicCoherence, check_topic_coherence),
];

/// Assignee values that name the group rather than a person always pass.
const COLLECTIVE_ASSIGNEES: &[&str] = &["team", "everyone", "all", "anyone", "group", "unassigned", "tbd"];

/// Items starting with a lowercase connective read like sentence fragments
/// clipped out of context.
static FRAGMENT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:and|but|or|so|then|also|because|which|that)\b").unwrap()
});

fn item_tokens(item: &ActionItem, ctx: &CheckContext<'_>) -> HashSet<String> {
    normalize_tokens(&item.text(), &ctx.profile.stop_words)
}

/// Check 1: the item's normalized tokens must be substantially present in
/// the transcript content.
fn check_context_relevance(item: &ActionItem, ctx: &CheckContext<'_>) -> CheckOutcome {
    let tokens = item_tokens(item, ctx);
    let overlap = containment(&tokens, &ctx.content_tokens);
    if overlap >= ctx.thresholds.context_relevance {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail(format!(
            "'{}': only {:.0}% of item wording appears in the transcript",
            item.title,
            overlap * 100.0
        ))
    }
}

/// Check 2: a named assignee must be a participant (or a collective
/// marker). Items with no assignee pass automatically.
fn check_assignee(item: &ActionItem, ctx: &CheckContext<'_>) -> CheckOutcome {
    let Some(name) = item.assigned_to.as_deref() else {
        return CheckOutcome::pass();
    };
    let lowered = name.trim().to_lowercase();
    if lowered.is_empty() || COLLECTIVE_ASSIGNEES.contains(&lowered.as_str()) {
        return CheckOutcome::pass();
    }
    if is_participant(name, &ctx.transcript.participants) {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail(format!(
            "'{}': assignee '{name}' is not among the participants",
            item.title
        ))
    }
}

/// Check 3: the item text must contain at least one configured action
/// keyword.
fn check_keywords(item: &ActionItem, ctx: &CheckContext<'_>) -> CheckOutcome {
    let text = item.text().to_lowercase();
    let has_keyword = ctx
        .profile
        .action_keywords
        .iter()
        .any(|k| contains_whole_word(&text, k));
    if has_keyword {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail(format!("'{}': no recognizable action keyword", item.title))
    }
}

/// Check 4: plausible task shape — enough words, an action verb, and no
/// leading fragment marker.
fn check_structure(item: &ActionItem, ctx: &CheckContext<'_>) -> CheckOutcome {
    let text = item.text();
    let word_count = text.split_whitespace().count();
    if word_count < ctx.thresholds.min_item_words {
        return CheckOutcome::fail(format!(
            "'{}': only {word_count} words, below the structural minimum",
            item.title
        ));
    }
    if FRAGMENT_MARKER.is_match(text.trim_start()) {
        return CheckOutcome::fail(format!(
            "'{}': starts with a connective, reads like a fragment",
            item.title
        ));
    }
    let lowered = text.to_lowercase();
    let has_verb = ctx
        .profile
        .action_verbs
        .iter()
        .any(|v| contains_whole_word(&lowered, v));
    if has_verb {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail(format!("'{}': no action verb found", item.title))
    }
}

/// Check 5: a due date, when present, must parse and fall within
/// [meeting date, meeting date + max days out]. Items without one pass.
fn check_temporal(item: &ActionItem, ctx: &CheckContext<'_>) -> CheckOutcome {
    let Some(raw) = item.due_date.as_deref() else {
        return CheckOutcome::pass();
    };
    if raw.trim().is_empty() {
        return CheckOutcome::pass();
    }
    let Some(due) = parse_due_date(raw) else {
        return CheckOutcome::fail(format!(
            "'{}': due date '{raw}' is not a recognizable date",
            item.title
        ));
    };
    let meeting = ctx.transcript.meeting_date;
    if due < meeting {
        return CheckOutcome::fail(format!(
            "'{}': due date {due} predates the meeting ({meeting})",
            item.title
        ));
    }
    let horizon = meeting + chrono::Duration::days(ctx.thresholds.max_days_out);
    if due > horizon {
        CheckOutcome::fail(format!(
            "'{}': due date {due} is more than {} days out",
            item.title, ctx.thresholds.max_days_out
        ))
    } else {
        CheckOutcome::pass()
    }
}

/// Check 6: the item must share wording with the transcript's dominant
/// topic terms.
fn check_topic_coherence(item: &ActionItem, ctx: &CheckContext<'_>) -> CheckOutcome {
    let tokens = item_tokens(item, ctx);
    let overlap = containment(&tokens, &ctx.topic_tokens);
    if overlap >= ctx.thresholds.topic_coherence {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail(format!(
            "'{}': item wording diverges from the meeting's dominant topics",
            item.title
        ))
    }
}

/// Lenient multi-format due-date parsing. Handles ISO, European and US
/// numeric forms, and English textual dates.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        return None;
    }
    for format in ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    // Textual: "January 15, 2026" / "15 January 2026"
    for format in ["%B %d, %Y", "%B %d %Y", "%d %B %Y", "%b %d, %Y", "%d %b %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use crate::pipeline::text::topic_terms;

    fn transcript() -> Transcript {
        Transcript::new(
            "Team Sync",
            "Alice will fix the login bug by Friday. Bob will update the deployment docs.",
        )
        .with_participants(&["Alice", "Bob"])
        .with_date(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap())
    }

    fn run_check(check: CheckFn, item: &ActionItem) -> CheckOutcome {
        let catalog = builtin_catalog();
        let profile = catalog.language_or_default("en");
        let thresholds = Thresholds::default();
        let t = transcript();
        let content_tokens = normalize_tokens(&t.content, &profile.stop_words);
        let topic_tokens = topic_terms(&t.content, &profile.stop_words, thresholds.topic_term_count);
        let ctx = CheckContext {
            transcript: &t,
            content_tokens,
            topic_tokens,
            profile,
            thresholds: &thresholds,
        };
        check(item, &ctx)
    }

    #[test]
    fn grounded_item_is_context_relevant() {
        let item = ActionItem::new("Fix login bug", "Fix the login bug");
        assert!(run_check(check_context_relevance, &item).passed);
    }

    #[test]
    fn unrelated_item_fails_context_relevance() {
        let item = ActionItem::new("Buy groceries", "Get milk and bread");
        let outcome = run_check(check_context_relevance, &item);
        assert!(!outcome.passed);
        assert!(outcome.reason.unwrap().contains("Buy groceries"));
    }

    #[test]
    fn known_assignee_passes() {
        let item = ActionItem::new("Fix login bug", "Fix it").with_assignee("Alice");
        assert!(run_check(check_assignee, &item).passed);
    }

    #[test]
    fn unknown_assignee_fails() {
        let item = ActionItem::new("Fix login bug", "Fix it").with_assignee("Zoe");
        assert!(!run_check(check_assignee, &item).passed);
    }

    #[test]
    fn no_assignee_passes_automatically() {
        let item = ActionItem::new("Fix login bug", "Fix it");
        assert!(run_check(check_assignee, &item).passed);
    }

    #[test]
    fn collective_assignee_passes() {
        let item = ActionItem::new("Fix login bug", "Fix it").with_assignee("Team");
        assert!(run_check(check_assignee, &item).passed);
    }

    #[test]
    fn action_keyword_detected() {
        let item = ActionItem::new("Fix login bug", "Fix the login bug");
        assert!(run_check(check_keywords, &item).passed);
    }

    #[test]
    fn missing_action_keyword_fails() {
        let item = ActionItem::new("Groceries", "Milk and bread");
        assert!(!run_check(check_keywords, &item).passed);
    }

    #[test]
    fn fragment_fails_structure() {
        let item = ActionItem::new("and then the rest", "and then we talk about it more");
        assert!(!run_check(check_structure, &item).passed);
    }

    #[test]
    fn too_few_words_fails_structure() {
        let item = ActionItem::new("Fix it", "");
        assert!(!run_check(check_structure, &item).passed);
    }

    #[test]
    fn verbless_item_fails_structure() {
        let item = ActionItem::new("The quarterly numbers", "General market ambiance");
        assert!(!run_check(check_structure, &item).passed);
    }

    #[test]
    fn well_shaped_item_passes_structure() {
        let item = ActionItem::new("Fix login bug", "Fix the login bug on the auth flow");
        assert!(run_check(check_structure, &item).passed);
    }

    #[test]
    fn due_date_after_meeting_passes() {
        let item = ActionItem::new("Fix login bug", "Fix it").with_due_date("2026-08-28");
        assert!(run_check(check_temporal, &item).passed);
    }

    #[test]
    fn due_date_before_meeting_fails() {
        let item = ActionItem::new("Fix login bug", "Fix it").with_due_date("2026-08-01");
        let outcome = run_check(check_temporal, &item);
        assert!(!outcome.passed);
        assert!(outcome.reason.unwrap().contains("predates"));
    }

    #[test]
    fn due_date_beyond_horizon_fails() {
        let item = ActionItem::new("Fix login bug", "Fix it").with_due_date("2031-01-01");
        assert!(!run_check(check_temporal, &item).passed);
    }

    #[test]
    fn malformed_due_date_fails_only_temporal() {
        let item = ActionItem::new("Fix login bug", "Fix the login bug")
            .with_due_date("sometime soon");
        assert!(!run_check(check_temporal, &item).passed);
        // Other checks are unaffected by the bad date.
        assert!(run_check(check_context_relevance, &item).passed);
        assert!(run_check(check_keywords, &item).passed);
    }

    #[test]
    fn missing_due_date_passes() {
        let item = ActionItem::new("Fix login bug", "Fix it");
        assert!(run_check(check_temporal, &item).passed);
    }

    #[test]
    fn topic_coherent_item_passes() {
        let item = ActionItem::new("Fix login bug", "Fix the login bug");
        assert!(run_check(check_topic_coherence, &item).passed);
    }

    #[test]
    fn off_topic_item_fails_topic_coherence() {
        let item = ActionItem::new("Buy groceries", "Get milk and bread for lunch");
        assert!(!run_check(check_topic_coherence, &item).passed);
    }

    #[test]
    fn parse_due_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 9, 4).unwrap();
        assert_eq!(parse_due_date("2026-09-04"), Some(expected));
        assert_eq!(parse_due_date("04/09/2026"), Some(expected));
        assert_eq!(parse_due_date("September 4, 2026"), Some(expected));
        assert_eq!(parse_due_date("4 September 2026"), Some(expected));
        assert_eq!(parse_due_date("garbage"), None);
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("null"), None);
    }

    #[test]
    fn check_table_has_six_entries() {
        assert_eq!(CHECKS.len(), 6);
    }
}
