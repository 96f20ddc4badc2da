//! Built-in keyword/pattern catalogs.
//!
//! Catalogs are configuration data: immutable lists of meeting-type
//! patterns, per-language word profiles, and action vocabulary. The
//! defaults below cover English, French, and German; deployments can
//! replace them wholesale via [`crate::config::QaConfig::from_json_file`].

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::models::MeetingType;

/// Last-resort profile when a catalog carries no languages at all.
static ENGLISH_FALLBACK: LazyLock<LanguageProfile> = LazyLock::new(english_profile);

/// Keyword patterns that signal one meeting type. Matching is
/// case-insensitive substring search over title + content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingPatterns {
    pub meeting_type: MeetingType,
    pub keywords: Vec<String>,
}

/// Per-language word lists used for detection, tokenization, and
/// action-vocabulary checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// ISO 639-1 code ("en", "fr", "de").
    pub code: String,
    /// High-frequency words counted (whole-word) for language detection.
    pub common_words: Vec<String>,
    /// Words dropped during token normalization.
    pub stop_words: Vec<String>,
    /// Words whose presence marks text as action-oriented.
    pub action_keywords: Vec<String>,
    /// Verbs accepted by structural checks and validation rules.
    pub action_verbs: Vec<String>,
}

/// The full immutable catalog shared read-only across validations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternCatalog {
    pub meeting_patterns: Vec<MeetingPatterns>,
    pub languages: Vec<LanguageProfile>,
    /// Language tie-break order for detection; English first.
    pub language_priority: Vec<String>,
}

impl PatternCatalog {
    pub fn language(&self, code: &str) -> Option<&LanguageProfile> {
        self.languages.iter().find(|l| l.code == code)
    }

    /// Profile for `code`, or the English profile, or the first configured
    /// profile. Total: an empty catalog resolves to the built-in English
    /// profile.
    pub fn language_or_default(&self, code: &str) -> &LanguageProfile {
        self.language(code)
            .or_else(|| self.language("en"))
            .or_else(|| self.languages.first())
            .unwrap_or(&ENGLISH_FALLBACK)
    }

    pub fn patterns_for(&self, meeting_type: MeetingType) -> &[String] {
        self.meeting_patterns
            .iter()
            .find(|p| p.meeting_type == meeting_type)
            .map(|p| p.keywords.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        builtin_catalog()
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn meeting(meeting_type: MeetingType, keywords: &[&str]) -> MeetingPatterns {
    MeetingPatterns {
        meeting_type,
        keywords: words(keywords),
    }
}

/// The built-in catalog. Keyword lists are deliberately short and
/// high-precision; classification falls back to General when nothing
/// scores above zero.
pub fn builtin_catalog() -> PatternCatalog {
    PatternCatalog {
        meeting_patterns: vec![
            meeting(
                MeetingType::Standup,
                &[
                    "standup", "stand-up", "daily", "scrum", "yesterday i",
                    "blockers", "blocked on", "team sync",
                ],
            ),
            meeting(
                MeetingType::Sprint,
                &[
                    "sprint", "backlog", "velocity", "story points", "burndown",
                    "retrospective", "retro", "sprint goal",
                ],
            ),
            meeting(
                MeetingType::Architecture,
                &[
                    "architecture", "design review", "technical design", "scalability",
                    "microservice", "api design", "schema", "data model",
                    "infrastructure", "tech debt",
                ],
            ),
            meeting(
                MeetingType::ProjectPlanning,
                &[
                    "roadmap", "milestone", "project plan", "timeline", "deliverable",
                    "kickoff", "scope", "quarter", "okr",
                ],
            ),
            meeting(
                MeetingType::Incident,
                &[
                    "incident", "outage", "postmortem", "post-mortem", "root cause",
                    "sev1", "sev2", "downtime", "rollback", "on-call", "mitigation",
                ],
            ),
            meeting(
                MeetingType::OneOnOne,
                &[
                    "one-on-one", "1:1", "1-on-1", "career growth", "feedback",
                    "performance review", "check-in", "development plan",
                ],
            ),
            meeting(
                MeetingType::AllHands,
                &[
                    "all hands", "all-hands", "town hall", "company update",
                    "quarterly results", "announcement", "org change",
                ],
            ),
            meeting(
                MeetingType::ClientMeeting,
                &[
                    "client", "customer", "stakeholder", "demo", "contract",
                    "proposal", "account", "renewal", "onboarding call",
                ],
            ),
            // General carries no patterns; it is the zero-score fallback.
            meeting(MeetingType::General, &[]),
        ],
        languages: vec![english_profile(), french_profile(), german_profile()],
        language_priority: vec!["en".into(), "fr".into(), "de".into()],
    }
}

fn english_profile() -> LanguageProfile {
    LanguageProfile {
        code: "en".into(),
        common_words: words(&[
            "the", "and", "is", "to", "of", "in", "that", "for", "we", "will",
            "have", "this", "with", "are", "on", "be", "was", "it", "not", "by",
        ]),
        stop_words: words(&[
            "a", "an", "the", "and", "or", "but", "of", "to", "in", "on", "for",
            "with", "at", "by", "is", "are", "was", "were", "be", "been", "being",
            "this", "that", "these", "those", "it", "its", "as", "from", "will",
            "would", "should", "shall", "can", "could", "may", "we", "our", "us",
            "you", "your", "i", "he", "she", "they", "them", "their", "his", "her",
            "do", "does", "did", "has", "have", "had", "so", "if", "then", "than",
            "about", "up", "out", "into", "over", "after", "before", "all", "any",
            "some", "no", "nor", "too", "very", "just", "also", "there", "here",
            "what", "which", "who", "when", "where", "how", "why", "going", "get",
        ]),
        action_keywords: words(&[
            "fix", "implement", "create", "update", "review", "schedule",
            "investigate", "document", "deploy", "test", "follow up", "prepare",
            "send", "complete", "write", "refactor", "migrate", "set up",
            "finish", "resolve", "escalate", "draft", "verify", "check",
        ]),
        action_verbs: words(&[
            "fix", "implement", "create", "update", "review", "schedule",
            "investigate", "document", "deploy", "test", "prepare", "send",
            "complete", "write", "refactor", "migrate", "finish", "resolve",
            "escalate", "draft", "verify", "check", "follow", "set", "add",
            "remove", "build", "ship", "merge", "organize", "plan", "share",
        ]),
    }
}

fn french_profile() -> LanguageProfile {
    LanguageProfile {
        code: "fr".into(),
        common_words: words(&[
            "le", "la", "les", "de", "et", "est", "un", "une", "des", "du",
            "nous", "pour", "avec", "dans", "que", "qui", "sur", "pas", "sera",
            "ce", "cette", "au", "aux",
        ]),
        stop_words: words(&[
            "le", "la", "les", "de", "des", "du", "un", "une", "et", "ou", "est",
            "sont", "dans", "pour", "avec", "sur", "par", "pas", "que", "qui",
            "ce", "cette", "ces", "au", "aux", "nous", "vous", "ils", "elles",
            "il", "elle", "je", "tu", "son", "sa", "ses", "leur", "mais", "donc",
            "plus", "tout", "tous", "être", "avoir", "fait", "comme", "aussi",
        ]),
        action_keywords: words(&[
            "corriger", "implémenter", "créer", "mettre à jour", "réviser",
            "planifier", "examiner", "documenter", "déployer", "tester",
            "préparer", "envoyer", "terminer", "rédiger", "vérifier", "résoudre",
        ]),
        action_verbs: words(&[
            "corriger", "implémenter", "créer", "mettre", "réviser", "planifier",
            "examiner", "documenter", "déployer", "tester", "préparer", "envoyer",
            "terminer", "rédiger", "vérifier", "résoudre", "organiser", "ajouter",
            "finaliser", "relancer", "partager",
        ]),
    }
}

fn german_profile() -> LanguageProfile {
    LanguageProfile {
        code: "de".into(),
        common_words: words(&[
            "der", "die", "das", "und", "ist", "wir", "für", "mit", "nicht",
            "werden", "ein", "eine", "auf", "zu", "haben", "sind", "von", "im",
            "den", "dass",
        ]),
        stop_words: words(&[
            "der", "die", "das", "und", "oder", "ist", "sind", "ein", "eine",
            "einen", "für", "mit", "auf", "zu", "von", "im", "in", "den", "dem",
            "des", "dass", "nicht", "wir", "ihr", "sie", "er", "es", "ich", "du",
            "haben", "hat", "wird", "werden", "sein", "auch", "aber", "wenn",
            "dann", "noch", "nach", "bei", "als", "wie", "über", "alle",
        ]),
        action_keywords: words(&[
            "beheben", "implementieren", "erstellen", "aktualisieren", "prüfen",
            "planen", "untersuchen", "dokumentieren", "testen", "vorbereiten",
            "senden", "abschließen", "schreiben", "klären", "nachfassen",
        ]),
        action_verbs: words(&[
            "beheben", "implementieren", "erstellen", "aktualisieren", "prüfen",
            "planen", "untersuchen", "dokumentieren", "testen", "vorbereiten",
            "senden", "abschließen", "schreiben", "klären", "organisieren",
            "korrigieren", "teilen", "hinzufügen",
        ]),
    }
}
