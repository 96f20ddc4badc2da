//! Pipeline configuration: scoring thresholds plus the pattern catalog.
//!
//! Loaded once at startup and shared read-only (`Arc<QaConfig>`) across
//! concurrent validations. Thresholds are data, not constants: the overlap
//! cutoffs in particular should be tuned against representative transcripts.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::PatternCatalog;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Numeric thresholds for scoring and classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum Jaccard similarity for a cross-validation match.
    pub similarity: f64,
    /// Minimum token containment for the context-relevance check.
    pub context_relevance: f64,
    /// Minimum token containment for the topic-coherence check.
    pub topic_coherence: f64,
    /// Items below this confidence are flagged as likely hallucinations.
    pub min_confidence: f64,
    /// Maximum plausible title length in characters.
    pub max_title_length: usize,
    /// Minimum plausible title length in characters.
    pub min_title_length: usize,
    /// Default maximum days a due date may lie in the future.
    pub max_days_out: i64,
    /// Rolling validation history capacity.
    pub history_capacity: usize,
    /// At or below this participant count, classification strongly favors
    /// a one-on-one.
    pub one_on_one_max_participants: usize,
    /// Below this content length (chars), classification favors a standup.
    pub standup_max_content_len: usize,
    /// Minimum word count for the structural plausibility check.
    pub min_item_words: usize,
    /// How many top-frequency terms form the transcript topic set.
    pub topic_term_count: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            similarity: 0.3,
            context_relevance: 0.7,
            topic_coherence: 0.6,
            min_confidence: 0.7,
            max_title_length: 200,
            min_title_length: 4,
            max_days_out: 365,
            history_capacity: 100,
            one_on_one_max_participants: 2,
            standup_max_content_len: 1000,
            min_item_words: 3,
            topic_term_count: 15,
        }
    }
}

/// Full pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QaConfig {
    pub thresholds: Thresholds,
    pub catalog: PatternCatalog,
}

impl QaConfig {
    /// Load from a JSON file. Missing sections fall back to built-in
    /// defaults; the result is validated before being returned.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: QaConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::info!(
            path = %path.as_ref().display(),
            languages = config.catalog.languages.len(),
            "Loaded QA configuration"
        );
        Ok(config)
    }

    /// Reject configurations the pipeline cannot operate on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.languages.is_empty() {
            return Err(ConfigError::Invalid(
                "catalog must define at least one language".into(),
            ));
        }
        for (name, value) in [
            ("similarity", self.thresholds.similarity),
            ("context_relevance", self.thresholds.context_relevance),
            ("topic_coherence", self.thresholds.topic_coherence),
            ("min_confidence", self.thresholds.min_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "threshold {name} must lie in [0,1], got {value}"
                )));
            }
        }
        if self.thresholds.history_capacity == 0 {
            return Err(ConfigError::Invalid(
                "history_capacity must be at least 1".into(),
            ));
        }
        if self.thresholds.min_title_length > self.thresholds.max_title_length {
            return Err(ConfigError::Invalid(
                "min_title_length exceeds max_title_length".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        assert!(QaConfig::default().validate().is_ok());
    }

    #[test]
    fn default_thresholds_match_documented_values() {
        let t = Thresholds::default();
        assert_eq!(t.similarity, 0.3);
        assert_eq!(t.context_relevance, 0.7);
        assert_eq!(t.topic_coherence, 0.6);
        assert_eq!(t.min_confidence, 0.7);
        assert_eq!(t.max_days_out, 365);
        assert_eq!(t.history_capacity, 100);
        assert_eq!(t.one_on_one_max_participants, 2);
        assert_eq!(t.standup_max_content_len, 1000);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"thresholds": {{"similarity": 0.4}}}}"#).unwrap();
        let config = QaConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.thresholds.similarity, 0.4);
        // Untouched fields keep defaults
        assert_eq!(config.thresholds.history_capacity, 100);
        assert!(!config.catalog.languages.is_empty());
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        let config = QaConfig {
            thresholds: Thresholds {
                similarity: 1.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn empty_catalog_rejected() {
        let mut config = QaConfig::default();
        config.catalog.languages.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = QaConfig::from_json_file("/nonexistent/qa.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
