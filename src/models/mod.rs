//! Core data model: transcripts and action items.
//!
//! Both types are inputs to the QA pipeline and are treated as read-only —
//! the pipeline computes classifications and scores over them but never
//! mutates them.

pub mod enums;

pub use enums::{ActionItemType, MeetingType, Priority};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A meeting transcript as delivered by the ingestion layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub title: String,
    pub content: String,
    /// Participant names in speaking/attendance order. Duplicates allowed.
    #[serde(default)]
    pub participants: Vec<String>,
    pub meeting_date: NaiveDate,
    /// Language code supplied by the ingestion layer, if any. Detection
    /// runs over content regardless; the hint is informational.
    #[serde(default)]
    pub language_hint: Option<String>,
}

impl Transcript {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            participants: Vec::new(),
            meeting_date: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default(),
            language_hint: None,
        }
    }

    pub fn with_participants(mut self, participants: &[&str]) -> Self {
        self.participants = participants.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.meeting_date = date;
        self
    }
}

/// A proposed action item, produced either by the AI extraction call or by
/// the rule-based baseline extractor. Wire shape uses camelCase field names
/// as emitted by both producers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Due date as written by the producer. Parsed leniently during
    /// temporal-consistency checking; an unparseable value fails only
    /// that check.
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(rename = "type", default)]
    pub item_type: ActionItemType,
    /// Verbatim excerpt from the transcript the producer claims as support.
    #[serde(default)]
    pub context: String,
    #[serde(rename = "requiresJiraTicket", default)]
    pub requires_ticket: bool,
}

impl ActionItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            assigned_to: None,
            due_date: None,
            priority: Priority::Medium,
            item_type: ActionItemType::Task,
            context: String::new(),
            requires_ticket: false,
        }
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    pub fn with_due_date(mut self, due: impl Into<String>) -> Self {
        self.due_date = Some(due.into());
        self
    }

    /// Title and description joined — the text most checks operate on.
    pub fn text(&self) -> String {
        if self.description.trim().is_empty() {
            self.title.clone()
        } else {
            format!("{} {}", self.title, self.description)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_item_wire_shape_decodes() {
        let json = r#"{
            "title": "Fix login bug",
            "description": "Fix the login bug on the auth service",
            "assignedTo": "Alice",
            "dueDate": "2026-09-04",
            "priority": "High",
            "type": "Bug",
            "context": "Alice will fix the login bug by Friday",
            "requiresJiraTicket": true
        }"#;
        let item: ActionItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.assigned_to.as_deref(), Some("Alice"));
        assert_eq!(item.priority, Priority::High);
        assert_eq!(item.item_type, ActionItemType::Bug);
        assert!(item.requires_ticket);
    }

    #[test]
    fn action_item_missing_fields_default() {
        let json = r#"{"title": "Send notes"}"#;
        let item: ActionItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.priority, Priority::Medium);
        assert_eq!(item.item_type, ActionItemType::Task);
        assert!(item.assigned_to.is_none());
        assert!(!item.requires_ticket);
    }

    #[test]
    fn item_text_joins_title_and_description() {
        let item = ActionItem::new("Fix bug", "in the login flow");
        assert_eq!(item.text(), "Fix bug in the login flow");
        let bare = ActionItem::new("Fix bug", "  ");
        assert_eq!(bare.text(), "Fix bug");
    }

    #[test]
    fn transcript_builder() {
        let t = Transcript::new("Sync", "We talked.")
            .with_participants(&["Alice", "Bob"])
            .with_date(NaiveDate::from_ymd_opt(2026, 8, 28).unwrap());
        assert_eq!(t.participants.len(), 2);
        assert_eq!(t.meeting_date.to_string(), "2026-08-28");
    }
}
