//! Lenient decoding of raw model output into action items.
//!
//! The model is instructed to answer with a fenced JSON array, but real
//! responses drift: prose around the fence, missing fences, stray fields,
//! odd priority spellings. Decoding recovers what it can — an undecodable
//! element is skipped, not fatal — and only fails when no JSON payload
//! exists at all.

use serde::Deserialize;
use thiserror::Error;

use crate::models::{ActionItem, ActionItemType, Priority};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("no JSON array found in model response")]
    MissingJson,

    #[error("JSON decode error: {0}")]
    Json(String),
}

/// Raw wire-shape item with everything optional; converted leniently.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawActionItem {
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    assigned_to: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    priority: Option<String>,
    #[serde(rename = "type", default)]
    item_type: Option<String>,
    #[serde(default)]
    context: Option<String>,
    #[serde(rename = "requiresJiraTicket", default)]
    requires_ticket: Option<bool>,
}

/// Decode a model response into action items. Items without a title are
/// dropped; unknown priority/type strings fall back to their defaults.
pub fn parse_action_items(response: &str) -> Result<Vec<ActionItem>, ParseError> {
    let payload = extract_json_payload(response).ok_or(ParseError::MissingJson)?;

    let values: Vec<serde_json::Value> =
        serde_json::from_str(payload).map_err(|e| ParseError::Json(e.to_string()))?;

    let total = values.len();
    let items: Vec<ActionItem> = values
        .into_iter()
        .filter_map(|v| serde_json::from_value::<RawActionItem>(v).ok())
        .filter_map(convert_item)
        .collect();

    if items.len() < total {
        tracing::warn!(
            decoded = items.len(),
            total,
            "Dropped undecodable action items from model response"
        );
    }
    Ok(items)
}

fn convert_item(raw: RawActionItem) -> Option<ActionItem> {
    let title = raw.title?.trim().to_string();
    if title.is_empty() {
        return None;
    }
    Some(ActionItem {
        title,
        description: raw.description.unwrap_or_default(),
        assigned_to: raw
            .assigned_to
            .filter(|a| !a.trim().is_empty() && !a.eq_ignore_ascii_case("null")),
        due_date: raw
            .due_date
            .filter(|d| !d.trim().is_empty() && !d.eq_ignore_ascii_case("null")),
        priority: raw
            .priority
            .map(|p| Priority::parse(&p))
            .unwrap_or_default(),
        item_type: raw
            .item_type
            .map(|t| ActionItemType::parse(&t))
            .unwrap_or_default(),
        context: raw.context.unwrap_or_default(),
        requires_ticket: raw.requires_ticket.unwrap_or(false),
    })
}

/// Prefer a ```json fenced block; fall back to the outermost bare array.
fn extract_json_payload(response: &str) -> Option<&str> {
    if let Some(fence_start) = response.find("```json") {
        let content_start = fence_start + 7;
        if let Some(fence_len) = response[content_start..].find("```") {
            let inner = response[content_start..content_start + fence_len].trim();
            if !inner.is_empty() {
                return Some(inner);
            }
        }
    }
    let start = response.find('[')?;
    let end = response.rfind(']')?;
    if end > start {
        Some(&response[start..=end])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fenced_array() {
        let response = r#"Here are the extracted items:

```json
[
  {
    "title": "Fix login bug",
    "description": "Fix the login bug on the auth service",
    "assignedTo": "Alice",
    "dueDate": "2026-09-04",
    "priority": "High",
    "type": "Bug",
    "context": "Alice will fix the login bug by Friday",
    "requiresJiraTicket": true
  }
]
```

Let me know if you need anything else."#;
        let items = parse_action_items(response).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Fix login bug");
        assert_eq!(items[0].priority, Priority::High);
        assert_eq!(items[0].item_type, ActionItemType::Bug);
        assert!(items[0].requires_ticket);
    }

    #[test]
    fn parses_bare_array_without_fences() {
        let response = r#"[{"title": "Send notes", "description": "Send the notes"}]"#;
        let items = parse_action_items(response).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].priority, Priority::Medium);
    }

    #[test]
    fn empty_array_is_ok() {
        assert!(parse_action_items("```json\n[]\n```").unwrap().is_empty());
    }

    #[test]
    fn prose_only_response_is_missing_json() {
        let err = parse_action_items("The meeting had no action items.").unwrap_err();
        assert!(matches!(err, ParseError::MissingJson));
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let err = parse_action_items("[{not json]").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn untitled_items_are_dropped() {
        let response = r#"[
            {"title": "Fix login bug", "description": "Fix it"},
            {"description": "orphan description"},
            {"title": "   "}
        ]"#;
        let items = parse_action_items(response).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn null_like_strings_become_none() {
        let response = r#"[{"title": "Fix login bug", "assignedTo": "null", "dueDate": ""}]"#;
        let items = parse_action_items(response).unwrap();
        assert!(items[0].assigned_to.is_none());
        assert!(items[0].due_date.is_none());
    }

    #[test]
    fn odd_priority_spellings_fall_back() {
        let response =
            r#"[{"title": "Fix login bug", "priority": "URGENT", "type": "bug fix"}]"#;
        let items = parse_action_items(response).unwrap();
        assert_eq!(items[0].priority, Priority::Critical);
        assert_eq!(items[0].item_type, ActionItemType::Bug);
    }
}
