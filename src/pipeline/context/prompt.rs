//! Contextual prompt assembly.
//!
//! The prompt concatenates, in fixed order: the language-specific base
//! instruction, meeting-type guidance, language-specific consistency rules,
//! the transcript block, and the output-schema instructions. Given the same
//! transcript and configuration the result is byte-identical.

use crate::models::{MeetingType, Transcript};

use super::types::ConsistencyContext;

/// Fixed output-schema instructions appended to every prompt. The schema
/// mirrors the wire shape both extractors emit.
pub const OUTPUT_SCHEMA_INSTRUCTIONS: &str = r#"OUTPUT FORMAT:
Respond with a JSON array wrapped in ```json``` fences. One object per action item:

```json
[
  {
    "title": "Short imperative summary",
    "description": "What needs to happen, in one or two sentences",
    "assignedTo": "Participant name or null",
    "dueDate": "YYYY-MM-DD or null",
    "priority": "Low | Medium | High | Critical",
    "type": "Task | Bug | Story | Epic | Investigation | Documentation | Review",
    "context": "Verbatim excerpt from the transcript supporting this item",
    "requiresJiraTicket": true
  }
]
```

Return an empty array [] when the transcript contains no action items."#;

/// Language-specific base instruction.
pub fn base_instruction(language: &str) -> &'static str {
    match language {
        "fr" => {
            "Vous êtes un assistant d'extraction d'actions. Votre seul rôle est \
             d'identifier les actions concrètes décidées pendant la réunion. \
             N'extrayez que ce qui est explicitement dit dans la transcription. \
             N'inventez jamais de tâches, de responsables ou d'échéances."
        }
        "de" => {
            "Sie sind ein Assistent zur Extraktion von Aufgaben. Ihre einzige \
             Rolle ist es, konkrete Aufgaben aus dem Meeting zu identifizieren. \
             Extrahieren Sie nur, was ausdrücklich im Transkript steht. Erfinden \
             Sie niemals Aufgaben, Verantwortliche oder Fristen."
        }
        _ => {
            "You are an action-item extraction assistant. Your ONLY role is to \
             identify concrete, assignable tasks agreed during the meeting. \
             Extract only what is explicitly stated in the transcript. NEVER \
             invent tasks, assignees, or deadlines that are not in the text."
        }
    }
}

/// Language-specific consistency rules.
pub fn consistency_rules(language: &str) -> &'static str {
    match language {
        "fr" => {
            "RÈGLES DE COHÉRENCE:\n\
             1. Chaque action doit citer un extrait exact de la transcription.\n\
             2. Le responsable doit figurer parmi les participants.\n\
             3. Les échéances doivent être explicites dans la transcription.\n\
             4. En cas de doute, omettez l'action."
        }
        "de" => {
            "KONSISTENZREGELN:\n\
             1. Jede Aufgabe muss ein wörtliches Zitat aus dem Transkript enthalten.\n\
             2. Verantwortliche müssen unter den Teilnehmern genannt sein.\n\
             3. Fristen müssen ausdrücklich im Transkript stehen.\n\
             4. Im Zweifel die Aufgabe weglassen."
        }
        _ => {
            "CONSISTENCY RULES:\n\
             1. Every item must quote a verbatim excerpt from the transcript.\n\
             2. Assignees must appear in the participant list.\n\
             3. Due dates must be explicit in the transcript.\n\
             4. When in doubt, leave the item out."
        }
    }
}

/// Meeting-type-specific extraction guidance.
pub fn meeting_guidance(meeting_type: MeetingType) -> &'static str {
    match meeting_type {
        MeetingType::Standup => {
            "This is a daily standup. Focus on today's commitments and blockers. \
             Every item should have an assignee and be achievable within a day."
        }
        MeetingType::Sprint => {
            "This is a sprint meeting. Capture backlog commitments, carry-overs, \
             and sprint-goal tasks. Prefer story/bug typing where stated."
        }
        MeetingType::Architecture => {
            "This is an architecture discussion. Capture design decisions needing \
             follow-up, spikes, and documentation work. Investigations are common."
        }
        MeetingType::ProjectPlanning => {
            "This is a project planning session. Capture milestone-level \
             deliverables with owners and target dates where stated."
        }
        MeetingType::Incident => {
            "This is an incident review. Capture remediation actions, mitigations, \
             and runbook/documentation follow-ups. Mark severity-driven priority; \
             urgent items come first."
        }
        MeetingType::OneOnOne => {
            "This is a one-on-one. Capture personal commitments and growth actions. \
             Most items belong to one of the two participants."
        }
        MeetingType::AllHands => {
            "This is an all-hands. Action items are rare; capture only explicit, \
             owned commitments, not general announcements."
        }
        MeetingType::ClientMeeting => {
            "This is a client meeting. Capture deliverables promised to the client \
             and internal follow-ups, with owners and dates where stated."
        }
        MeetingType::General => {
            "Capture any concrete, assignable tasks agreed during the meeting."
        }
    }
}

/// Assemble the full contextual prompt. Deterministic for a given
/// transcript and context.
pub fn generate_contextual_prompt(transcript: &Transcript, context: &ConsistencyContext) -> String {
    format!(
        "{base}\n\n{guidance}\n\n{rules}\n\n<transcript>\nTitle: {title}\nDate: {date}\nParticipants: {participants}\n\n{content}\n</transcript>\n\n{schema}",
        base = base_instruction(&context.language),
        guidance = meeting_guidance(context.meeting_type),
        rules = consistency_rules(&context.language),
        title = transcript.title,
        date = transcript.meeting_date,
        participants = transcript.participants.join(", "),
        content = transcript.content,
        schema = OUTPUT_SCHEMA_INSTRUCTIONS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MeetingType;

    fn context(meeting_type: MeetingType, language: &str) -> ConsistencyContext {
        ConsistencyContext {
            meeting_type,
            language: language.to_string(),
            confidence_threshold: 0.7,
            default_timeframe_days: 7,
            max_days_out: 365,
            require_assignee: false,
            require_due_date: false,
            prioritize_by_urgency: false,
        }
    }

    fn transcript() -> Transcript {
        Transcript::new("Daily Standup", "Bob will fix the login bug today.")
            .with_participants(&["Alice", "Bob"])
    }

    #[test]
    fn prompt_contains_transcript_block() {
        let prompt = generate_contextual_prompt(&transcript(), &context(MeetingType::Standup, "en"));
        assert!(prompt.contains("<transcript>"));
        assert!(prompt.contains("Title: Daily Standup"));
        assert!(prompt.contains("Participants: Alice, Bob"));
        assert!(prompt.contains("Bob will fix the login bug today."));
        assert!(prompt.contains("</transcript>"));
    }

    #[test]
    fn prompt_sections_appear_in_fixed_order() {
        let ctx = context(MeetingType::Incident, "en");
        let prompt = generate_contextual_prompt(&transcript(), &ctx);
        let base = prompt.find("extraction assistant").expect("base");
        let guidance = prompt.find("incident review").expect("guidance");
        let rules = prompt.find("CONSISTENCY RULES").expect("rules");
        let block = prompt.find("<transcript>").expect("block");
        let schema = prompt.find("OUTPUT FORMAT").expect("schema");
        assert!(base < guidance && guidance < rules && rules < block && block < schema);
    }

    #[test]
    fn prompt_is_deterministic() {
        let ctx = context(MeetingType::Sprint, "en");
        let a = generate_contextual_prompt(&transcript(), &ctx);
        let b = generate_contextual_prompt(&transcript(), &ctx);
        assert_eq!(a, b);
    }

    #[test]
    fn french_context_uses_french_sections() {
        let prompt = generate_contextual_prompt(&transcript(), &context(MeetingType::General, "fr"));
        assert!(prompt.contains("assistant d'extraction"));
        assert!(prompt.contains("RÈGLES DE COHÉRENCE"));
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let prompt = generate_contextual_prompt(&transcript(), &context(MeetingType::General, "xx"));
        assert!(prompt.contains("CONSISTENCY RULES"));
    }

    #[test]
    fn schema_names_wire_fields() {
        assert!(OUTPUT_SCHEMA_INSTRUCTIONS.contains("assignedTo"));
        assert!(OUTPUT_SCHEMA_INSTRUCTIONS.contains("dueDate"));
        assert!(OUTPUT_SCHEMA_INSTRUCTIONS.contains("requiresJiraTicket"));
    }

    #[test]
    fn every_meeting_type_has_guidance() {
        for mt in MeetingType::ALL {
            assert!(!meeting_guidance(*mt).is_empty());
        }
    }
}
