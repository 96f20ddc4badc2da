use serde::{Deserialize, Serialize};

/// Macro to generate a closed enum with as_str + lenient parse.
///
/// `parse` is deliberately total: unrecognized strings map to the declared
/// fallback variant instead of failing, so malformed model output degrades
/// rather than aborting a pipeline run.
macro_rules! str_enum {
    ($name:ident, fallback = $fallback:ident {
        $($variant:ident => $s:literal $(| $alias:literal)*),+ $(,)?
    }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            /// Case-insensitive parse with fallback for unknown values.
            pub fn parse(s: &str) -> Self {
                match s.to_lowercase().trim() {
                    $($s => Self::$variant,
                      $($alias => Self::$variant,)*)+
                    _ => Self::$fallback,
                }
            }

            pub const ALL: &'static [$name] = &[$(Self::$variant),+];
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$fallback
            }
        }
    };
}

str_enum!(MeetingType, fallback = General {
    General => "general",
    Standup => "standup" | "stand-up" | "daily standup" | "daily",
    Sprint => "sprint" | "sprint planning" | "retrospective",
    Architecture => "architecture" | "design review" | "technical design",
    ProjectPlanning => "project_planning" | "project planning" | "planning",
    Incident => "incident" | "postmortem" | "post-mortem" | "outage",
    OneOnOne => "one_on_one" | "one-on-one" | "1:1" | "1-on-1",
    AllHands => "all_hands" | "all hands" | "all-hands" | "town hall",
    ClientMeeting => "client_meeting" | "client meeting" | "client" | "customer",
});

str_enum!(Priority, fallback = Medium {
    Low => "low" | "minor" | "trivial",
    Medium => "medium" | "normal" | "moderate",
    High => "high" | "important" | "major",
    Critical => "critical" | "urgent" | "blocker",
});

str_enum!(ActionItemType, fallback = Task {
    Task => "task" | "todo" | "action",
    Bug => "bug" | "defect" | "bugfix" | "bug fix",
    Story => "story" | "user story" | "feature",
    Epic => "epic" | "initiative",
    Investigation => "investigation" | "spike" | "research",
    Documentation => "documentation" | "docs" | "doc",
    Review => "review" | "code review" | "audit",
});
