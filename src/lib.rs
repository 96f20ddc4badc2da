//! minuteguard — quality assurance for AI-extracted meeting action items.
//!
//! Meeting transcripts go through an LLM extraction step that proposes
//! action items; this crate decides how trustworthy those proposals are
//! and how the extraction request should be shaped in the first place:
//!
//! 1. **Context** — classify the meeting type and dominant language, then
//!    build the prompt, model parameters, and validation rules the external
//!    model caller must use ([`pipeline::context`]).
//! 2. **Cross-validation** — score the AI-proposed items against the
//!    independently produced rule-based baseline list along four weighted
//!    dimensions ([`pipeline::validation`]).
//! 3. **Hallucination detection** — run six independent plausibility
//!    checks per item and filter out what the transcript does not support
//!    ([`pipeline::hallucination`]).
//!
//! The core is pure and synchronous: it never performs I/O, never mutates
//! its inputs, and never fails on malformed input — scores degrade instead.
//! The only mutable state is the bounded rolling history of validation
//! outcomes inside [`pipeline::ExtractionQa`].

pub mod catalog;
pub mod config;
pub mod models;
pub mod pipeline;

pub use config::{ConfigError, QaConfig};
pub use models::{ActionItem, ActionItemType, MeetingType, Priority, Transcript};
pub use pipeline::ExtractionQa;
