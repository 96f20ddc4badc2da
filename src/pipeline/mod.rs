pub mod context;
pub mod hallucination;
pub mod orchestrator;
pub mod parser;
pub mod text;
pub mod validation;

pub use orchestrator::ExtractionQa;
pub use parser::{parse_action_items, ParseError};
