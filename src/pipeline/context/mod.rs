//! Context classification and extraction-configuration building.

pub mod classify;
pub mod consistency;
pub mod language;
pub mod prompt;
pub mod types;

pub use classify::classify_meeting_type;
pub use consistency::{
    build_consistency_context, build_validation_rules, create_extraction_configuration,
    optimal_parameters,
};
pub use language::detect_language;
pub use prompt::generate_contextual_prompt;
pub use types::{
    ConsistencyContext, ExtractionConfiguration, ExtractionParameters, ValidationRules,
};
