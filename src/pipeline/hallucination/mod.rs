//! Per-item hallucination detection: six independent plausibility checks
//! composed through a fixed table.

pub mod checks;
pub mod detector;
pub mod types;

pub use detector::HallucinationDetector;
pub use types::{ActionItemAnalysis, HallucinationAnalysis, PlausibilityCheck};
