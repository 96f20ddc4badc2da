//! Cross-validation of AI-extracted items against the rule-based baseline,
//! plus the rolling metrics history.

pub mod metrics;
pub mod scorer;
pub mod types;

pub use metrics::MetricsAggregator;
pub use scorer::cross_validate;
pub use types::{ValidationMetrics, ValidationResult};
