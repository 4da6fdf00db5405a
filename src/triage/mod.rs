//! Triage Module
//!
//! Heuristic analysis of submitted content. Each analyzer is a pure
//! function from one input type to an [`AnalysisReport`]; the aggregator
//! buckets the report's score into a [`RiskLabel`].
//!
//! ## Structure
//! - `types`: Core types (RiskLabel, AnalysisReport)
//! - `tables`: Static keyword/phrase tables and compiled patterns
//! - `email` / `url` / `log`: The three analyzers
//! - `risk`: Thresholds and score-to-label aggregation

pub mod email;
pub mod log;
pub mod risk;
pub mod tables;
pub mod types;
pub mod url;

pub use email::analyze_email;
pub use log::analyze_log;
pub use risk::aggregate;
pub use types::{AnalysisReport, RiskLabel};
pub use url::analyze_url;
