//! Triage Types
//!
//! Core types for heuristic analysis. No logic - only data structures.

use serde::{Deserialize, Serialize};

/// Coarse risk buckets derived from a numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLabel {
    /// Nothing fired, or too little to matter
    Low,
    /// Worth a second look
    Medium,
    /// Strong heuristic signal
    High,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "LOW",
            RiskLabel::Medium => "MEDIUM",
            RiskLabel::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of a single analyzer run.
///
/// `indicators` preserves the order checks were evaluated in; duplicates are
/// possible (e.g. one entry per keyword match, one per address found).
/// Email and URL analyzers emit `score` as a raw indicator count, the log
/// analyzer as a fraction capped at 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub score: f32,
    pub indicators: Vec<String>,
}

impl AnalysisReport {
    /// Report scored by raw indicator count
    pub fn counted(indicators: Vec<String>) -> Self {
        Self {
            score: indicators.len() as f32,
            indicators,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_label_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&RiskLabel::Low).unwrap(), "\"LOW\"");
        assert_eq!(serde_json::to_string(&RiskLabel::Medium).unwrap(), "\"MEDIUM\"");
        assert_eq!(serde_json::to_string(&RiskLabel::High).unwrap(), "\"HIGH\"");
    }

    #[test]
    fn counted_report_scores_by_length() {
        let report = AnalysisReport::counted(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(report.score, 3.0);
        assert_eq!(report.indicators.len(), 3);
    }
}
