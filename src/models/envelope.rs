//! Response envelope
//!
//! The uniform wrapper every ingest endpoint returns. This shape is the
//! whole contract toward the dashboard client.

use serde::{Deserialize, Serialize};

use super::content::ContentType;
use crate::triage::{AnalysisReport, RiskLabel};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub risk_score: RiskLabel,
    pub details: AnalysisReport,
}

impl Envelope {
    pub fn new(content_type: ContentType, risk_score: RiskLabel, details: AnalysisReport) -> Self {
        Self {
            content_type,
            risk_score,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_to_contract_shape() {
        let envelope = Envelope::new(
            ContentType::Url,
            RiskLabel::High,
            AnalysisReport {
                score: 3.0,
                indicators: vec!["URL not using HTTPS".to_string()],
            },
        );

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["type"], "url");
        assert_eq!(value["risk_score"], "HIGH");
        assert_eq!(value["details"]["score"], 3.0);
        assert_eq!(value["details"]["indicators"][0], "URL not using HTTPS");
    }
}
