//! Email Analyzer
//!
//! Scans subject+body text and the sender field for phishing tells.

use super::tables::{FRAUD_PHRASES, LINK_PATTERN, SCAM_PHRASES};
use super::types::AnalysisReport;
use crate::models::EmailInput;

/// Analyze one email. Pure function; the score is a raw indicator count.
pub fn analyze_email(email: &EmailInput) -> AnalysisReport {
    let mut indicators = Vec::new();

    // Sender is checked separately, everything else as one text blob
    let text = format!("{} {}", email.subject, email.body).to_lowercase();

    if SCAM_PHRASES.iter().any(|p| text.contains(p)) {
        indicators.push("Scam-like language detected".to_string());
    }

    if FRAUD_PHRASES.iter().any(|p| text.contains(p)) {
        indicators.push("Potential financial fraud".to_string());
    }

    let link_count = LINK_PATTERN.find_iter(&text).count();
    if link_count > 0 {
        indicators.push(format!("Contains {link_count} external link(s)"));
    }

    if !email.sender.is_empty() && !email.sender.contains('@') {
        indicators.push("Possible spoofed sender address".to_string());
    }

    AnalysisReport::counted(indicators)
}
