//! Log Analyzer
//!
//! Sweeps a timestamp/user/event record for privileged-account abuse,
//! suspicious keywords, and embedded IPv4 addresses. Unlike the email and
//! URL analyzers, the score is normalized: 0.25 per indicator, capped at 1.0.

use super::tables::{
    IPV4_PATTERN, LOG_KEYWORDS, PRIVATE_IP_PREFIXES, PRIVILEGED_ACCOUNTS, PRIVILEGED_ALERT_TERMS,
};
use super::types::AnalysisReport;
use crate::models::LogInput;

/// Weight of a single indicator in the normalized score
const INDICATOR_WEIGHT: f32 = 0.25;

/// Analyze one log record. Pure function.
pub fn analyze_log(log: &LogInput) -> AnalysisReport {
    let mut indicators = Vec::new();
    let text = format!("{} {} {}", log.timestamp, log.user, log.event).to_lowercase();

    // Privileged account doing something that smells like failure or abuse
    let user = log.user.to_lowercase();
    if PRIVILEGED_ACCOUNTS.contains(&user.as_str())
        && PRIVILEGED_ALERT_TERMS.iter().any(|t| text.contains(t))
    {
        indicators.push("Suspicious activity under privileged account".to_string());
    }

    // One indicator per matching keyword; overlapping keywords stack
    for keyword in LOG_KEYWORDS {
        if text.contains(keyword) {
            indicators.push(format!("Found keyword: {keyword}"));
        }
    }

    // Every address gets flagged, public addresses twice
    for m in IPV4_PATTERN.find_iter(&text) {
        let ip = m.as_str();
        indicators.push(format!("IP detected: {ip}"));

        if !PRIVATE_IP_PREFIXES.iter().any(|p| ip.starts_with(p)) {
            indicators.push(format!("External IP detected: {ip}"));
        }
    }

    let score = (indicators.len() as f32 * INDICATOR_WEIGHT).min(1.0);
    AnalysisReport { score, indicators }
}
