//! Risk Aggregation
//!
//! Maps an analyzer score onto a coarse risk label via fixed thresholds.
//!
//! The thresholds assume a [0,1] scale, which only the log analyzer emits;
//! the email and URL analyzers pass raw indicator counts straight through.
//! That mismatch is deliberate - existing deployments bucket a single fired
//! email/URL check as HIGH, and this implementation reproduces it.

use super::types::RiskLabel;

/// At or above this score = HIGH
pub const HIGH_THRESHOLD: f32 = 0.7;

/// At or above this score (below HIGH) = MEDIUM
pub const MEDIUM_THRESHOLD: f32 = 0.4;

/// Bucket a numeric score into a risk label
pub fn aggregate(score: f32) -> RiskLabel {
    if score >= HIGH_THRESHOLD {
        RiskLabel::High
    } else if score >= MEDIUM_THRESHOLD {
        RiskLabel::Medium
    } else {
        RiskLabel::Low
    }
}
