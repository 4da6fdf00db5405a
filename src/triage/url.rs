//! URL Analyzer
//!
//! Flat sequence of lexical checks against a single URL string. Each check
//! contributes at most one indicator.

use url::Url;

use super::tables::{IPV4_PATTERN, MAX_URL_CHARS, SUSPICIOUS_TLDS, URL_KEYWORDS, URL_SHORTENERS};
use super::types::AnalysisReport;
use crate::models::UrlInput;

/// Analyze one URL. Pure function; the score is a raw indicator count (0-6).
pub fn analyze_url(input: &UrlInput) -> AnalysisReport {
    let mut indicators = Vec::new();
    let url_text = input.url.trim().to_lowercase();

    if url_text.chars().count() > MAX_URL_CHARS {
        indicators.push("Unusually long URL".to_string());
    }

    if IPV4_PATTERN.is_match(&url_text) {
        indicators.push("IP address used instead of domain".to_string());
    }

    if URL_SHORTENERS.iter().any(|s| url_text.contains(s)) {
        indicators.push("URL shortener detected".to_string());
    }

    if URL_KEYWORDS.iter().any(|k| url_text.contains(k)) {
        indicators.push("Suspicious keyword in URL".to_string());
    }

    if !url_text.starts_with("https://") {
        indicators.push("URL not using HTTPS".to_string());
    }

    // Scheme-less strings don't parse and carry no host, so they skip
    // the TLD check.
    if let Some(host) = Url::parse(&url_text)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
    {
        if SUSPICIOUS_TLDS.iter().any(|tld| host.ends_with(tld)) {
            indicators.push("Suspicious top-level domain".to_string());
        }
    }

    AnalysisReport::counted(indicators)
}
