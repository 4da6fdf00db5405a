//! Heuristic Pattern Tables
//!
//! Static keyword/phrase/TLD/shortener lists shared by the analyzers.
//! No logic here - only constants and compiled patterns.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// EMAIL TABLES
// ============================================================================

/// Phrases typical of scam/phishing emails
pub const SCAM_PHRASES: [&str; 6] = [
    "urgent action required",
    "verify your identity",
    "account suspended",
    "click the link",
    "your package is on hold",
    "update payment method",
];

/// Phrases typical of financial fraud attempts
pub const FRAUD_PHRASES: [&str; 4] = [
    "wire transfer",
    "gift card",
    "crypto payment",
    "invoice due",
];

// ============================================================================
// URL TABLES
// ============================================================================

/// URLs longer than this are flagged as unusually long
pub const MAX_URL_CHARS: usize = 75;

/// Known URL shortener domains
pub const URL_SHORTENERS: [&str; 5] = ["bit.ly", "tinyurl", "goo.gl", "t.co", "ow.ly"];

/// Keywords commonly used in credential-phishing URLs
pub const URL_KEYWORDS: [&str; 8] = [
    "login", "verify", "secure", "account", "update", "confirm", "password", "bank",
];

/// Top-level domains with a high abuse rate
pub const SUSPICIOUS_TLDS: [&str; 5] = [".ru", ".cn", ".tk", ".ml", ".ga"];

// ============================================================================
// LOG TABLES
// ============================================================================

/// Account names treated as privileged
pub const PRIVILEGED_ACCOUNTS: [&str; 2] = ["root", "admin"];

/// Event terms that make privileged-account activity suspicious
pub const PRIVILEGED_ALERT_TERMS: [&str; 3] = ["failed", "unauthorized", "escalation"];

/// Keywords and phrases swept for in log/event text.
/// Overlapping entries ("escalation" vs "privilege escalation") can each
/// fire on the same event - that double counting is intentional.
pub const LOG_KEYWORDS: [&str; 14] = [
    "unauthorized",
    "failed login",
    "privilege escalation",
    "escalation",
    "sudo",
    "root access",
    "multiple failed",
    "malicious",
    "attack",
    "breach",
    "suspicious",
    "login attempt",
    "connection refused",
    "denied",
];

/// Address prefixes treated as local-network (not flagged as external)
pub const PRIVATE_IP_PREFIXES: [&str; 3] = ["192.168.", "10.", "127."];

// ============================================================================
// COMPILED PATTERNS
// ============================================================================

/// IPv4 literal: four dot-separated 1-3 digit groups
pub static IPV4_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,3}(?:\.\d{1,3}){3}\b").unwrap());

/// HTTP(S) link embedded in free text
pub static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());
