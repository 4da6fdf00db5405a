//! Submitted content types
//!
//! Request payloads for the three ingest endpoints. Fields are free-form
//! strings; emptiness is allowed and handled by the analyzers themselves.

use serde::{Deserialize, Serialize};

/// `POST /ingest/email` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailInput {
    pub sender: String,
    pub subject: String,
    pub body: String,
}

/// `POST /ingest/url` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlInput {
    pub url: String,
}

/// `POST /ingest/log` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogInput {
    pub timestamp: String,
    pub user: String,
    pub event: String,
}

/// Which ingest endpoint produced a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Email,
    Url,
    Log,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Email => "email",
            ContentType::Url => "url",
            ContentType::Log => "log",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
