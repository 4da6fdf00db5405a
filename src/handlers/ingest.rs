//! Ingest handlers
//!
//! One endpoint per content type. Each validates the payload shape via the
//! Json extractor, runs the matching analyzer, and buckets the score into a
//! risk label. Analysis itself is pure and cannot fail.

use axum::{extract::rejection::JsonRejection, Json};

use crate::error::AppResult;
use crate::models::{ContentType, EmailInput, Envelope, LogInput, UrlInput};
use crate::triage;

/// `POST /ingest/email`
pub async fn email(payload: Result<Json<EmailInput>, JsonRejection>) -> AppResult<Json<Envelope>> {
    let Json(input) = payload?;

    let details = triage::analyze_email(&input);
    let risk = triage::aggregate(details.score);
    tracing::debug!(indicators = details.indicators.len(), risk = %risk, "email triaged");

    Ok(Json(Envelope::new(ContentType::Email, risk, details)))
}

/// `POST /ingest/url`
pub async fn url(payload: Result<Json<UrlInput>, JsonRejection>) -> AppResult<Json<Envelope>> {
    let Json(input) = payload?;

    let details = triage::analyze_url(&input);
    let risk = triage::aggregate(details.score);
    tracing::debug!(indicators = details.indicators.len(), risk = %risk, "url triaged");

    Ok(Json(Envelope::new(ContentType::Url, risk, details)))
}

/// `POST /ingest/log`
pub async fn log(payload: Result<Json<LogInput>, JsonRejection>) -> AppResult<Json<Envelope>> {
    let Json(input) = payload?;

    let details = triage::analyze_log(&input);
    let risk = triage::aggregate(details.score);
    tracing::debug!(indicators = details.indicators.len(), risk = %risk, "log triaged");

    Ok(Json(Envelope::new(ContentType::Log, risk, details)))
}
