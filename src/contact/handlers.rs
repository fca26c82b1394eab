use axum::http::StatusCode;
use axum::Json;
use regex::Regex;

use super::types::{ContactRequest, ReportRequest, SubmissionResponse};

// Local part, one @, dotted domain with an alphabetic TLD.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

pub fn is_valid_email(email: &str) -> bool {
    let re = Regex::new(EMAIL_PATTERN).unwrap();
    re.is_match(email.trim())
}

/// Returns the first failed check, so the client can show one clear message.
pub fn validate_contact(request: &ContactRequest) -> Result<(), &'static str> {
    if request.name.trim().is_empty() {
        return Err("name is required");
    }
    if request.email.trim().is_empty() {
        return Err("email is required");
    }
    if !is_valid_email(&request.email) {
        return Err("email address is not valid");
    }
    if request.message.trim().is_empty() {
        return Err("message is required");
    }
    Ok(())
}

pub fn validate_report(request: &ReportRequest) -> Result<(), &'static str> {
    if request.email.trim().is_empty() {
        return Err("email is required");
    }
    if !is_valid_email(&request.email) {
        return Err("email address is not valid");
    }
    Ok(())
}

/// POST /api/contact
pub async fn handle_contact(
    Json(request): Json<ContactRequest>,
) -> (StatusCode, Json<SubmissionResponse>) {
    if let Err(reason) = validate_contact(&request) {
        tracing::debug!("Rejected contact submission: {}", reason);
        return (
            StatusCode::BAD_REQUEST,
            Json(SubmissionResponse::rejected(reason)),
        );
    }

    let reference = uuid::Uuid::new_v4().to_string();
    tracing::info!(
        "Contact submission {} from {} <{}>",
        reference,
        request.name.trim(),
        request.email.trim()
    );
    (
        StatusCode::OK,
        Json(SubmissionResponse::accepted(reference)),
    )
}

/// POST /api/download-report
pub async fn handle_download_report(
    Json(request): Json<ReportRequest>,
) -> (StatusCode, Json<SubmissionResponse>) {
    if let Err(reason) = validate_report(&request) {
        tracing::debug!("Rejected report request: {}", reason);
        return (
            StatusCode::BAD_REQUEST,
            Json(SubmissionResponse::rejected(reason)),
        );
    }

    let reference = uuid::Uuid::new_v4().to_string();
    tracing::info!(
        "Sample report requested by <{}> ({})",
        request.email.trim(),
        reference
    );
    (
        StatusCode::OK,
        Json(SubmissionResponse::accepted(reference)),
    )
}
