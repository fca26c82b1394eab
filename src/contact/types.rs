use serde::{Deserialize, Serialize};

/// Contact form body. Everything defaults to empty so missing fields reach
/// validation (and a proper 400) instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

/// Sample-report request body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportRequest {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResponse {
    pub fn accepted(reference: String) -> Self {
        Self {
            success: true,
            reference: Some(reference),
            error: None,
        }
    }

    pub fn rejected(reason: &str) -> Self {
        Self {
            success: false,
            reference: None,
            error: Some(reason.to_string()),
        }
    }
}
