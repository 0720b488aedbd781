//! Draft submission: input validation and construction of a not-yet-analyzed record.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::analysis::AnalysisRecord;

pub const JD_REQUIRED_MESSAGE: &str = "JD textarea is required.";
pub const JD_TOO_SHORT_MESSAGE: &str =
    "This JD is too short to analyze deeply. Paste full JD for better output.";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnalysisRequest {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    pub jd_text: String,
}

/// Rejects blank JDs and JDs shorter than `min_chars` after trimming.
pub fn validate_jd_text(jd_text: &str, min_chars: usize) -> Result<(), AppError> {
    let trimmed = jd_text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(JD_REQUIRED_MESSAGE.to_string()));
    }
    if trimmed.chars().count() < min_chars {
        return Err(AppError::Validation(JD_TOO_SHORT_MESSAGE.to_string()));
    }
    Ok(())
}

/// Validates the request and builds a draft. The JD is stored as submitted, untrimmed.
pub fn build_draft(request: SubmitAnalysisRequest, min_chars: usize) -> Result<AnalysisRecord, AppError> {
    validate_jd_text(&request.jd_text, min_chars)?;
    Ok(AnalysisRecord::draft(
        request.company,
        request.role,
        request.jd_text,
    ))
}
