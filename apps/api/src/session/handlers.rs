//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::analysis::{extract_skills, ExtractedSkills};
use crate::errors::AppError;
use crate::models::analysis::AnalysisRecord;
use crate::session::draft::SubmitAnalysisRequest;
use crate::session::export::{export_file_name, render_export_text};
use crate::session::ship_gate::ShipStatus;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractSkillsRequest {
    pub jd_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleConfidenceRequest {
    pub skill: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/extract
///
/// Stateless classification preview. Nothing is persisted.
pub async fn handle_extract_skills(
    Json(request): Json<ExtractSkillsRequest>,
) -> Json<ExtractedSkills> {
    Json(extract_skills(&request.jd_text))
}

/// POST /api/v1/analyses
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitAnalysisRequest>,
) -> Result<(StatusCode, Json<AnalysisRecord>), AppError> {
    let draft = state.session.submit(request).await?;
    Ok((StatusCode::CREATED, Json(draft)))
}

/// GET /api/v1/analyses/current
///
/// Analyzes the current draft on first view; later views return the stored record as is.
pub async fn handle_get_current(
    State(state): State<AppState>,
) -> Result<Json<AnalysisRecord>, AppError> {
    state
        .session
        .load_current()
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No current analysis".to_string()))
}

/// POST /api/v1/analyses/current/confidence
pub async fn handle_toggle_confidence(
    State(state): State<AppState>,
    Json(request): Json<ToggleConfidenceRequest>,
) -> Result<Json<AnalysisRecord>, AppError> {
    if request.skill.trim().is_empty() {
        return Err(AppError::Validation("skill cannot be empty".to_string()));
    }
    let record = state.session.toggle_confidence(&request.skill).await?;
    Ok(Json(record))
}

/// GET /api/v1/analyses/current/export
pub async fn handle_export_current(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .session
        .load_current()
        .await?
        .ok_or_else(|| AppError::NotFound("No current analysis".to_string()))?;

    let disposition = format!("attachment; filename=\"{}\"", export_file_name(&record));
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        render_export_text(&record),
    ))
}

/// GET /api/v1/analyses/history
pub async fn handle_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalysisRecord>>, AppError> {
    Ok(Json(state.session.history().await?))
}

/// POST /api/v1/analyses/history/:id/open
pub async fn handle_open_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisRecord>, AppError> {
    Ok(Json(state.session.open_from_history(id).await?))
}

/// DELETE /api/v1/analyses/history/:id
pub async fn handle_delete_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.session.delete_from_history(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/ship-status
pub async fn handle_ship_status(
    State(state): State<AppState>,
) -> Result<Json<ShipStatus>, AppError> {
    Ok(Json(state.session.ship_status().await?))
}
