use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use career_core::aggregate::{ProgressMap, ProgressOverview};
use career_core::model::{Percentage, UserId};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProgressRequest {
    user_id: Option<String>,
    roadmap_id: Option<String>,
    progress: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    user_id: String,
    roadmap_id: String,
    progress: Percentage,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressListResponse {
    user_id: String,
    progress: ProgressMap,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummaryResponse {
    user_id: String,
    #[serde(flatten)]
    overview: ProgressOverview,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::Validation(format!("{field} is required")))
}

pub async fn upsert_progress_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProgressRequest>, JsonRejection>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let Json(req) = payload?;
    let user_id = required(req.user_id, "userId")?;
    let roadmap_id = required(req.roadmap_id, "roadmapId")?;
    let value = required(req.progress, "progress")?;

    let record = state
        .progress
        .upsert_progress(&user_id, &roadmap_id, value)
        .await?;
    Ok(Json(ProgressResponse {
        user_id: record.user_id.to_string(),
        roadmap_id: record.roadmap_id.to_string(),
        progress: record.percentage,
        message: Some("Progress updated successfully"),
    }))
}

pub async fn get_progress_handler(
    State(state): State<AppState>,
    Path((user_id, roadmap_id)): Path<(String, String)>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let progress = state.progress.get_progress(&user_id, &roadmap_id).await?;
    Ok(Json(ProgressResponse {
        user_id,
        roadmap_id,
        progress,
        message: None,
    }))
}

pub async fn list_progress_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProgressListResponse>, ApiError> {
    let progress = state.progress.list_progress(&user_id).await?;
    Ok(Json(ProgressListResponse { user_id, progress }))
}

/// The suggestion falls back to the account's dream job when the id belongs
/// to a known account.
pub async fn progress_summary_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProgressSummaryResponse>, ApiError> {
    let id = UserId::parse(&user_id).map_err(|e| ApiError::Validation(e.to_string()))?;
    let dream_job = state
        .accounts
        .find_by_id(&id)
        .await?
        .map(|profile| profile.dream_job);
    let overview = state.progress.overview(&user_id, dream_job).await?;
    Ok(Json(ProgressSummaryResponse { user_id, overview }))
}
