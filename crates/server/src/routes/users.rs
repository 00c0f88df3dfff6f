use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use career_core::model::{Profile, SignupDraft};
use serde::Deserialize;
use tracing::debug;

use super::TextOrNumber;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SignupRequest {
    full_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    dream_job: Option<String>,
    daily_time: Option<TextOrNumber>,
}

impl From<SignupRequest> for SignupDraft {
    fn from(req: SignupRequest) -> Self {
        SignupDraft {
            full_name: req.full_name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            password: req.password.unwrap_or_default(),
            dream_job: req.dream_job.unwrap_or_default(),
            daily_time: req.daily_time.map(TextOrNumber::into_text).unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

pub async fn signup_handler(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Profile>), ApiError> {
    let Json(req) = payload?;
    let profile = state.accounts.create_user(req.into()).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Profile>, ApiError> {
    let Json(req) = payload?;
    let (Some(email), Some(password)) = (req.email, req.password) else {
        return Err(ApiError::Validation(
            "email and password are required".to_string(),
        ));
    };
    if email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "email and password are required".to_string(),
        ));
    }

    let profile = state.accounts.verify_credentials(&email, &password).await?;
    Ok(Json(profile))
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    debug!(%email, "profile lookup");
    let profile = state.accounts.find_by_email(&email).await?;
    Ok(Json(profile))
}
