use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use services::{AccountError, ProgressError};
use storage::StorageError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Range(String),

    #[error("storage is unavailable")]
    Unavailable,

    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'static str,
    message: &'a str,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Range(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::Conflict(_) => "conflict",
            ApiError::Auth(_) => "auth",
            ApiError::NotFound(_) => "not_found",
            ApiError::Range(_) => "range",
            ApiError::Unavailable => "unavailable",
            ApiError::Internal => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let body = ErrorBody {
            error: self.kind(),
            message: &message,
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Connection(detail) => {
                error!(%detail, "storage unavailable");
                ApiError::Unavailable
            }
            StorageError::NotFound => ApiError::NotFound("not found".to_string()),
            StorageError::Conflict => ApiError::Conflict("conflict".to_string()),
            other => {
                error!(error = %other, "storage failure");
                ApiError::Internal
            }
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(e: AccountError) -> Self {
        let message = e.to_string();
        match e {
            AccountError::Signup(_) => ApiError::Validation(message),
            AccountError::DuplicateEmail => ApiError::Conflict(message),
            AccountError::NotFound => ApiError::NotFound(message),
            AccountError::InvalidCredentials => ApiError::Auth(message),
            AccountError::Storage(inner) => inner.into(),
            _ => {
                error!(error = %message, "account failure");
                ApiError::Internal
            }
        }
    }
}

impl From<ProgressError> for ApiError {
    fn from(e: ProgressError) -> Self {
        match e {
            ProgressError::Range(inner) => ApiError::Range(inner.to_string()),
            ProgressError::InvalidId(inner) => ApiError::Validation(inner.to_string()),
            ProgressError::Storage(inner) => inner.into(),
            other => {
                error!(error = %other, "progress failure");
                ApiError::Internal
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_core::model::{IdError, PercentageError, RoadmapId, SignupError};

    #[test]
    fn account_errors_map_to_statuses() {
        let cases = [
            (
                AccountError::Signup(SignupError::InvalidEmail),
                StatusCode::BAD_REQUEST,
            ),
            (AccountError::DuplicateEmail, StatusCode::CONFLICT),
            (AccountError::NotFound, StatusCode::NOT_FOUND),
            (AccountError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                AccountError::Storage(StorageError::Connection("down".into())),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AccountError::Storage(StorageError::Serialization("bad row".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn progress_errors_map_to_bad_request() {
        let range = ApiError::from(ProgressError::Range(PercentageError::OutOfRange(101.0)));
        assert_eq!(range.status(), StatusCode::BAD_REQUEST);
        assert_eq!(range.kind(), "range");

        let id_err: IdError = RoadmapId::parse(" ").unwrap_err();
        let invalid = ApiError::from(ProgressError::InvalidId(id_err));
        assert_eq!(invalid.kind(), "validation");
    }

    #[test]
    fn unavailable_hides_storage_detail() {
        let err = ApiError::from(StorageError::Connection("/var/db locked".into()));
        assert!(!err.to_string().contains("/var/db"));
    }
}
