use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a001_academic_period::PeriodError;
use serde_json::json;
use thiserror::Error;

/// Error returned by every API handler
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Validation(#[from] PeriodError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(e) => tracing::error!("Internal error: {:?}", e),
            other => tracing::warn!("Request rejected ({}): {}", status.as_u16(), other),
        }
        (
            status,
            Json(json!({
                "status": status.as_u16(),
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound("period 2030".into()).status(),
            StatusCode::NOT_FOUND
        );
        let validation = ApiError::from(PeriodError::EndBeforeStart {
            start: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        });
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(anyhow::anyhow!("lock poisoned")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_response_status() {
        let response = ApiError::BadRequest("bad week".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
