//! HTTP error type shared by every endpoint.
//!
//! Every failure is rendered as `{ "error": message }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::handlers::{AnalyzeTextError, BurnRecordError};

/// Error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Failure of an HTTP handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

impl From<AnalyzeTextError> for ApiError {
    fn from(err: AnalyzeTextError) -> Self {
        match err {
            AnalyzeTextError::MissingText => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<BurnRecordError> for ApiError {
    fn from(err: BurnRecordError) -> Self {
        match err {
            BurnRecordError::Validation(_) => ApiError::BadRequest(err.to_string()),
            BurnRecordError::NotFound(_) => ApiError::NotFound(err.to_string()),
            BurnRecordError::Storage(msg) => {
                tracing::error!(error = %msg, "Burn record storage failure");
                ApiError::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{RecordId, ValidationError};

    #[test]
    fn missing_text_maps_to_400_with_message() {
        let err = ApiError::from(AnalyzeTextError::MissingText);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Text is required");
    }

    #[test]
    fn record_not_found_maps_to_404() {
        let err = ApiError::from(BurnRecordError::NotFound(RecordId::new()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn record_validation_maps_to_400() {
        let err = ApiError::from(BurnRecordError::Validation(ValidationError::empty_field(
            "session_id",
        )));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failure_hides_details() {
        let err = ApiError::from(BurnRecordError::Storage("disk on fire".to_string()));
        assert_eq!(err, ApiError::Internal);
        assert_eq!(err.to_string(), "Internal Server Error");
    }
}
