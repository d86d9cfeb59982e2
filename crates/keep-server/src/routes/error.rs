//! Error-to-response mapping
//!
//! Every `NoteError` becomes a status code plus the error envelope.
//! Storage causes are logged by the service and never serialized.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use keep::{FieldViolation, NoteError};

use crate::models::{ErrorCode, ErrorDetail, ErrorResponse};

/// HTTP-facing wrapper around a domain error
#[derive(Debug)]
pub struct ApiError(pub NoteError);

impl From<NoteError> for ApiError {
    fn from(err: NoteError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(NoteError::InvalidInput(vec![FieldViolation::new(
            "body",
            rejection.body_text(),
        )]))
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        Self(NoteError::invalid_field("id", "Invalid UUID"))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            NoteError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            NoteError::NotFound => StatusCode::NOT_FOUND,
            NoteError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(self) -> ErrorResponse {
        match self.0 {
            NoteError::InvalidInput(violations) => ErrorResponse::new(
                ErrorCode::InvalidRequest,
                "Invalid request",
                violations.into_iter().map(ErrorDetail::from).collect(),
            ),
            NoteError::NotFound => {
                ErrorResponse::new(ErrorCode::NotFound, "Note not found", Vec::new())
            }
            NoteError::Storage { .. } => {
                ErrorResponse::new(ErrorCode::InternalError, "Internal error", Vec::new())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError(NoteError::invalid_field("title", "title is required")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError(NoteError::NotFound).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError(NoteError::Storage {
                cause: "boom".to_string()
            })
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_cause_is_hidden() {
        let err = ApiError(NoteError::Storage {
            cause: "relation \"notes\" does not exist".to_string(),
        });

        let body = serde_json::to_value(err.body()).unwrap();

        assert_eq!(
            body,
            json!({"error": {"code": "INTERNAL_ERROR", "message": "Internal error"}})
        );
        assert!(!body.to_string().contains("relation"));
    }
}
