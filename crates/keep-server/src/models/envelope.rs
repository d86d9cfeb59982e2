//! Response Envelope
//!
//! Uniform success and error bodies returned by every note endpoint.

use serde::Serialize;
use utoipa::ToSchema;

use keep::FieldViolation;

/// Success envelope: `{message, data}`
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Error envelope: `{error: {code, message, details?}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}

/// Field-level detail of an INVALID_REQUEST error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Offending field
    pub reason: String,
    pub message: String,
}

impl From<FieldViolation> for ErrorDetail {
    fn from(v: FieldViolation) -> Self {
        Self {
            reason: v.field,
            message: v.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidRequest,
    NotFound,
    InternalError,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Vec<ErrorDetail>) -> Self {
        Self {
            error: ErrorBody {
                code,
                message: message.into(),
                details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_without_details_omits_key() {
        let body = ErrorResponse::new(ErrorCode::NotFound, "Note not found", Vec::new());

        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"error": {"code": "NOT_FOUND", "message": "Note not found"}})
        );
    }

    #[test]
    fn test_error_details_use_reason_key() {
        let body = ErrorResponse::new(
            ErrorCode::InvalidRequest,
            "Invalid request",
            vec![FieldViolation::new("id", "Invalid UUID").into()],
        );

        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"error": {
                "code": "INVALID_REQUEST",
                "message": "Invalid request",
                "details": [{"reason": "id", "message": "Invalid UUID"}]
            }})
        );
    }

    #[test]
    fn test_success_with_empty_list_is_array() {
        let body = SuccessResponse::new("Notes found", Vec::<u8>::new());
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"message": "Notes found", "data": []})
        );
    }
}
