use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use smartkheti_core::domain::common::entities::app_errors::CoreError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// HTTP-facing error. `Validation` serializes as `{"errors": {field: [..]}}`,
/// everything else as `{"error": message}`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("validation failed")]
    Validation(BTreeMap<String, Vec<String>>),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Single field error, shaped exactly like the validator-derived case.
    pub fn field_error(field: &str, message: &str) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.to_string(), vec![message.to_string()]);
        ApiError::Validation(errors)
    }

    pub fn from_validation(errors: ValidationErrors) -> Self {
        let errors = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{} is invalid", field))
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        ApiError::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::Validation(errors) => json!({ "errors": errors }),
            other => json!(ErrorBody {
                error: other.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            // A broken upload is reported against the field that carried it.
            CoreError::ImageDecode(_) => ApiError::field_error("image", "Upload a valid image."),
            CoreError::PhoneNotRegistered | CoreError::IncorrectOtp | CoreError::OtpExpired => {
                ApiError::BadRequest(error.to_string())
            }
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::Conflict(message) => ApiError::Conflict(message),
            CoreError::NotFound => ApiError::NotFound(error.to_string()),
            CoreError::Forbidden => ApiError::Forbidden(error.to_string()),
            CoreError::InvalidCredentials => ApiError::Unauthorized(error.to_string()),
            CoreError::Inference(_)
            | CoreError::ShapeMismatch(_)
            | CoreError::ObjectStorage(_)
            | CoreError::ExternalService(_)
            | CoreError::InternalServerError => {
                error!("request failed: {}", error);
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failure_maps_to_field_error_on_image() {
        let api_error = ApiError::from(CoreError::ImageDecode("bad jpeg".into()));

        assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);
        match api_error {
            ApiError::Validation(errors) => {
                assert_eq!(errors["image"], vec!["Upload a valid image.".to_string()]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn otp_errors_are_bad_requests_with_their_message() {
        let expired = ApiError::from(CoreError::OtpExpired);
        assert_eq!(expired, ApiError::BadRequest("OTP has expired".to_string()));

        let incorrect = ApiError::from(CoreError::IncorrectOtp);
        assert_eq!(incorrect, ApiError::BadRequest("incorrect OTP".to_string()));
    }

    #[test]
    fn inference_failures_hide_the_cause() {
        let api_error = ApiError::from(CoreError::Inference("tensor shape".into()));

        assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.to_string(), "internal server error");
    }

    #[test]
    fn forbidden_and_not_found_keep_their_status() {
        assert_eq!(
            ApiError::from(CoreError::Forbidden).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from(CoreError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
    }
}
