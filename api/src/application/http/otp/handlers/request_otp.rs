use axum::{Json, extract::State};
use serde::Serialize;
use smartkheti_core::domain::otp::{ports::OtpService, value_objects::RequestOtpInput};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    otp::validators::RequestOtpValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/request-otp",
    tag = "otp",
    summary = "Send a password-reset code by SMS",
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, description = "Phone number is not registered")
    ),
)]
pub async fn request_otp(
    State(state): State<AppState>,
    Json(payload): Json<RequestOtpValidator>,
) -> Result<Response<MessageResponse>, ApiError> {
    payload.validate().map_err(ApiError::from_validation)?;

    state
        .service
        .request_otp(RequestOtpInput {
            phone: payload.phone,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageResponse {
        message: "OTP sent successfully".to_string(),
    }))
}
