use axum::{Json, extract::State};
use smartkheti_core::domain::otp::{ports::OtpService, value_objects::VerifyOtpInput};
use validator::Validate;

use super::request_otp::MessageResponse;
use crate::application::http::{
    otp::validators::VerifyOtpValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/verify-otp",
    tag = "otp",
    summary = "Verify a reset code and set a new password",
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, description = "Incorrect or expired OTP"),
        (status = 404, description = "No account for this phone")
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<VerifyOtpValidator>,
) -> Result<Response<MessageResponse>, ApiError> {
    payload.validate().map_err(ApiError::from_validation)?;

    state
        .service
        .verify_otp(VerifyOtpInput {
            phone: payload.phone,
            code: payload.otp,
            new_password: payload.new_password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageResponse {
        message: "Password reset successfully".to_string(),
    }))
}
