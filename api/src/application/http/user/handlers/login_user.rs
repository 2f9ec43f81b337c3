use axum::{Json, extract::State};
use serde::Serialize;
use smartkheti_core::domain::user::{
    entities::AuthToken, ports::UserService, value_objects::LoginInput,
};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user::validators::LoginUserValidator,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub data: AuthToken,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "user",
    summary = "Log in with phone and password",
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
)]
pub async fn login_user(
    State(state): State<AppState>,
    Json(payload): Json<LoginUserValidator>,
) -> Result<Response<LoginResponse>, ApiError> {
    payload.validate().map_err(ApiError::from_validation)?;

    let token = state
        .service
        .login(LoginInput {
            phone: payload.phone,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse { data: token }))
}
