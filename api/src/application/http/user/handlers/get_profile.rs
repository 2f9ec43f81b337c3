use axum::{Extension, extract::State};
use smartkheti_core::domain::user::{entities::User, ports::UserService};

use super::register_user::UserResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/profile",
    tag = "user",
    summary = "Caller's profile",
    responses(
        (status = 200, body = UserResponse),
        (status = 401, description = "Unauthenticated")
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Response<UserResponse>, ApiError> {
    let user = state
        .service
        .get_profile(user.id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserResponse { data: user }))
}
