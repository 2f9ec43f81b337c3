use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    request_otp::{__path_request_otp, request_otp},
    verify_otp::{__path_verify_otp, verify_otp},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(request_otp, verify_otp))]
pub struct OtpApiDoc;

/// Password-reset endpoints stay public: the caller has forgotten their
/// password.
pub fn otp_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users/request-otp", state.args.server.root_path),
            post(request_otp),
        )
        .route(
            &format!("{}/users/verify-otp", state.args.server.root_path),
            post(verify_otp),
        )
}
