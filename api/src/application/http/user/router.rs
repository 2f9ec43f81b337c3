use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    get_profile::{__path_get_profile, get_profile},
    login_user::{__path_login_user, login_user},
    register_user::{__path_register_user, register_user},
    update_profile::{__path_update_profile, update_profile},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(register_user, login_user, get_profile, update_profile))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route(
            &format!("{}/users/register", state.args.server.root_path),
            post(register_user),
        )
        .route(
            &format!("{}/users/login", state.args.server.root_path),
            post(login_user),
        );

    let protected = Router::new()
        .route(
            &format!("{}/users/profile", state.args.server.root_path),
            get(get_profile),
        )
        .route(
            &format!("{}/users/profile", state.args.server.root_path),
            put(update_profile),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth));

    public.merge(protected)
}
