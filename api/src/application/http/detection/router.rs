use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    detect_disease::{__path_detect_disease, detect_disease},
    get_all_detections::{__path_get_all_detections, get_all_detections},
    get_detection_history::{__path_get_detection_history, get_detection_history},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(detect_disease, get_detection_history, get_all_detections))]
pub struct DetectionApiDoc;

pub fn detection_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/detection/detect", state.args.server.root_path),
            post(detect_disease),
        )
        .route(
            &format!("{}/detection/history", state.args.server.root_path),
            get(get_detection_history),
        )
        .route(
            &format!(
                "{}/detection/admin/detections",
                state.args.server.root_path
            ),
            get(get_all_detections),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
