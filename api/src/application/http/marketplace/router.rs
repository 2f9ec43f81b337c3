use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    create_listing::{__path_create_listing, create_listing},
    delete_listing::{__path_delete_listing, delete_listing},
    get_listing::{__path_get_listing, get_listing},
    list_categories::{__path_list_categories, list_categories},
    list_listings::{__path_list_listings, list_listings},
    my_listings::{__path_my_listings, my_listings},
    update_listing::{__path_update_listing, update_listing},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    create_listing,
    list_listings,
    get_listing,
    my_listings,
    update_listing,
    delete_listing,
    list_categories
))]
pub struct MarketplaceApiDoc;

pub fn marketplace_routes(state: AppState) -> Router<AppState> {
    // Browsing is open; everything that writes, and the my-listings view,
    // needs an authenticated farmer.
    let public = Router::new()
        .route(
            &format!("{}/marketplace/listings", state.args.server.root_path),
            get(list_listings),
        )
        .route(
            &format!(
                "{}/marketplace/listings/{{listing_id}}",
                state.args.server.root_path
            ),
            get(get_listing),
        )
        .route(
            &format!("{}/marketplace/categories", state.args.server.root_path),
            get(list_categories),
        );

    let protected = Router::new()
        .route(
            &format!("{}/marketplace/listings", state.args.server.root_path),
            post(create_listing),
        )
        .route(
            &format!("{}/marketplace/listings/my", state.args.server.root_path),
            get(my_listings),
        )
        .route(
            &format!(
                "{}/marketplace/listings/{{listing_id}}",
                state.args.server.root_path
            ),
            put(update_listing),
        )
        .route(
            &format!(
                "{}/marketplace/listings/{{listing_id}}",
                state.args.server.root_path
            ),
            delete(delete_listing),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth));

    public.merge(protected)
}
