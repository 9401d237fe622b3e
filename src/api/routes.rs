//! Router configuration for the API.
//!
//! Handlers register themselves on `OpenApiRouter`s so the OpenAPI document
//! is assembled from the same source as the routing table.

use axum::{Json, Router, middleware, routing::get};
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Creates the main application router with all routes and middleware.
///
/// Layers run outermost first: request ID, then access logging, then
/// compression and CORS.
pub fn create_router(state: AppState, cors_enabled: bool) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(handlers::recipes::recipe_routes())
        .merge(handlers::comments::comment_routes())
        .merge(handlers::user_likes::user_like_routes())
        .merge(handlers::health::health_routes())
        .split_for_parts();

    let mut router = router
        .route(OPENAPI_PATH, get(move || std::future::ready(Json(api.clone()))))
        .layer(CompressionLayer::new());

    if cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router
        // last added runs first, so logging sees the ID set by request_id
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
