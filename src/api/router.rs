//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. The only middleware is CORS: the API
//! is consumed cross-origin by the web front end.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{delete, get};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::config;
use crate::core_state::CoreState;

/// Build the API router with all routes under `/api/`.
pub fn api_router(core: Arc<CoreState>) -> Router {
    let ctx = ApiContext::new(core);
    build_router(ctx)
}

fn build_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/patients",
            get(endpoints::patients::list).post(endpoints::patients::create),
        )
        .route("/patients/search", get(endpoints::patients::search))
        .route(
            "/patients/:id",
            get(endpoints::patients::detail)
                .put(endpoints::patients::update)
                .delete(endpoints::patients::delete),
        )
        .route(
            "/appointments",
            get(endpoints::appointments::list).post(endpoints::appointments::create),
        )
        .route("/appointments/:id", delete(endpoints::appointments::delete))
        .route(
            "/appointment-types",
            get(endpoints::appointment_types::list),
        )
        .with_state(ctx);

    Router::new().nest("/api", routes).layer(cors_layer())
}

/// Exact origin when `CLINICA_CORS_ORIGIN` is set, permissive otherwise.
fn cors_layer() -> CorsLayer {
    match config::cors_origin().and_then(|o| o.parse::<HeaderValue>().ok()) {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    }
}
