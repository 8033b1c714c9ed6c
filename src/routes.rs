use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

use crate::api::middleware::request_context::{api_headers_middleware, request_context_middleware};
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    // Workspace subrouter lives under /api/v1
    let api_v1 = Router::new()
        .nest("/workspaces", crate::api::routes::workspace_routes::workspace_routes())
        .fallback(handler_404)
        .layer(middleware::from_fn(api_headers_middleware));

    Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // API v1
        .nest("/api/v1", api_v1)
        // Static files, plus the 404 fallback for everything else
        .merge(crate::api::routes::static_routes::static_routes())
        .layer(middleware::from_fn(request_context_middleware))
        .layer(CorsLayer::very_permissive())
}

/// Router with shared application state attached, ready to serve
pub fn build_app(state: AppState) -> Router {
    app_router().with_state(state)
}

// Handler for root
async fn root() -> &'static str {
    "Server is running!"
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found under the API
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
