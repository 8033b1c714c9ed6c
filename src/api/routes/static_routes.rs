//! Static routes served from the site root

use axum::{middleware, routing::get, Router};

use crate::api::controller::static_files::StaticController;
use crate::api::middleware::request_context::static_headers_middleware;
use crate::app_state::AppState;

/// Site-root routes; also owns the fallback for every path outside the API.
pub fn static_routes() -> Router<AppState> {
    Router::new()
        .route("/robots.txt", get(StaticController::robots))
        .fallback(StaticController::not_found)
        .layer(middleware::from_fn(static_headers_middleware))
}
