use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

const ROBOTS_TXT: &str = "User-agent: *\nDisallow: /\n";

pub struct StaticController;

impl StaticController {
    /// Keep crawlers away from the whole site.
    pub async fn robots() -> impl IntoResponse {
        ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], ROBOTS_TXT)
    }

    pub async fn not_found() -> impl IntoResponse {
        (StatusCode::NOT_FOUND, "The requested resource was not found")
    }
}
