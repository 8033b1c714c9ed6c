use axum::extract::Request;
use axum::http::{header, HeaderName, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info_span, Instrument};

use crate::core::context::request_context::RequestContext;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Tags each request with a fresh id, runs it inside a `request` span and echoes the id back.
pub async fn request_context_middleware(mut req: Request, next: Next) -> Response {
    let ctx = RequestContext::new();
    let span = info_span!("request", path = %req.uri().path(), request = %ctx.request_id);
    req.extensions_mut().insert(ctx.clone());

    let mut response = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&ctx.request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Default headers for JSON API responses.
pub async fn api_headers_middleware(req: Request, next: Next) -> Response {
    let is_get = req.method() == Method::GET;
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    headers
        .entry(header::CONTENT_TYPE)
        .or_insert(HeaderValue::from_static("application/json"));
    if is_get {
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }
    response
}

/// Default headers for static responses.
pub async fn static_headers_middleware(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    let not_found = response.status() == StatusCode::NOT_FOUND;
    let headers = response.headers_mut();
    // Only render inside a frame of the same origin.
    headers.insert(
        header::X_FRAME_OPTIONS,
        HeaderValue::from_static("SAMEORIGIN"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("frame-ancestors 'self'"),
    );
    if not_found {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, public"),
        );
    }
    response
}
