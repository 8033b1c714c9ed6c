//! API route declarations (e.g., /api/v1/*)

pub mod static_routes;
pub mod workspace_routes;
