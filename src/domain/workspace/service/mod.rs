pub mod workspace_detail_service;
pub mod workspace_service;
