pub mod static_files;
pub mod workspace;
