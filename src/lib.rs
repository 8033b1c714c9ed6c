//! Pillar: a read-mostly support facade over the cloud provisioning service.

pub mod api;
pub mod app_state;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod routes;
pub mod server;
