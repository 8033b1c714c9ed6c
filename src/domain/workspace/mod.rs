pub mod dto;
pub mod errors;
pub mod mappers;
pub mod model;
pub mod service;
