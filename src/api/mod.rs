pub mod controller;
pub mod middleware;
pub mod routes;
pub mod util;
