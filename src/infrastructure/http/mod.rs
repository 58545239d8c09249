//! HTTP Layer - RESTful API

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{build_router, shutdown_signal, HttpServer, ServerConfig};
pub use state::{AppState, GatewaySettings};
