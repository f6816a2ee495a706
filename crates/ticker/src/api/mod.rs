//! HTTP API for the price gateway.
//!
//! ## Modules
//!
//! - `handlers` - Request handlers and shared state
//! - `routes` - Axum router
//! - `models` - Request/response types

pub mod handlers;
pub mod models;
pub mod routes;

pub use handlers::GatewayApiState;
pub use routes::gateway_routes;
