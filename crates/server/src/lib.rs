//! Server infrastructure for PriceGate
//!
//! Provides the Axum HTTP server with graceful shutdown, bind configuration,
//! and the API-key auth middleware that gates every non-whitelisted path.
//!
//! # Example
//!
//! ```ignore
//! use server::{auth, HttpServer, ServerConfig};
//!
//! let router = my_routes();
//! let router = auth::with_api_key_auth(router, auth_state);
//! let server = HttpServer::new(ServerConfig::new("0.0.0.0", 10000), router);
//! server.run_with_ctrl_c().await?;
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod shutdown;

pub use auth::{with_api_key_auth, AuthState, PathPolicy, API_KEY_HEADER};
pub use config::{ServerConfig, DEFAULT_HTTP_PORT};
pub use error::{Result, ServerError};
pub use http::HttpServer;
pub use shutdown::ShutdownController;
