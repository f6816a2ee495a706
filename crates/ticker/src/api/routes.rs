//! Axum route definitions for the gateway API.

use crate::api::handlers::{self, GatewayApiState};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Create the gateway routes.
///
/// # Routes
///
/// - `GET /health` - Liveness probe (public)
/// - `GET /` - Service descriptor (public)
/// - `GET /live/prices` - Aggregated prices as JSON (protected)
/// - `GET /export/csv` - Aggregated prices as CSV attachment (protected)
///
/// Public/protected classification is applied by the auth layer in the
/// `server` crate, not here.
pub fn gateway_routes(state: Arc<GatewayApiState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::index))
        .route("/live/prices", get(handlers::live_prices))
        .route("/export/csv", get(handlers::export_csv))
        .with_state(state)
}
