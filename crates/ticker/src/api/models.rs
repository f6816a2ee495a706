//! Request/response types for the gateway API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters shared by the price endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SymbolsQuery {
    /// Comma-separated symbol list; blank falls back to the configured defaults.
    #[serde(default)]
    pub symbols: String,
}

/// Generic error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 502 envelope returned by `/live/prices` when every symbol failed.
#[derive(Debug, Serialize)]
pub struct UpstreamUnavailableResponse {
    pub error: &'static str,
    /// Per-symbol failure detail, same shape as the success mapping.
    pub details: Value,
}

/// `/health` body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Current time in epoch milliseconds.
    pub time: i64,
}

/// `/` body: where to find things.
#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub name: String,
    pub docs: &'static str,
    pub live_prices: &'static str,
    pub export_csv: &'static str,
}
