//! HTTP request handlers for the gateway API.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use observability::GatewayMetrics;
use serde_json::Value;
use std::sync::Arc;

use crate::aggregate::collect_prices;
use crate::api::models::*;
use crate::export::{to_csv, to_json};
use crate::fetch::PriceFetcher;
use crate::symbols::resolve_symbols;

/// Shared state for the gateway handlers.
///
/// Built once at startup from the frozen configuration; handlers only read it.
pub struct GatewayApiState {
    pub service_name: String,
    pub fetcher: PriceFetcher,
    pub default_symbols: Vec<String>,
    pub metrics: GatewayMetrics,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        time: Utc::now().timestamp_millis(),
    })
}

/// GET /
pub async fn index(State(state): State<Arc<GatewayApiState>>) -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        name: state.service_name.clone(),
        docs: "/apidocs/",
        live_prices: "/live/prices",
        export_csv: "/export/csv",
    })
}

/// GET /live/prices
///
/// 200 with the symbol mapping, or 502 with an error envelope when every
/// requested symbol failed. An explicitly-empty symbol list is vacuously
/// all-succeeded and returns `{}`.
pub async fn live_prices(
    State(state): State<Arc<GatewayApiState>>,
    Query(params): Query<SymbolsQuery>,
) -> Result<Json<Value>, (StatusCode, Json<UpstreamUnavailableResponse>)> {
    state.metrics.record_request("live_prices");

    let symbols = resolve_symbols(&params.symbols, &state.default_symbols);
    let prices = collect_prices(&symbols, &state.fetcher).await;

    if prices.all_failed() {
        return Err((
            StatusCode::BAD_GATEWAY,
            Json(UpstreamUnavailableResponse {
                error: "Binance data unavailable",
                details: to_json(&prices),
            }),
        ));
    }

    Ok(Json(to_json(&prices)))
}

/// GET /export/csv
///
/// Always 200 on upstream trouble: failed symbols degrade to empty cells so
/// the export stays well-formed. Only a writer error maps to 500.
pub async fn export_csv(
    State(state): State<Arc<GatewayApiState>>,
    Query(params): Query<SymbolsQuery>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    state.metrics.record_request("export_csv");

    let symbols = resolve_symbols(&params.symbols, &state.default_symbols);
    let prices = collect_prices(&symbols, &state.fetcher).await;

    let body = to_csv(&prices).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to render CSV: {}", e),
            }),
        )
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=prices.csv",
            ),
        ],
        body,
    )
        .into_response())
}
