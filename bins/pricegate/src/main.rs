//! PriceGate CLI and gateway binary
//!
//! Entry point for the gateway. Provides commands for initializing and
//! validating the configuration and for starting the server.

use anyhow::Result;
use cli::{Cli, Commands};
use config::{generate_default_config, load_config, save_config, validate_config, GatewayConfig};
use observability::{init_logging, GatewayMetrics, LogFormat};
use server::{AuthState, HttpServer, PathPolicy, ServerConfig};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use ticker::api::{gateway_routes, GatewayApiState};
use ticker::{BinanceFuturesClient, PriceFetcher, RetryPolicy};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Start {
            config,
            port,
            host,
            log_format,
        } => {
            let format: LogFormat = log_format.parse().map_err(anyhow::Error::msg)?;
            init_logging("pricegate", format)?;
            info!("PriceGate starting...");
            start_gateway(config, port, host).await
        }
        Commands::Validate { config } => {
            init_logging("pricegate", LogFormat::Compact)?;
            validate_command(config)
        }
        Commands::Init { output } => {
            init_logging("pricegate", LogFormat::Compact)?;
            init_command(output)
        }
    }
}

/// Load, validate and freeze the configuration, then run the HTTP server
/// until Ctrl+C.
async fn start_gateway<P: AsRef<Path>>(
    config_path: P,
    port_override: Option<u16>,
    host_override: Option<String>,
) -> Result<()> {
    let mut config = load_config(config_path.as_ref())?;

    if let Some(port) = port_override {
        config.http.port = port;
    }
    if let Some(host) = host_override {
        config.http.host = host;
    }

    let report = validate_config(&config);
    for warning in &report.warnings {
        warn!(field = %warning.field, message = %warning.message, "Configuration warning");
    }
    if !report.is_valid() {
        for err in &report.errors {
            error!("{}", err);
        }
        anyhow::bail!("Cannot start gateway due to configuration errors");
    }

    if let Some(metrics_port) = config.http.metrics_port {
        observability::init_metrics(metrics_port)?;
    }

    let server = build_server(&config)?;
    info!(
        host = %config.http.host,
        port = config.http.port,
        upstream = %config.upstream.base_url,
        "Gateway configured"
    );

    server.run_with_ctrl_c().await?;
    Ok(())
}

/// Assemble the fetch pipeline and router from a validated config.
fn build_server(config: &GatewayConfig) -> Result<HttpServer> {
    let client = BinanceFuturesClient::new(
        &config.upstream.base_url,
        &config.upstream.ticker_path,
        Duration::from_secs_f64(config.upstream.timeout_seconds),
    )?;
    let policy = RetryPolicy::new(
        config.upstream.retries,
        Duration::from_millis(config.upstream.retry_delay_ms),
    );

    let api_state = Arc::new(GatewayApiState {
        service_name: config.gateway.name.clone(),
        fetcher: PriceFetcher::new(Arc::new(client), policy),
        default_symbols: config.symbols.defaults.clone(),
        metrics: GatewayMetrics::new(),
    });

    let auth_state = Arc::new(AuthState {
        api_key: config.auth.api_key.clone(),
        policy: PathPolicy::new(
            config.auth.public_paths.iter().cloned(),
            config.auth.public_prefixes.iter().cloned(),
        ),
        metrics: GatewayMetrics::new(),
    });

    let router = server::with_api_key_auth(gateway_routes(api_state), auth_state)
        .layer(TraceLayer::new_for_http());

    let server_config = ServerConfig::new(config.http.host.clone(), config.http.port);
    Ok(HttpServer::new(server_config, router))
}

fn validate_command<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = load_config(config_path.as_ref())?;
    let report = validate_config(&config);

    for warning in &report.warnings {
        warn!(field = %warning.field, message = %warning.message, "Configuration warning");
    }

    if report.is_valid() {
        info!("Configuration is valid");
        Ok(())
    } else {
        for err in &report.errors {
            error!("{}", err);
        }
        anyhow::bail!("Configuration has {} error(s)", report.errors.len());
    }
}

fn init_command<P: AsRef<Path>>(output: P) -> Result<()> {
    let output = output.as_ref();
    if output.exists() {
        anyhow::bail!("Refusing to overwrite existing file: {:?}", output);
    }

    let config = generate_default_config();
    save_config(&config, output)?;
    info!("Wrote default configuration to {:?}", output);
    Ok(())
}
