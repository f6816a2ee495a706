use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod parser;
pub mod substitution;
pub mod validator;

pub use defaults::*;
pub use parser::*;
pub use substitution::*;
pub use validator::*;

/// Top-level gateway configuration.
///
/// Constructed once at startup (from a YAML file or [`generate_default_config`]),
/// validated, then frozen. Request handling only ever reads it through a shared
/// reference; nothing mutates it after startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    #[serde(default = "default_gateway_section")]
    pub gateway: GatewaySection,
    #[serde(default = "default_auth_section")]
    pub auth: AuthSection,
    #[serde(default = "default_symbols_section")]
    pub symbols: SymbolsSection,
    #[serde(default = "default_upstream_section")]
    pub upstream: UpstreamSection,
    #[serde(default = "default_http_section")]
    pub http: HttpSection,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewaySection {
    pub name: String,
    pub description: String,
    pub version: String,
}

/// API key gating. All paths are protected unless listed here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSection {
    /// Shared secret expected in the `X-API-KEY` header on protected paths.
    #[serde(rename = "api_key")]
    pub api_key: String,
    /// Exact-match paths that never require the key (e.g. `/health`, `/`).
    #[serde(default = "default_public_paths")]
    pub public_paths: Vec<String>,
    /// Prefix-match exemptions, used for documentation/static collaborators
    /// that serve many sub-paths.
    #[serde(default = "default_public_prefixes")]
    pub public_prefixes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SymbolsSection {
    /// Symbols served when the caller does not pass `?symbols=`.
    #[serde(default = "default_symbols")]
    pub defaults: Vec<String>,
}

/// Upstream ticker service (Binance USDT-margined futures by default).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamSection {
    #[serde(rename = "base_url")]
    pub base_url: String,
    #[serde(rename = "ticker_path")]
    #[serde(default = "default_ticker_path")]
    pub ticker_path: String,
    /// Per-call timeout in seconds.
    #[serde(rename = "timeout_seconds")]
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: f64,
    /// Additional attempts after the first failure.
    #[serde(default = "default_retries")]
    pub retries: u32,
    /// Fixed delay between attempts, in milliseconds. No jitter.
    #[serde(rename = "retry_delay_ms")]
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Optional Prometheus exporter port. Disabled when absent.
    #[serde(rename = "metrics_port")]
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

impl GatewayConfig {
    /// Normalize the configured default symbols to uppercase.
    ///
    /// The resolver uppercases caller-supplied symbols; configured defaults get
    /// the same treatment once, at load time.
    pub fn normalize_symbols(&mut self) {
        for sym in &mut self.symbols.defaults {
            *sym = sym.trim().to_uppercase();
        }
        self.symbols.defaults.retain(|s| !s.is_empty());
    }
}
