//! Default values for every configuration section.

use crate::*;

pub fn default_gateway_section() -> GatewaySection {
    GatewaySection {
        name: "PriceGate".to_string(),
        description: "Authenticated crypto price gateway".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub fn default_auth_section() -> AuthSection {
    AuthSection {
        // Overridable via ${API_KEY} substitution in the config file.
        api_key: "onur123".to_string(),
        public_paths: default_public_paths(),
        public_prefixes: default_public_prefixes(),
    }
}

pub fn default_public_paths() -> Vec<String> {
    vec!["/health".to_string(), "/".to_string()]
}

pub fn default_public_prefixes() -> Vec<String> {
    vec![
        "/apidocs".to_string(),
        "/apispec.json".to_string(),
        "/flasgger_static".to_string(),
    ]
}

pub fn default_symbols_section() -> SymbolsSection {
    SymbolsSection {
        defaults: default_symbols(),
    }
}

pub fn default_symbols() -> Vec<String> {
    ["BTCUSDT", "ETHUSDT", "SOLUSDT", "DOGEUSDT", "XRPUSDT"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn default_upstream_section() -> UpstreamSection {
    UpstreamSection {
        base_url: "https://fapi.binance.com".to_string(),
        ticker_path: default_ticker_path(),
        timeout_seconds: default_timeout_seconds(),
        retries: default_retries(),
        retry_delay_ms: default_retry_delay_ms(),
    }
}

pub fn default_ticker_path() -> String {
    "/fapi/v1/ticker/24hr".to_string()
}

pub fn default_timeout_seconds() -> f64 {
    6.0
}

pub fn default_retries() -> u32 {
    2
}

pub fn default_retry_delay_ms() -> u64 {
    200
}

pub fn default_http_section() -> HttpSection {
    HttpSection {
        host: default_host(),
        port: default_port(),
        metrics_port: None,
    }
}

pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_port() -> u16 {
    10000
}
