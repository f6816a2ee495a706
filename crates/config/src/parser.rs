use crate::*;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

#[instrument(skip(path))]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GatewayConfig> {
    let path = path.as_ref();
    info!("Loading configuration from: {:?}", path);

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    // Resolve ${API_KEY}-style placeholders before parsing.
    let substituted = substitution::substitute_env_vars(&content)?;
    debug!("Environment variable substitution completed");

    let mut config: GatewayConfig = serde_yaml::from_str(&substituted)
        .with_context(|| "Failed to parse YAML configuration")?;

    config.normalize_symbols();

    info!("Configuration loaded successfully");
    Ok(config)
}

#[instrument]
pub fn generate_default_config() -> GatewayConfig {
    GatewayConfig {
        gateway: defaults::default_gateway_section(),
        auth: defaults::default_auth_section(),
        symbols: defaults::default_symbols_section(),
        upstream: defaults::default_upstream_section(),
        http: defaults::default_http_section(),
    }
}

pub fn save_config<P: AsRef<Path>>(config: &GatewayConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    let yaml = serde_yaml::to_string(config).context("Failed to serialize configuration")?;
    fs::write(path, yaml).with_context(|| format!("Failed to write config file: {:?}", path))?;
    info!("Configuration written to: {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("pricegate-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("gateway.yaml");

        let config = generate_default_config();
        save_config(&config, &path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.auth.api_key, config.auth.api_key);
        assert_eq!(loaded.symbols.defaults, config.symbols.defaults);
        assert_eq!(loaded.upstream.retries, config.upstream.retries);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_normalizes_symbols() {
        let dir = std::env::temp_dir().join("pricegate-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("lowercase.yaml");

        let yaml = "auth:\n  api_key: k\nsymbols:\n  defaults: [btcusdt, ethusdt]\nupstream:\n  base_url: https://fapi.binance.com\n";
        std::fs::write(&path, yaml).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.symbols.defaults, vec!["BTCUSDT", "ETHUSDT"]);

        std::fs::remove_file(&path).unwrap();
    }
}
