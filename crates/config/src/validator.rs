use crate::*;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Auth: api_key must not be empty")]
    MissingApiKey,

    #[error("Auth: api_key contains an unresolved ${{VAR}} placeholder")]
    UnresolvedApiKey,

    #[error("Symbols: default symbol list must not be empty")]
    NoDefaultSymbols,

    #[error("Upstream: invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("Upstream: ticker path must start with '/', got '{0}'")]
    InvalidTickerPath(String),

    #[error("Upstream: timeout_seconds must be positive, got {0}")]
    InvalidTimeout(f64),

    #[error("Http: port must not be 0")]
    InvalidPort,
}

/// Outcome of validating a [`GatewayConfig`].
///
/// Errors block startup; warnings are logged and ignored.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn warn(&mut self, field: &str, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            field: field.to_string(),
            message: message.into(),
        });
    }
}

pub fn validate_config(config: &GatewayConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if config.auth.api_key.trim().is_empty() {
        report.errors.push(ValidationError::MissingApiKey);
    } else if has_unresolved_env_vars(&config.auth.api_key) {
        report.errors.push(ValidationError::UnresolvedApiKey);
    }

    if config.symbols.defaults.is_empty() {
        report.errors.push(ValidationError::NoDefaultSymbols);
    }
    for sym in &config.symbols.defaults {
        if sym.chars().any(|c| c.is_ascii_lowercase()) {
            report.warn(
                "symbols.defaults",
                format!("symbol '{}' is not uppercase; it will be normalized at load", sym),
            );
        }
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => {
            report
                .errors
                .push(ValidationError::InvalidBaseUrl(config.upstream.base_url.clone()));
        }
    }

    if !config.upstream.ticker_path.starts_with('/') {
        report
            .errors
            .push(ValidationError::InvalidTickerPath(config.upstream.ticker_path.clone()));
    }

    if config.upstream.timeout_seconds <= 0.0 {
        report
            .errors
            .push(ValidationError::InvalidTimeout(config.upstream.timeout_seconds));
    }

    if config.upstream.retries > 10 {
        report.warn(
            "upstream.retries",
            format!(
                "{} retries with a {}ms delay will hold requests open for a long time",
                config.upstream.retries, config.upstream.retry_delay_ms
            ),
        );
    }

    if config.http.port == 0 {
        report.errors.push(ValidationError::InvalidPort);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::generate_default_config;

    #[test]
    fn test_default_config_is_valid() {
        let report = validate_config(&generate_default_config());
        assert!(report.is_valid(), "errors: {:?}", report.errors);
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let mut config = generate_default_config();
        config.auth.api_key = "  ".to_string();
        let report = validate_config(&config);
        assert!(!report.is_valid());
        assert!(matches!(report.errors[0], ValidationError::MissingApiKey));
    }

    #[test]
    fn test_unresolved_placeholder_rejected() {
        let mut config = generate_default_config();
        config.auth.api_key = "${API_KEY}".to_string();
        let report = validate_config(&config);
        assert!(report
            .errors
            .iter()
            .any(|e| matches!(e, ValidationError::UnresolvedApiKey)));
    }

    #[test]
    fn test_bad_upstream_url_rejected() {
        let mut config = generate_default_config();
        config.upstream.base_url = "not a url".to_string();
        let report = validate_config(&config);
        assert!(report
            .errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_lowercase_default_symbol_warns() {
        let mut config = generate_default_config();
        config.symbols.defaults = vec!["btcusdt".to_string()];
        let report = validate_config(&config);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = generate_default_config();
        config.upstream.timeout_seconds = 0.0;
        let report = validate_config(&config);
        assert!(report
            .errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidTimeout(_))));
    }
}
