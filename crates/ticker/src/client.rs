//! Upstream ticker client - trait and implementations

use async_trait::async_trait;
use std::time::Duration;

use crate::error::TickerError;
use crate::types::Ticker24hr;

pub type TickerResult<T> = std::result::Result<T, TickerError>;

/// Client for the upstream 24hr ticker endpoint - protocol agnostic.
///
/// One call per symbol; the per-call timeout lives in the implementation.
/// Retry policy is layered on top by [`PriceFetcher`](crate::fetch::PriceFetcher),
/// not here.
#[async_trait]
pub trait TickerClient: Send + Sync {
    /// Fetch the 24hr ticker for one symbol.
    async fn ticker_24hr(&self, symbol: &str) -> TickerResult<Ticker24hr>;
}

// ==================== HTTP Implementation ====================

/// Binance USDT-margined futures ticker client.
pub struct BinanceFuturesClient {
    http: reqwest::Client,
    endpoint: String,
}

impl BinanceFuturesClient {
    /// Build a client with a bounded per-call timeout.
    pub fn new(base_url: &str, ticker_path: &str, timeout: Duration) -> TickerResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ticker_path),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TickerClient for BinanceFuturesClient {
    async fn ticker_24hr(&self, symbol: &str) -> TickerResult<Ticker24hr> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("symbol", symbol)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TickerError::Status {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Ticker24hr>().await?)
    }
}

// ==================== Mock Implementation ====================

enum Scripted {
    Success { price: String, ts: Option<i64> },
    Failure(String),
}

/// Mock ticker client for testing.
///
/// Responses are scripted per symbol and consumed in order; every call is
/// recorded. A call with no scripted response left returns a connection error.
#[derive(Default)]
pub struct MockTickerClient {
    script: std::sync::Mutex<std::collections::HashMap<String, std::collections::VecDeque<Scripted>>>,
    calls: std::sync::Mutex<Vec<String>>,
}

impl MockTickerClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response for `symbol`.
    pub fn script_success(&self, symbol: &str, price: &str, ts: Option<i64>) {
        self.script
            .lock()
            .unwrap()
            .entry(symbol.to_string())
            .or_default()
            .push_back(Scripted::Success {
                price: price.to_string(),
                ts,
            });
    }

    /// Queue a failing response for `symbol`.
    pub fn script_failure(&self, symbol: &str, error: &str) {
        self.script
            .lock()
            .unwrap()
            .entry(symbol.to_string())
            .or_default()
            .push_back(Scripted::Failure(error.to_string()));
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls recorded for one symbol.
    pub fn call_count(&self, symbol: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.as_str() == symbol)
            .count()
    }
}

#[async_trait]
impl TickerClient for MockTickerClient {
    async fn ticker_24hr(&self, symbol: &str) -> TickerResult<Ticker24hr> {
        self.calls.lock().unwrap().push(symbol.to_string());

        let scripted = self
            .script
            .lock()
            .unwrap()
            .get_mut(symbol)
            .and_then(|queue| queue.pop_front());

        match scripted {
            Some(Scripted::Success { price, ts }) => Ok(Ticker24hr {
                last_price: Some(price),
                close_time: ts,
                open_time: None,
            }),
            Some(Scripted::Failure(error)) => Err(TickerError::Connection(error)),
            None => Err(TickerError::Connection(format!(
                "no scripted response for {}",
                symbol
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_mock_returns_scripted_responses_in_order() {
        let mock = MockTickerClient::new();
        mock.script_failure("BTCUSDT", "connection reset");
        mock.script_success("BTCUSDT", "65000.10", Some(1_700_000_000_000));

        let first = mock.ticker_24hr("BTCUSDT").await;
        assert_matches!(first, Err(TickerError::Connection(msg)) if msg == "connection reset");

        let second = mock.ticker_24hr("BTCUSDT").await.unwrap();
        assert_eq!(second.last_price.as_deref(), Some("65000.10"));

        assert_eq!(mock.call_count("BTCUSDT"), 2);
    }

    #[tokio::test]
    async fn test_mock_unscripted_symbol_fails() {
        let mock = MockTickerClient::new();
        let result = mock.ticker_24hr("FAKE").await;
        assert_matches!(result, Err(TickerError::Connection(_)));
        assert_eq!(mock.calls(), vec!["FAKE"]);
    }

    #[test]
    fn test_binance_client_endpoint() {
        let client = BinanceFuturesClient::new(
            "https://fapi.binance.com/",
            "/fapi/v1/ticker/24hr",
            Duration::from_secs(6),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "https://fapi.binance.com/fapi/v1/ticker/24hr"
        );
    }
}
